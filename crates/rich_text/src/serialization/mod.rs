// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversion between [`Document`] and its persisted JSON form.
//!
//! ```json
//! { "version": "1.0",
//!   "nodes": [
//!     { "id": "p1", "type": "paragraph", "text": "This is bold",
//!       "attributions": [{ "start": 8, "end": 11, "type": "bold" }],
//!       "metadata": { "headingLevel": "h1" } },
//!     { "id": "r1", "type": "horizontalRule" } ] }
//! ```
//!
//! Writing is lossless. Reading is total: see [`from_json_value`].

mod parse;
mod wire;

use serde_json::Value;

use crate::Document;

pub use parse::{from_json_str, from_json_value};
pub use wire::{
    WireAttribution, WireDocument, WireMetadata, WireNode, WireNodeType,
    FORMAT_VERSION,
};

/// The persisted shape of `document`.
pub fn serialize(document: &Document) -> WireDocument {
    WireDocument::from(document)
}

pub fn to_json_value(document: &Document) -> Result<Value, serde_json::Error> {
    serde_json::to_value(serialize(document))
}

pub fn to_json_string(document: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string(&serialize(document))
}
