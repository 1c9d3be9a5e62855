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

//! Rich text attribution model and formatting commands.
//!
//! A [`Document`] is an ordered list of blocks. Each [`Paragraph`] holds
//! [`AttributedText`] (Unicode text plus overlapping codepoint-range
//! attributions) and [`BlockMetadata`]. A [`Composer`] applies
//! formatting commands to the current [`Selection`], and
//! [`serialization`] converts documents to and from a forgiving JSON
//! form.
//!
//! All offsets count Unicode scalar values.

mod attributed_text;
mod block_metadata;
mod color;
mod composer;
mod config;
mod document;
mod entities;
mod error;
mod selection;
pub mod serialization;

pub use crate::attributed_text::{
    AttributedText, Attribution, AttributionFamily, AttributionSpan,
    EntityRef, FontSize, InlineStyle, ParameterizedStyle,
};
pub use crate::block_metadata::{
    Alignment, BlockMetadata, HeadingLevel, ListType,
};
pub use crate::color::{ParseColorError, Rgba};
pub use crate::composer::{Composer, FormattingState};
pub use crate::config::FormattingConfig;
pub use crate::document::{Block, BlockId, Document, Paragraph};
pub use crate::entities::{apply_entities, Entity, EntityRecognizer};
pub use crate::error::Error;
pub use crate::selection::{Position, Selection};
pub use crate::serialization::{
    from_json_str, from_json_value, serialize, to_json_string, to_json_value,
};
