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

//! Per-paragraph structural formatting.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Ordered,
    Unordered,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Block-level formatting of a paragraph.
///
/// `heading_level` and `list_type` are never both set: the builder
/// methods that set one clear the other. `list_indent` only means
/// something while `list_type` is set. A missing `alignment` renders as
/// [`Alignment::Left`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockMetadata {
    pub heading_level: Option<HeadingLevel>,
    pub list_type: Option<ListType>,
    pub list_indent: Option<u32>,
    pub alignment: Option<Alignment>,
    pub is_block_quote: bool,
}

impl BlockMetadata {
    /// Whether any field differs from the empty default.
    pub fn has_formatting(&self) -> bool {
        *self != Self::default()
    }

    /// The alignment to render with.
    pub fn effective_alignment(&self) -> Alignment {
        self.alignment.unwrap_or(Alignment::Left)
    }

    /// Copy with a new heading level. Any list formatting is dropped.
    pub fn with_heading_level(self, heading_level: Option<HeadingLevel>) -> Self {
        Self {
            heading_level,
            list_type: None,
            list_indent: None,
            ..self
        }
    }

    /// Copy as a list item of `list_type` at `indent`. Any heading is
    /// dropped.
    pub fn with_list(self, list_type: ListType, indent: u32) -> Self {
        Self {
            heading_level: None,
            list_type: Some(list_type),
            list_indent: Some(indent),
            ..self
        }
    }

    /// Copy with list formatting removed.
    pub fn without_list(self) -> Self {
        Self {
            list_type: None,
            list_indent: None,
            ..self
        }
    }

    /// Copy with the list indent shifted by `delta`, never below zero.
    /// Blocks that are not list items are returned unchanged.
    pub fn with_list_indent_adjusted(self, delta: i32) -> Self {
        if self.list_type.is_none() {
            return self;
        }
        let current = self.list_indent.unwrap_or(0);
        let indent = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta.unsigned_abs())
        };
        Self {
            list_indent: Some(indent),
            ..self
        }
    }

    pub fn with_alignment(self, alignment: Option<Alignment>) -> Self {
        Self { alignment, ..self }
    }

    pub fn with_block_quote(self, is_block_quote: bool) -> Self {
        Self {
            is_block_quote,
            ..self
        }
    }
}
