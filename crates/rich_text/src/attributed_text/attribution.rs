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

//! The closed set of attributions a codepoint range can carry.
//!
//! | Family          | Wire name          | Value                   |
//! |-----------------|--------------------|-------------------------|
//! | Bold            | `"bold"`           | none                    |
//! | Italic          | `"italic"`         | none                    |
//! | Underline       | `"underline"`      | none                    |
//! | Strikethrough   | `"strikethrough"`  | none                    |
//! | Text colour     | `"textColor"`      | [`Rgba`]                |
//! | Highlight       | `"highlightColor"` | [`Rgba`]                |
//! | Font size       | `"fontSize"`       | [`FontSize`]            |
//! | Entity          | `"entity"`         | [`EntityRef`]           |

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::Rgba;

/// A font size in points.
///
/// Equality, ordering and hashing use the bit pattern of the value so
/// that sizes can key ordered maps. `-0.0` is normalised to `0.0` and
/// NaN is never constructed by this crate.
#[derive(Clone, Copy, Debug)]
pub struct FontSize(f32);

impl FontSize {
    pub fn new(points: f32) -> Self {
        Self(if points == 0.0 { 0.0 } else { points })
    }

    pub fn points(self) -> f32 {
        self.0
    }

    /// Shift by `delta` points, keeping the result within `[min, max]`.
    /// `max` wins if the bounds are swapped.
    pub fn adjusted(self, delta: f32, min: f32, max: f32) -> Self {
        Self::new((self.0 + delta).max(min).min(max))
    }
}

impl PartialEq for FontSize {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FontSize {}

impl PartialOrd for FontSize {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FontSize {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for FontSize {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt", self.0)
    }
}

impl From<f32> for FontSize {
    fn from(points: f32) -> Self {
        Self::new(points)
    }
}

/// A reference to a span found by the external entity recognizer.
///
/// The offsets echo what the recognizer reported; they are kept for
/// traceability and do not drive where the attribution is applied.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityRef {
    pub name: String,
    pub entity_type: String,
    pub recognized: bool,
    pub start_offset: usize,
    pub end_offset: usize,
}

/// The category of an [`Attribution`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum AttributionFamily {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    TextColor,
    HighlightColor,
    FontSize,
    Entity,
}

impl AttributionFamily {
    /// Whether attributions of this family carry a value.
    pub fn is_parameterized(self) -> bool {
        matches!(self, Self::TextColor | Self::HighlightColor | Self::FontSize)
    }

    /// Whether spans of this family grow when text is typed right after
    /// them.
    pub(crate) fn expands_at_end(self) -> bool {
        !matches!(self, Self::Entity)
    }
}

/// A marker applied to a contiguous range of codepoints.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribution {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    TextColor(Rgba),
    HighlightColor(Rgba),
    FontSize(FontSize),
    Entity(EntityRef),
}

impl Attribution {
    pub fn family(&self) -> AttributionFamily {
        match self {
            Self::Bold => AttributionFamily::Bold,
            Self::Italic => AttributionFamily::Italic,
            Self::Underline => AttributionFamily::Underline,
            Self::Strikethrough => AttributionFamily::Strikethrough,
            Self::TextColor(_) => AttributionFamily::TextColor,
            Self::HighlightColor(_) => AttributionFamily::HighlightColor,
            Self::FontSize(_) => AttributionFamily::FontSize,
            Self::Entity(_) => AttributionFamily::Entity,
        }
    }

    pub fn is_family(&self, family: AttributionFamily) -> bool {
        self.family() == family
    }
}

/// The boolean (presence-only) inline styles.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    EnumIter,
)]
#[strum(serialize_all = "camelCase")]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

impl From<InlineStyle> for Attribution {
    fn from(style: InlineStyle) -> Self {
        match style {
            InlineStyle::Bold => Self::Bold,
            InlineStyle::Italic => Self::Italic,
            InlineStyle::Underline => Self::Underline,
            InlineStyle::Strikethrough => Self::Strikethrough,
        }
    }
}

/// A value-carrying style. At most one value per family is active at a
/// position once it has been applied through the composer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParameterizedStyle {
    TextColor(Rgba),
    HighlightColor(Rgba),
    FontSize(FontSize),
}

impl ParameterizedStyle {
    pub fn family(&self) -> AttributionFamily {
        match self {
            Self::TextColor(_) => AttributionFamily::TextColor,
            Self::HighlightColor(_) => AttributionFamily::HighlightColor,
            Self::FontSize(_) => AttributionFamily::FontSize,
        }
    }
}

impl From<ParameterizedStyle> for Attribution {
    fn from(style: ParameterizedStyle) -> Self {
        match style {
            ParameterizedStyle::TextColor(c) => Self::TextColor(c),
            ParameterizedStyle::HighlightColor(c) => Self::HighlightColor(c),
            ParameterizedStyle::FontSize(s) => Self::FontSize(s),
        }
    }
}
