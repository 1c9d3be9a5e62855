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

//! RGBA colour values used by the text and highlight colour attributions.
//!
//! The persisted form is `#RRGGBBAA`. Parsing also accepts `#RRGGBB`
//! (fully opaque) and is case-insensitive; printing is always the
//! eight-digit uppercase form.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?i)([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})?$")
        .expect("hex colour pattern is valid")
});

/// An 8-bit-per-channel colour with alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }
}

/// The string was not a `#RRGGBB` or `#RRGGBBAA` colour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a #RRGGBBAA colour")]
pub struct ParseColorError(String);

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = HEX_COLOR
            .captures(s.trim())
            .ok_or_else(|| ParseColorError(s.to_owned()))?;
        let channel = |i: usize| {
            caps.get(i)
                .map(|m| u8::from_str_radix(m.as_str(), 16))
                .transpose()
                .map_err(|_| ParseColorError(s.to_owned()))
        };
        Ok(Self {
            r: channel(1)?.unwrap_or(0),
            g: channel(2)?.unwrap_or(0),
            b: channel(3)?.unwrap_or(0),
            a: channel(4)?.unwrap_or(0xff),
        })
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}
