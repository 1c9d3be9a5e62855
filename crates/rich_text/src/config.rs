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

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::AttributionFamily;

/// Tunables for the formatting commands.
///
/// Every field has a default, so hosts can deserialize a partial
/// configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormattingConfig {
    /// Size assumed when no font size attribution is present.
    pub default_font_size: f32,
    pub min_font_size: f32,
    pub max_font_size: f32,
    /// Points added or removed by relative font size adjustment.
    pub font_size_step: f32,
    /// Families that clearing formatting leaves in place.
    pub preserved_families: BTreeSet<AttributionFamily>,
}

impl FormattingConfig {
    /// The size bounds as `(min, max)`. Swapped bounds are put back in
    /// order and a non-finite bound falls back to its default.
    pub fn font_size_bounds(&self) -> (f32, f32) {
        let defaults = Self::default();
        let min = finite_or(self.min_font_size, defaults.min_font_size);
        let max = finite_or(self.max_font_size, defaults.max_font_size);
        (min.min(max), min.max(max))
    }

    pub fn clamp_font_size(&self, points: f32) -> f32 {
        let (min, max) = self.font_size_bounds();
        points.clamp(min, max)
    }
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            default_font_size: 16.0,
            min_font_size: 6.0,
            max_font_size: 200.0,
            font_size_step: 2.0,
            preserved_families: BTreeSet::from([AttributionFamily::Entity]),
        }
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::FormattingConfig;
    use crate::AttributionFamily;

    #[test]
    fn defaults_preserve_entities() {
        let config = FormattingConfig::default();
        assert!(config.preserved_families.contains(&AttributionFamily::Entity));
        assert_eq!(config.clamp_font_size(4.0), 6.0);
        assert_eq!(config.clamp_font_size(202.0), 200.0);
    }

    #[test]
    fn bad_bounds_never_panic() {
        let inverted = FormattingConfig {
            min_font_size: 300.0,
            ..FormattingConfig::default()
        };
        assert_eq!(inverted.font_size_bounds(), (200.0, 300.0));
        assert_eq!(inverted.clamp_font_size(12.0), 200.0);

        let nan = FormattingConfig {
            max_font_size: f32::NAN,
            min_font_size: f32::INFINITY,
            ..FormattingConfig::default()
        };
        assert_eq!(nan.font_size_bounds(), (6.0, 200.0));
        assert_eq!(nan.clamp_font_size(500.0), 200.0);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let json = indoc! {r#"
            {
                "defaultFontSize": 12.0,
                "preservedFamilies": ["entity", "highlightColor"]
            }
        "#};
        let config: FormattingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_font_size, 12.0);
        assert_eq!(config.font_size_step, 2.0);
        assert!(config
            .preserved_families
            .contains(&AttributionFamily::HighlightColor));
    }
}
