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

//! Value-carrying styles: text colour, highlight colour, font size.
//!
//! The store lets different values of one family overlap. These
//! commands keep at most one value per family at each position by
//! clearing the family over the range before applying the new value.

use tracing::{debug, trace};

use super::{Composer, FormattingState};
use crate::{Attribution, FontSize, ParameterizedStyle, Rgba};

impl Composer {
    /// Replace whatever value of `style`'s family covers the selection
    /// with `style`. A collapsed selection is left alone.
    pub fn set_parameterized_style(&mut self, style: ParameterizedStyle) -> FormattingState {
        let Some(resolved) = self.resolve("set_parameterized_style") else {
            return FormattingState::default();
        };
        if resolved.is_collapsed() {
            return self.compute_formatting_state(&resolved);
        }

        let family = style.family();
        let attribution = Attribution::from(style);
        trace!(?style, blocks = resolved.slices.len(), "set parameterized style");
        self.transact(&resolved, |paragraph, slice| {
            let Some(range) = slice.range.clone() else {
                return Ok(());
            };
            paragraph
                .text
                .remove_attributions_where(range.clone(), |a| a.is_family(family))?;
            paragraph.text.add_attribution(attribution.clone(), range)
        });
        self.compute_formatting_state(&resolved)
    }

    pub fn set_text_color(&mut self, color: Rgba) -> FormattingState {
        self.set_parameterized_style(ParameterizedStyle::TextColor(color))
    }

    pub fn set_highlight_color(&mut self, color: Rgba) -> FormattingState {
        self.set_parameterized_style(ParameterizedStyle::HighlightColor(color))
    }

    /// Apply `points`, clamped to the configured bounds. A non-finite
    /// size changes nothing.
    pub fn set_font_size(&mut self, points: f32) -> FormattingState {
        if !points.is_finite() {
            debug!(points, "non-finite font size ignored");
            return self.formatting_state();
        }
        let points = self.config.clamp_font_size(points);
        self.set_parameterized_style(ParameterizedStyle::FontSize(FontSize::new(points)))
    }

    /// Change the font size at the start of the selection by `delta`
    /// points, clamped to the configured bounds, and apply the result to
    /// the whole selection.
    pub fn adjust_font_size_relative(&mut self, delta: f32) -> FormattingState {
        if !delta.is_finite() {
            debug!(delta, "non-finite font size delta ignored");
            return self.formatting_state();
        }
        let Some(resolved) = self.resolve("adjust_font_size_relative") else {
            return FormattingState::default();
        };
        if resolved.is_collapsed() {
            return self.compute_formatting_state(&resolved);
        }
        let current = self
            .compute_formatting_state(&resolved)
            .font_size
            .unwrap_or_else(|| FontSize::new(self.config.default_font_size));
        let (min, max) = self.config.font_size_bounds();
        let adjusted = current.adjusted(delta, min, max);
        self.set_parameterized_style(ParameterizedStyle::FontSize(adjusted))
    }

    pub fn increase_font_size(&mut self) -> FormattingState {
        self.adjust_font_size_relative(self.config.font_size_step)
    }

    pub fn decrease_font_size(&mut self) -> FormattingState {
        self.adjust_font_size_relative(-self.config.font_size_step)
    }
}
