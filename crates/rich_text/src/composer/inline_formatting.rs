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

//! Inline formatting: bold, italic, underline, strikethrough.

use tracing::trace;

use super::{Composer, FormattingState};
use crate::{Attribution, InlineStyle};

impl Composer {
    /// Toggle a boolean style on the current selection.
    ///
    /// - **Collapsed cursor**: stages the style for the next inserted
    ///   text. Toggling back to the style already in effect at the
    ///   cursor unstages it.
    /// - **Range selection**: in each touched paragraph, removes the
    ///   style if it covers that paragraph's whole selected part,
    ///   otherwise applies it there.
    pub fn toggle_inline_style(&mut self, style: InlineStyle) -> FormattingState {
        let Some(resolved) = self.resolve("toggle_inline_style") else {
            return FormattingState::default();
        };

        if resolved.is_collapsed() {
            let in_effect = self.is_style_active_at_caret(&resolved, style);
            let current = self.pending_styles.get(&style).copied().unwrap_or(in_effect);
            if !current == in_effect {
                self.pending_styles.remove(&style);
            } else {
                self.pending_styles.insert(style, !current);
            }
            trace!(?style, pending = ?self.pending_styles, "staged pending style");
            return self.compute_formatting_state(&resolved);
        }

        let attribution = Attribution::from(style);
        trace!(?style, blocks = resolved.slices.len(), "toggle inline style");
        self.transact(&resolved, |paragraph, slice| {
            let Some(range) = slice.range.clone() else {
                return Ok(());
            };
            let text = &mut paragraph.text;
            if text.has_attribution_throughout(&attribution, range.clone())? {
                text.remove_attribution(&attribution, range)?;
            } else {
                text.add_attribution(attribution.clone(), range)?;
            }
            Ok(())
        });
        self.compute_formatting_state(&resolved)
    }

    /// Toggle bold.
    pub fn bold(&mut self) -> FormattingState {
        self.toggle_inline_style(InlineStyle::Bold)
    }

    /// Toggle italic.
    pub fn italic(&mut self) -> FormattingState {
        self.toggle_inline_style(InlineStyle::Italic)
    }

    /// Toggle underline.
    pub fn underline(&mut self) -> FormattingState {
        self.toggle_inline_style(InlineStyle::Underline)
    }

    /// Toggle strikethrough.
    pub fn strike_through(&mut self) -> FormattingState {
        self.toggle_inline_style(InlineStyle::Strikethrough)
    }
}
