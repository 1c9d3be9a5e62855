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

use tracing::{debug, trace};

use super::{Composer, FormattingState};
use crate::{Attribution, Selection};

impl Composer {
    /// Replace the selection with `new_text` and put the cursor after it.
    ///
    /// The inserted codepoints pick up the spans they extend, then the
    /// pending styles are applied to them (or removed, for styles staged
    /// off). Selections spanning several blocks are left alone.
    pub fn replace_text(&mut self, new_text: &str) -> FormattingState {
        let Some(resolved) = self.resolve("replace_text") else {
            return FormattingState::default();
        };
        if !resolved.is_single_block() {
            debug!("replace_text across blocks ignored");
            return self.compute_formatting_state(&resolved);
        }

        let (index, start) = resolved.start;
        let end = resolved.end.1;
        let count = new_text.chars().count();
        let pending = std::mem::take(&mut self.pending_styles);
        trace!(index, start, end, count, ?pending, "replace text");

        let applied = self.transact(&resolved, |paragraph, _| {
            let text = &mut paragraph.text;
            if start < end {
                text.delete_range(start..=end - 1)?;
            }
            text.insert_text(start, new_text)?;
            if count == 0 {
                return Ok(());
            }
            let inserted = start..=start + count - 1;
            for (&style, &on) in &pending {
                let attribution = Attribution::from(style);
                if on {
                    text.add_attribution(attribution, inserted.clone())?;
                } else {
                    text.remove_attribution(&attribution, inserted.clone())?;
                }
            }
            Ok(())
        });

        if applied && resolved.slices.iter().any(|s| s.index == index) {
            let id = self.document.blocks()[index].id().clone();
            self.selection = Selection::caret(id, start + count);
        }
        self.formatting_state()
    }
}
