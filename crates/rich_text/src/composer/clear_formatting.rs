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

use tracing::trace;

use super::{Composer, FormattingState};
use crate::{AttributionFamily, BlockMetadata};

impl Composer {
    /// Remove inline formatting from the selection and reset the block
    /// formatting of every touched paragraph.
    ///
    /// Attributions in the configured preserved families (entities by
    /// default) survive. Text, ids and paragraph order never change.
    /// Pending styles are discarded.
    pub fn clear_formatting(&mut self) -> FormattingState {
        let preserved = self.config.preserved_families.clone();
        self.clear_formatting_preserving(&preserved)
    }

    /// [`Composer::clear_formatting`] with an explicit set of families to
    /// keep.
    pub fn clear_formatting_preserving(
        &mut self,
        preserved: &BTreeSet<AttributionFamily>,
    ) -> FormattingState {
        self.pending_styles.clear();
        let Some(resolved) = self.resolve("clear_formatting") else {
            return FormattingState::default();
        };
        trace!(blocks = resolved.slices.len(), ?preserved, "clear formatting");
        self.transact(&resolved, |paragraph, slice| {
            if let Some(range) = slice.range.clone() {
                paragraph
                    .text
                    .remove_attributions_where(range, |a| !preserved.contains(&a.family()))?;
            }
            paragraph.metadata = BlockMetadata::default();
            Ok(())
        });
        self.compute_formatting_state(&resolved)
    }
}
