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

//! Selection management.

use super::{Composer, FormattingState};
use crate::{BlockId, Selection};

impl Composer {
    /// Move the selection. Pending styles are dropped.
    pub fn select(&mut self, selection: Selection) -> FormattingState {
        self.selection = selection;
        self.pending_styles.clear();
        self.formatting_state()
    }

    /// Select caret offsets `start..end` of one block.
    pub fn select_in(
        &mut self,
        block_id: BlockId,
        start: usize,
        end: usize,
    ) -> FormattingState {
        self.select(Selection::within(block_id, start, end))
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}
