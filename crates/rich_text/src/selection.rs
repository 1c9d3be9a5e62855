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

//! Selections addressed by `(block id, codepoint offset)` pairs.
//!
//! Offsets are caret positions: offset `n` sits before codepoint `n`, so
//! a selection from 8 to 12 inside one block covers codepoints `8..=11`.

use std::ops::RangeInclusive;

use crate::{Block, BlockId, Document};

/// A caret position inside a block.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub block_id: BlockId,
    pub offset: usize,
}

impl Position {
    pub fn new(block_id: BlockId, offset: usize) -> Self {
        Self { block_id, offset }
    }
}

/// A cursor (collapsed) or a contiguous run across blocks. The anchor may
/// come after the focus; resolution orders them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selection {
    pub anchor: Position,
    pub focus: Position,
}

impl Selection {
    pub fn new(anchor: Position, focus: Position) -> Self {
        Self { anchor, focus }
    }

    pub fn caret(block_id: BlockId, offset: usize) -> Self {
        let at = Position::new(block_id, offset);
        Self::new(at.clone(), at)
    }

    /// A selection between two caret offsets of one block.
    pub fn within(block_id: BlockId, start: usize, end: usize) -> Self {
        Self::new(
            Position::new(block_id.clone(), start),
            Position::new(block_id, end),
        )
    }

    /// Order and clamp the endpoints against `document`. `None` when
    /// either endpoint names a block that does not exist.
    pub(crate) fn resolve(&self, document: &Document) -> Option<ResolvedSelection> {
        let anchor = resolve_position(document, &self.anchor)?;
        let focus = resolve_position(document, &self.focus)?;
        let (start, end) = if anchor <= focus {
            (anchor, focus)
        } else {
            (focus, anchor)
        };

        let slices = (start.0..=end.0)
            .filter_map(|index| {
                let paragraph = document.blocks()[index].as_paragraph()?;
                let len = paragraph.text.len();
                let from = if index == start.0 { start.1 } else { 0 };
                let to = if index == end.0 { end.1 } else { len };
                Some(BlockSlice {
                    index,
                    range: (from < to).then(|| from..=to - 1),
                })
            })
            .collect();

        Some(ResolvedSelection { start, end, slices })
    }
}

/// `(block index, clamped offset)`; horizontal rules only admit offset 0.
fn resolve_position(document: &Document, position: &Position) -> Option<(usize, usize)> {
    let index = document.index_of(&position.block_id)?;
    let len = match &document.blocks()[index] {
        Block::Paragraph(p) => p.text.len(),
        Block::HorizontalRule { .. } => 0,
    };
    Some((index, position.offset.min(len)))
}

/// The part of one paragraph a selection covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct BlockSlice {
    pub index: usize,
    /// Codepoints covered, or `None` when the selection only touches the
    /// paragraph without covering any of its text.
    pub range: Option<RangeInclusive<usize>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ResolvedSelection {
    pub start: (usize, usize),
    pub end: (usize, usize),
    /// Every paragraph touched, in document order.
    pub slices: Vec<BlockSlice>,
}

impl ResolvedSelection {
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn is_single_block(&self) -> bool {
        self.start.0 == self.end.0
    }

    pub fn covered(&self) -> impl Iterator<Item = (usize, RangeInclusive<usize>)> + '_ {
        self.slices
            .iter()
            .filter_map(|s| s.range.clone().map(|r| (s.index, r)))
    }
}
