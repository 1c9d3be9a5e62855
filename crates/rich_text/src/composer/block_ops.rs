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

//! Block-level operations: headings, lists, indent/unindent, alignment,
//! quotes.
//!
//! Each applies to every paragraph the selection touches, including the
//! paragraph holding a collapsed cursor. Horizontal rules are skipped.

use super::{Composer, FormattingState};
use crate::{Alignment, HeadingLevel, ListType};

impl Composer {
    /// Make the touched paragraphs headings of `level`, or plain
    /// paragraphs for `None`. List formatting is dropped either way;
    /// alignment and quoting are kept.
    pub fn set_heading(&mut self, level: Option<HeadingLevel>) -> FormattingState {
        self.update_metadata("set_heading", |m| m.with_heading_level(level))
    }

    /// Toggle `list_type` on each touched paragraph independently: a
    /// paragraph already of that list type becomes a plain paragraph,
    /// any other becomes a top-level item of that type.
    pub fn toggle_list(&mut self, list_type: ListType) -> FormattingState {
        self.update_metadata("toggle_list", |m| {
            if m.list_type == Some(list_type) {
                m.without_list()
            } else {
                m.with_list(list_type, 0)
            }
        })
    }

    /// Toggle an ordered list.
    pub fn ordered_list(&mut self) -> FormattingState {
        self.toggle_list(ListType::Ordered)
    }

    /// Toggle an unordered list.
    pub fn unordered_list(&mut self) -> FormattingState {
        self.toggle_list(ListType::Unordered)
    }

    /// Shift the indent of touched list items by `delta`, stopping at 0.
    /// Paragraphs that are not list items are untouched.
    pub fn adjust_list_indent(&mut self, delta: i32) -> FormattingState {
        self.update_metadata("adjust_list_indent", |m| {
            m.with_list_indent_adjusted(delta)
        })
    }

    /// Nest list items one level deeper.
    pub fn indent(&mut self) -> FormattingState {
        self.adjust_list_indent(1)
    }

    /// Un-nest list items by one level.
    pub fn unindent(&mut self) -> FormattingState {
        self.adjust_list_indent(-1)
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> FormattingState {
        self.update_metadata("set_alignment", |m| m.with_alignment(Some(alignment)))
    }

    /// Toggle the block quote flag on each touched paragraph.
    pub fn quote(&mut self) -> FormattingState {
        self.update_metadata("quote", |m| m.with_block_quote(!m.is_block_quote))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Alignment, Block, BlockId, BlockMetadata, Composer, Document,
        HeadingLevel, ListType, Paragraph, Position, Selection,
    };

    fn model(ids: &[&str]) -> Composer {
        let mut blocks: Vec<Block> = ids
            .iter()
            .map(|id| Paragraph::new(BlockId::from(*id), format!("text {id}")).into())
            .collect();
        blocks.push(Block::HorizontalRule {
            id: BlockId::from("hr"),
        });
        Composer::from_document(Document::from_blocks(blocks).unwrap())
    }

    fn meta(model: &Composer, id: &str) -> BlockMetadata {
        model.document().paragraph(&BlockId::from(id)).unwrap().metadata
    }

    fn select_across(model: &mut Composer, from: &str, to: &str) {
        model.select(Selection::new(
            Position::new(BlockId::from(from), 1),
            Position::new(BlockId::from(to), 2),
        ));
    }

    // ===================================================================
    // Headings
    // ===================================================================

    #[test]
    fn heading_replaces_list_and_keeps_alignment() {
        let mut model = model(&["a"]);
        model.set_alignment(Alignment::Center);
        model.ordered_list();
        model.indent();
        let state = model.set_heading(Some(HeadingLevel::H2));
        assert_eq!(state.block.heading_level, Some(HeadingLevel::H2));
        assert_eq!(state.block.list_type, None);
        assert_eq!(state.block.list_indent, None);
        assert_eq!(state.block.alignment, Some(Alignment::Center));
    }

    #[test]
    fn heading_none_returns_to_paragraph() {
        let mut model = model(&["a"]);
        model.set_heading(Some(HeadingLevel::H1));
        model.set_heading(None);
        assert!(!meta(&model, "a").has_formatting());
    }

    // ===================================================================
    // Lists
    // ===================================================================

    #[test]
    fn list_toggle_on_and_off() {
        let mut model = model(&["a"]);
        model.unordered_list();
        assert_eq!(meta(&model, "a").list_type, Some(ListType::Unordered));
        assert_eq!(meta(&model, "a").list_indent, Some(0));
        model.unordered_list();
        assert_eq!(meta(&model, "a"), BlockMetadata::default());
    }

    #[test]
    fn switching_list_type_resets_indent() {
        let mut model = model(&["a"]);
        model.unordered_list();
        model.indent();
        model.ordered_list();
        assert_eq!(meta(&model, "a").list_type, Some(ListType::Ordered));
        assert_eq!(meta(&model, "a").list_indent, Some(0));
    }

    #[test]
    fn list_replaces_heading() {
        let mut model = model(&["a"]);
        model.set_heading(Some(HeadingLevel::H3));
        model.ordered_list();
        assert_eq!(meta(&model, "a").heading_level, None);
    }

    #[test]
    fn multi_paragraph_selection_lists_every_paragraph() {
        let mut model = model(&["a", "b", "c"]);
        select_across(&mut model, "a", "c");
        model.ordered_list();
        for id in ["a", "b", "c"] {
            assert_eq!(meta(&model, id).list_type, Some(ListType::Ordered), "{id}");
        }
    }

    #[test]
    fn list_toggle_is_per_paragraph() {
        let mut model = model(&["a", "b"]);
        model.ordered_list();
        select_across(&mut model, "a", "b");
        model.ordered_list();
        assert_eq!(meta(&model, "a").list_type, None);
        assert_eq!(meta(&model, "b").list_type, Some(ListType::Ordered));
    }

    // ===================================================================
    // Indent
    // ===================================================================

    #[test]
    fn unindent_at_zero_stays_at_zero() {
        let mut model = model(&["a"]);
        model.ordered_list();
        model.unindent();
        assert_eq!(meta(&model, "a").list_indent, Some(0));
    }

    #[test]
    fn indent_is_unbounded_and_keeps_list_type() {
        let mut model = model(&["a"]);
        model.unordered_list();
        for _ in 0..12 {
            model.indent();
        }
        assert_eq!(meta(&model, "a").list_indent, Some(12));
        assert_eq!(meta(&model, "a").list_type, Some(ListType::Unordered));
    }

    #[test]
    fn indent_outside_a_list_does_nothing() {
        let mut model = model(&["a"]);
        model.indent();
        assert!(!meta(&model, "a").has_formatting());
    }

    // ===================================================================
    // Alignment and quote
    // ===================================================================

    #[test]
    fn alignment_applies_to_every_touched_paragraph() {
        let mut model = model(&["a", "b"]);
        model.set_heading(Some(HeadingLevel::H1));
        select_across(&mut model, "a", "b");
        model.set_alignment(Alignment::Right);
        assert_eq!(meta(&model, "a").alignment, Some(Alignment::Right));
        assert_eq!(meta(&model, "a").heading_level, Some(HeadingLevel::H1));
        assert_eq!(meta(&model, "b").alignment, Some(Alignment::Right));
    }

    #[test]
    fn quote_toggles() {
        let mut model = model(&["a"]);
        assert!(model.quote().block.is_block_quote);
        assert!(!model.quote().block.is_block_quote);
    }

    #[test]
    fn selection_through_a_rule_skips_it() {
        let mut model = model(&["a"]);
        model.select(Selection::new(
            Position::new(BlockId::from("a"), 0),
            Position::new(BlockId::from("hr"), 0),
        ));
        model.quote();
        assert!(meta(&model, "a").is_block_quote);
        assert!(matches!(
            model.document().block(&BlockId::from("hr")),
            Some(Block::HorizontalRule { .. })
        ));
    }
}
