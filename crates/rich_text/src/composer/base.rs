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

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::selection::{BlockSlice, ResolvedSelection};
use crate::{
    Attribution, Block, BlockMetadata, Document, Entity, EntityRecognizer,
    Error, FontSize, FormattingConfig, InlineStyle, Paragraph, Rgba,
    Selection,
};

/// A rich text editing session.
///
/// Pending styles are toggles made while the cursor is collapsed: they
/// apply to the next inserted text and are forgotten as soon as the
/// selection moves.
#[derive(Clone, Debug)]
pub struct Composer {
    pub(crate) document: Document,
    pub(crate) selection: Selection,
    pub(crate) pending_styles: BTreeMap<InlineStyle, bool>,
    pub(crate) config: FormattingConfig,
}

/// What the toolbar should show for the current selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormattingState {
    /// Styles present over the whole selection, or at the cursor after
    /// pending toggles.
    pub inline_styles: BTreeSet<InlineStyle>,
    pub text_color: Option<Rgba>,
    pub highlight_color: Option<Rgba>,
    pub font_size: Option<FontSize>,
    /// Metadata of the first paragraph in the selection.
    pub block: BlockMetadata,
}

impl FormattingState {
    pub fn is_active(&self, style: InlineStyle) -> bool {
        self.inline_styles.contains(&style)
    }
}

impl Composer {
    /// An empty document with the cursor in its only paragraph.
    pub fn new() -> Self {
        Self::from_document(Document::new())
    }

    /// Edit `document`, placing the cursor at the start of its first
    /// block. An empty document gets one empty paragraph.
    pub fn from_document(document: Document) -> Self {
        Self::with_config(document, FormattingConfig::default())
    }

    pub fn with_config(mut document: Document, config: FormattingConfig) -> Self {
        if document.is_empty() {
            document = Document::new();
        }
        let first = document.blocks()[0].id().clone();
        Self {
            document,
            selection: Selection::caret(first, 0),
            pending_styles: BTreeMap::new(),
            config,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn config(&self) -> &FormattingConfig {
        &self.config
    }

    /// Styles staged for the next insertion (`true` = apply, `false` =
    /// suppress).
    pub fn pending_styles(&self) -> &BTreeMap<InlineStyle, bool> {
        &self.pending_styles
    }

    /// Current toolbar state.
    pub fn formatting_state(&self) -> FormattingState {
        self.resolve("formatting_state")
            .map(|resolved| self.compute_formatting_state(&resolved))
            .unwrap_or_default()
    }

    /// Merge entity recognizer output into one paragraph. See
    /// [`Document::apply_entities`].
    pub fn apply_entities(
        &mut self,
        id: &crate::BlockId,
        entities: &[Entity],
    ) -> bool {
        self.document.apply_entities(id, entities)
    }

    /// Run `recognizer` over every paragraph of the document.
    pub fn recognize_entities<R>(&mut self, recognizer: &R)
    where
        R: EntityRecognizer + ?Sized,
    {
        self.document.recognize_entities(recognizer);
    }

    // ────────────────────────────────────────────────────────────────────
    // Internal helpers
    // ────────────────────────────────────────────────────────────────────

    pub(crate) fn resolve(&self, command: &str) -> Option<ResolvedSelection> {
        let resolved = self.selection.resolve(&self.document);
        if resolved.is_none() {
            debug!(command, selection = ?self.selection, "selection does not resolve");
        }
        resolved
    }

    pub(crate) fn paragraph_at(&self, index: usize) -> Option<&Paragraph> {
        self.document.blocks().get(index).and_then(Block::as_paragraph)
    }

    /// Apply `edit` to copies of every touched paragraph, then write the
    /// copies back. Nothing changes if any edit fails.
    pub(crate) fn transact<F>(
        &mut self,
        resolved: &ResolvedSelection,
        mut edit: F,
    ) -> bool
    where
        F: FnMut(&mut Paragraph, &BlockSlice) -> Result<(), Error>,
    {
        let mut staged = Vec::with_capacity(resolved.slices.len());
        for slice in &resolved.slices {
            let Some(paragraph) = self.paragraph_at(slice.index) else {
                continue;
            };
            let mut copy = paragraph.clone();
            if let Err(e) = edit(&mut copy, slice) {
                warn!(block = %copy.id, error = %e, "edit rejected, document unchanged");
                return false;
            }
            staged.push((slice.index, copy));
        }
        let blocks = self.document.blocks_mut();
        for (index, paragraph) in staged {
            blocks[index] = Block::Paragraph(paragraph);
        }
        true
    }

    /// Apply `update` to the metadata of every touched paragraph.
    pub(crate) fn update_metadata<F>(&mut self, command: &str, update: F) -> FormattingState
    where
        F: Fn(BlockMetadata) -> BlockMetadata,
    {
        let Some(resolved) = self.resolve(command) else {
            return FormattingState::default();
        };
        tracing::trace!(command, blocks = resolved.slices.len());
        self.transact(&resolved, |paragraph, _| {
            paragraph.metadata = update(paragraph.metadata);
            Ok(())
        });
        self.compute_formatting_state(&resolved)
    }

    /// The codepoint whose attributions describe the selection: the first
    /// selected one, or the one before a collapsed cursor.
    pub(crate) fn probe(&self, resolved: &ResolvedSelection) -> Option<(usize, usize)> {
        if resolved.is_collapsed() {
            let (index, offset) = resolved.start;
            return offset.checked_sub(1).map(|pos| (index, pos));
        }
        resolved.covered().next().map(|(index, range)| (index, *range.start()))
    }

    /// Whether `style` applies at the codepoint before a collapsed cursor.
    pub(crate) fn is_style_active_at_caret(
        &self,
        resolved: &ResolvedSelection,
        style: InlineStyle,
    ) -> bool {
        self.attributions_at_probe(resolved)
            .contains(&Attribution::from(style))
    }

    fn attributions_at_probe(&self, resolved: &ResolvedSelection) -> Vec<Attribution> {
        self.probe(resolved)
            .and_then(|(index, pos)| {
                let paragraph = self.paragraph_at(index)?;
                paragraph.text.all_attributions_at(pos).ok()
            })
            .map(|set| set.into_iter().cloned().collect())
            .unwrap_or_default()
    }

    pub(crate) fn compute_formatting_state(
        &self,
        resolved: &ResolvedSelection,
    ) -> FormattingState {
        let at_probe = self.attributions_at_probe(resolved);
        let mut state = FormattingState {
            block: resolved
                .slices
                .first()
                .and_then(|s| self.paragraph_at(s.index))
                .map(|p| p.metadata)
                .unwrap_or_default(),
            ..FormattingState::default()
        };

        for attribution in &at_probe {
            match attribution {
                Attribution::TextColor(c) => {
                    state.text_color.get_or_insert(*c);
                }
                Attribution::HighlightColor(c) => {
                    state.highlight_color.get_or_insert(*c);
                }
                Attribution::FontSize(s) => {
                    state.font_size.get_or_insert(*s);
                }
                _ => {}
            }
        }

        for style in [
            InlineStyle::Bold,
            InlineStyle::Italic,
            InlineStyle::Underline,
            InlineStyle::Strikethrough,
        ] {
            let active = if resolved.is_collapsed() {
                self.pending_styles
                    .get(&style)
                    .copied()
                    .unwrap_or_else(|| at_probe.contains(&Attribution::from(style)))
            } else {
                self.is_style_present_throughout(resolved, style)
            };
            if active {
                state.inline_styles.insert(style);
            }
        }
        state
    }

    fn is_style_present_throughout(
        &self,
        resolved: &ResolvedSelection,
        style: InlineStyle,
    ) -> bool {
        let attribution = Attribution::from(style);
        let mut covered = resolved.covered().peekable();
        covered.peek().is_some()
            && covered.all(|(index, range)| {
                self.paragraph_at(index).is_some_and(|p| {
                    p.text
                        .has_attribution_throughout(&attribution, range)
                        .unwrap_or(false)
                })
            })
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}
