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

//! Boundary to the external entity recognizer.
//!
//! Recognition runs elsewhere (typically debounced, off the editing
//! path). Its output is merged into a paragraph in one call that
//! replaces every entity attribution and leaves all other formatting and
//! the text alone, so it is safe to re-run after every pass.

use tracing::debug;

use crate::{AttributedText, Attribution, AttributionFamily, BlockId, Document, EntityRef};

/// A named span reported by a recognizer. Offsets are inclusive
/// codepoint positions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entity {
    pub name: String,
    pub entity_type: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub recognized: bool,
}

impl Entity {
    pub fn attribution(&self) -> Attribution {
        Attribution::Entity(EntityRef {
            name: self.name.clone(),
            entity_type: self.entity_type.clone(),
            recognized: self.recognized,
            start_offset: self.start_offset,
            end_offset: self.end_offset,
        })
    }
}

/// Finds entities in plain text.
pub trait EntityRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

impl<F> EntityRecognizer for F
where
    F: Fn(&str) -> Vec<Entity>,
{
    fn recognize(&self, text: &str) -> Vec<Entity> {
        self(text)
    }
}

/// Replace every entity attribution in `text` with `entities`. Spans
/// that do not fit the text are skipped. Returns how many were applied.
pub fn apply_entities(text: &mut AttributedText, entities: &[Entity]) -> usize {
    text.remove_family(AttributionFamily::Entity);
    let mut applied = 0;
    for entity in entities {
        let range = entity.start_offset..=entity.end_offset;
        match text.add_attribution(entity.attribution(), range) {
            Ok(()) => applied += 1,
            Err(e) => debug!(name = %entity.name, error = %e, "skipping entity span"),
        }
    }
    applied
}

impl Document {
    /// Merge recognizer output into the paragraph `id`. Returns `false`
    /// without changing anything when no such paragraph exists.
    pub fn apply_entities(&mut self, id: &BlockId, entities: &[Entity]) -> bool {
        match self.paragraph_mut(id) {
            Some(paragraph) => {
                apply_entities(&mut paragraph.text, entities);
                true
            }
            None => {
                debug!(block = %id, "entity result for missing paragraph ignored");
                false
            }
        }
    }

    /// Run `recognizer` over every paragraph and merge the results.
    pub fn recognize_entities<R>(&mut self, recognizer: &R)
    where
        R: EntityRecognizer + ?Sized,
    {
        for block in self.blocks_mut() {
            if let Some(paragraph) = block.as_paragraph_mut() {
                let found = recognizer.recognize(paragraph.text.text());
                apply_entities(&mut paragraph.text, &found);
            }
        }
    }
}
