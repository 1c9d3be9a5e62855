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

//! A Unicode text buffer with overlapping attribution spans.
//!
//! Positions are codepoint offsets and ranges are inclusive
//! (`start..=end`). Spans of one exact attribution are stored as a
//! canonical `Runs` list, so identical attributions that touch or
//! overlap are always merged. Differing values of a parameterized family
//! may overlap freely here; keeping one value per position is the
//! composer's job.

mod attribution;
mod runs;

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

pub use attribution::{
    Attribution, AttributionFamily, EntityRef, FontSize, InlineStyle,
    ParameterizedStyle,
};
use runs::{Run, Runs};

use crate::Error;

/// One maximal contiguous span of a single attribution.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttributionSpan {
    pub start: usize,
    pub end: usize,
    pub attribution: Attribution,
}

impl AttributionSpan {
    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributedText {
    text: String,
    len: usize,
    spans: BTreeMap<Attribution, Runs>,
}

impl AttributedText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            len,
            spans: BTreeMap::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in codepoints.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether any attribution is applied anywhere.
    pub fn has_attributions(&self) -> bool {
        !self.spans.is_empty()
    }

    /// Check that `range` addresses existing codepoints.
    pub(crate) fn validate_range(
        &self,
        range: &RangeInclusive<usize>,
    ) -> Result<Run, Error> {
        let (start, end) = (*range.start(), *range.end());
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        if end >= self.len {
            return Err(Error::OutOfRange {
                position: end,
                len: self.len,
            });
        }
        Ok(Run::new(start, end))
    }

    // ────────────────────────────────────────────────────────────────────
    // Mutation
    // ────────────────────────────────────────────────────────────────────

    /// Apply `attribution` to every position in `range`.
    pub fn add_attribution(
        &mut self,
        attribution: Attribution,
        range: RangeInclusive<usize>,
    ) -> Result<(), Error> {
        let run = self.validate_range(&range)?;
        self.spans.entry(attribution).or_default().insert(run);
        self.assert_invariants();
        Ok(())
    }

    /// Remove `attribution` from every position in `range`, splitting
    /// spans that extend past it. Returns whether anything changed.
    pub fn remove_attribution(
        &mut self,
        attribution: &Attribution,
        range: RangeInclusive<usize>,
    ) -> Result<bool, Error> {
        let run = self.validate_range(&range)?;
        let Some(runs) = self.spans.get_mut(attribution) else {
            return Ok(false);
        };
        let removed = runs.remove(run);
        if runs.is_empty() {
            self.spans.remove(attribution);
        }
        self.assert_invariants();
        Ok(removed)
    }

    /// Remove every attribution matching `predicate` from `range`.
    /// Returns how many distinct attributions were touched.
    pub fn remove_attributions_where<F>(
        &mut self,
        range: RangeInclusive<usize>,
        mut predicate: F,
    ) -> Result<usize, Error>
    where
        F: FnMut(&Attribution) -> bool,
    {
        let run = self.validate_range(&range)?;
        let mut touched = 0;
        self.spans.retain(|attribution, runs| {
            if predicate(attribution) && runs.remove(run) {
                touched += 1;
            }
            !runs.is_empty()
        });
        self.assert_invariants();
        Ok(touched)
    }

    /// Remove every span of `family` over the whole text. Returns
    /// whether anything was removed.
    pub fn remove_family(&mut self, family: AttributionFamily) -> bool {
        let before = self.spans.len();
        self.spans.retain(|attribution, _| !attribution.is_family(family));
        before != self.spans.len()
    }

    /// Drop every span. The text is untouched.
    pub fn clear_attributions(&mut self) {
        self.spans.clear();
    }

    /// Insert `text` before codepoint `offset` (`offset == len` appends).
    ///
    /// Spans after the insertion point move along. Spans containing the
    /// codepoint before `offset` grow over the new text, except entity
    /// spans, which only grow when the insertion is strictly inside them.
    pub fn insert_text(&mut self, offset: usize, text: &str) -> Result<(), Error> {
        if offset > self.len {
            return Err(Error::OutOfRange {
                position: offset,
                len: self.len,
            });
        }
        let count = text.chars().count();
        if count == 0 {
            return Ok(());
        }
        let byte = self.byte_index(offset);
        self.text.insert_str(byte, text);
        self.len += count;
        for (attribution, runs) in &mut self.spans {
            runs.shift_for_insert(
                offset,
                count,
                attribution.family().expands_at_end(),
            );
        }
        self.assert_invariants();
        Ok(())
    }

    /// Delete the codepoints in `range`, shrinking or dropping the spans
    /// over it.
    pub fn delete_range(&mut self, range: RangeInclusive<usize>) -> Result<(), Error> {
        let run = self.validate_range(&range)?;
        let from = self.byte_index(run.start);
        let to = self.byte_index(run.end + 1);
        self.text.replace_range(from..to, "");
        self.len -= run.len();
        self.spans.retain(|_, runs| {
            runs.shift_for_delete(run);
            !runs.is_empty()
        });
        self.assert_invariants();
        Ok(())
    }

    // ────────────────────────────────────────────────────────────────────
    // Queries
    // ────────────────────────────────────────────────────────────────────

    /// Every attribution covering `position`.
    pub fn all_attributions_at(
        &self,
        position: usize,
    ) -> Result<BTreeSet<&Attribution>, Error> {
        if position >= self.len {
            return Err(Error::OutOfRange {
                position,
                len: self.len,
            });
        }
        Ok(self
            .spans
            .iter()
            .filter(|(_, runs)| runs.contains(position))
            .map(|(attribution, _)| attribution)
            .collect())
    }

    /// Every span matching `filter` that shares a position with `range`.
    /// Reported spans keep their own bounds, which may extend past
    /// `range`.
    pub fn attribution_spans_in_range<F>(
        &self,
        filter: F,
        range: RangeInclusive<usize>,
    ) -> Result<Vec<AttributionSpan>, Error>
    where
        F: Fn(&Attribution) -> bool,
    {
        let run = self.validate_range(&range)?;
        let mut found: Vec<AttributionSpan> = self
            .spans
            .iter()
            .filter(|(attribution, _)| filter(attribution))
            .flat_map(|(attribution, runs)| {
                runs.intersecting(run).iter().map(move |r| AttributionSpan {
                    start: r.start,
                    end: r.end,
                    attribution: attribution.clone(),
                })
            })
            .collect();
        found.sort();
        Ok(found)
    }

    /// Whether `attribution` covers every position of `range`.
    pub fn has_attribution_throughout(
        &self,
        attribution: &Attribution,
        range: RangeInclusive<usize>,
    ) -> Result<bool, Error> {
        let run = self.validate_range(&range)?;
        Ok(self
            .spans
            .get(attribution)
            .is_some_and(|runs| runs.covers(run)))
    }

    /// Every span, ordered by start, end, then attribution.
    pub fn spans(&self) -> Vec<AttributionSpan> {
        let mut all: Vec<AttributionSpan> = self
            .spans
            .iter()
            .flat_map(|(attribution, runs)| {
                runs.iter().map(move |r| AttributionSpan {
                    start: r.start,
                    end: r.end,
                    attribution: attribution.clone(),
                })
            })
            .collect();
        all.sort();
        all
    }

    fn byte_index(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Panic unless every run list is canonical and in bounds.
    pub fn explicitly_assert_invariants(&self) {
        assert_eq!(self.len, self.text.chars().count(), "stale length");
        for (attribution, runs) in &self.spans {
            assert!(!runs.is_empty(), "empty run list for {attribution:?}");
            runs.assert_canonical(self.len);
        }
    }

    fn assert_invariants(&self) {
        #[cfg(feature = "assert-invariants")]
        self.explicitly_assert_invariants();
    }
}
