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

//! Sorted, canonical interval lists.
//!
//! A [`Runs`] holds the inclusive codepoint ranges covered by one exact
//! attribution. Runs are kept sorted by start, and no two runs overlap
//! or touch: `runs[i].end + 1 < runs[i + 1].start`. Insertion merges
//! with neighbours, removal splits.

use std::ops::RangeInclusive;

/// An inclusive codepoint range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Run {
    pub start: usize,
    pub end: usize,
}

impl Run {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(self) -> usize {
        self.end - self.start + 1
    }
}

impl From<RangeInclusive<usize>> for Run {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Runs(Vec<Run>);

impl Runs {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Run> + '_ {
        self.0.iter().copied()
    }

    /// Index of the first run that ends at or after `pos`.
    fn first_ending_at_or_after(&self, pos: usize) -> usize {
        self.0.partition_point(|r| r.end < pos)
    }

    /// Add `run`, merging with any run it overlaps or touches.
    pub fn insert(&mut self, run: Run) {
        let lo = self.0.partition_point(|r| r.end + 1 < run.start);
        let hi = self.0.partition_point(|r| r.start <= run.end + 1);
        let merged = if lo < hi {
            Run::new(
                run.start.min(self.0[lo].start),
                run.end.max(self.0[hi - 1].end),
            )
        } else {
            run
        };
        self.0.splice(lo..hi, [merged]);
    }

    /// Remove `run` from the covered set, splitting partially covered
    /// runs. Returns whether anything was removed.
    pub fn remove(&mut self, run: Run) -> bool {
        let lo = self.first_ending_at_or_after(run.start);
        let hi = self.0.partition_point(|r| r.start <= run.end);
        if lo >= hi {
            return false;
        }
        let first = self.0[lo];
        let last = self.0[hi - 1];
        let mut remaining = Vec::with_capacity(2);
        if first.start < run.start {
            remaining.push(Run::new(first.start, run.start - 1));
        }
        if last.end > run.end {
            remaining.push(Run::new(run.end + 1, last.end));
        }
        self.0.splice(lo..hi, remaining);
        true
    }

    /// Whether every position of `run` is covered.
    pub fn covers(&self, run: Run) -> bool {
        self.0
            .get(self.first_ending_at_or_after(run.start))
            .is_some_and(|r| r.start <= run.start && r.end >= run.end)
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.covers(Run::new(pos, pos))
    }

    /// The runs that share at least one position with `run`.
    pub fn intersecting(&self, run: Run) -> &[Run] {
        let lo = self.first_ending_at_or_after(run.start);
        let hi = self.0.partition_point(|r| r.start <= run.end);
        if lo >= hi {
            &[]
        } else {
            &self.0[lo..hi]
        }
    }

    /// Make room for `count` codepoints inserted before position `at`.
    ///
    /// Runs strictly containing the insertion point grow. A run ending
    /// right before `at` grows only when `expand_at_end` is set.
    pub fn shift_for_insert(&mut self, at: usize, count: usize, expand_at_end: bool) {
        for r in &mut self.0 {
            if at <= r.start {
                r.start += count;
                r.end += count;
            } else if at <= r.end || (expand_at_end && at == r.end + 1) {
                r.end += count;
            }
        }
    }

    /// Close the gap left by deleting the positions of `deleted`.
    pub fn shift_for_delete(&mut self, deleted: Run) {
        let removed = deleted.len();
        let mut shifted = Vec::with_capacity(self.0.len());
        for r in self.0.drain(..) {
            if r.end < deleted.start {
                shifted.push(r);
            } else if r.start > deleted.end {
                shifted.push(Run::new(r.start - removed, r.end - removed));
            } else {
                let overlap =
                    r.end.min(deleted.end) - r.start.max(deleted.start) + 1;
                let kept = r.len() - overlap;
                if kept > 0 {
                    let start = r.start.min(deleted.start);
                    shifted.push(Run::new(start, start + kept - 1));
                }
            }
        }
        self.0 = Vec::with_capacity(shifted.len());
        for r in shifted {
            self.insert(r);
        }
    }

    /// Panics unless the runs are sorted, disjoint, non-adjacent and
    /// within `len`.
    pub fn assert_canonical(&self, len: usize) {
        for r in &self.0 {
            assert!(r.start <= r.end, "inverted run {r:?}");
            assert!(r.end < len, "run {r:?} beyond text length {len}");
        }
        for pair in self.0.windows(2) {
            assert!(
                pair[0].end + 1 < pair[1].start,
                "runs {:?} and {:?} overlap or touch",
                pair[0],
                pair[1]
            );
        }
    }
}
