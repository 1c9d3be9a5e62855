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

use crate::BlockId;

/// Errors reported by the attributed text store and the document.
///
/// Formatting commands and the deserializer never surface these; they
/// degrade to no-ops or defaults instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A position or range endpoint lies outside `[0, len)`.
    #[error("position {position} out of range for text of length {len}")]
    OutOfRange { position: usize, len: usize },

    /// A range whose start is after its end.
    #[error("invalid range {start}..={end}: start > end")]
    InvalidRange { start: usize, end: usize },

    /// A block with this id is already part of the document.
    #[error("duplicate block id `{0}`")]
    DuplicateBlockId(BlockId),
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::BlockId;

    #[test]
    fn out_of_range_message_names_position_and_length() {
        let msg = Error::OutOfRange { position: 7, len: 6 }.to_string();
        assert!(msg.contains("position 7"), "unexpected message: {msg}");
        assert!(msg.contains("length 6"), "unexpected message: {msg}");
    }

    #[test]
    fn invalid_range_message_shows_range() {
        let msg = Error::InvalidRange { start: 4, end: 3 }.to_string();
        assert_eq!(msg, "invalid range 4..=3: start > end");
    }

    #[test]
    fn duplicate_id_message_quotes_id() {
        let msg = Error::DuplicateBlockId(BlockId::from("p1")).to_string();
        assert_eq!(msg, "duplicate block id `p1`");
    }
}
