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

//! Formatting commands over a [`Document`] and a [`Selection`].
//!
//! [`Composer`] bundles the document with the session state commands
//! need: the current selection, styles staged at a collapsed cursor,
//! and configuration. Every command resolves the selection first; a
//! selection naming a missing block turns the command into a no-op that
//! reports [`FormattingState::default`]. Paragraph edits are staged on
//! copies and written back only once every touched paragraph succeeded.

mod base;
mod block_ops;
mod clear_formatting;
mod inline_formatting;
mod parameterized;
mod selection;
mod text_ops;

pub use base::{Composer, FormattingState};
