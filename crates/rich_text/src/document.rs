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

//! The block sequence that makes up a document.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AttributedText, BlockMetadata, Error};

/// Opaque identifier of a block, unique within a [`Document`].
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A paragraph of attributed text with its block formatting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paragraph {
    pub id: BlockId,
    pub text: AttributedText,
    pub metadata: BlockMetadata,
}

impl Paragraph {
    pub fn new(id: BlockId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: AttributedText::new(text),
            metadata: BlockMetadata::default(),
        }
    }

    pub fn empty(id: BlockId) -> Self {
        Self::new(id, "")
    }

    pub fn with_metadata(self, metadata: BlockMetadata) -> Self {
        Self { metadata, ..self }
    }
}

/// A top-level unit of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Paragraph(Paragraph),
    HorizontalRule { id: BlockId },
}

impl Block {
    pub fn id(&self) -> &BlockId {
        match self {
            Self::Paragraph(p) => &p.id,
            Self::HorizontalRule { id } => id,
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Self::Paragraph(p) => Some(p),
            Self::HorizontalRule { .. } => None,
        }
    }

    pub fn as_paragraph_mut(&mut self) -> Option<&mut Paragraph> {
        match self {
            Self::Paragraph(p) => Some(p),
            Self::HorizontalRule { .. } => None,
        }
    }

    /// Equality ignoring ids. Any two horizontal rules are equivalent.
    pub fn is_content_equivalent(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::HorizontalRule { .. }, Self::HorizontalRule { .. }) => true,
            (Self::Paragraph(a), Self::Paragraph(b)) => {
                a.text == b.text && a.metadata == b.metadata
            }
            _ => false,
        }
    }
}

impl From<Paragraph> for Block {
    fn from(p: Paragraph) -> Self {
        Self::Paragraph(p)
    }
}

/// An ordered sequence of blocks with unique ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// A document holding a single empty paragraph.
    pub fn new() -> Self {
        Self {
            blocks: vec![Paragraph::empty(BlockId::generate()).into()],
        }
    }

    /// Build a document from `blocks`, rejecting duplicate ids.
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self, Error> {
        let mut doc = Self { blocks: Vec::with_capacity(blocks.len()) };
        for block in blocks {
            doc.push(block)?;
        }
        Ok(doc)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(Block::as_paragraph)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id() == id)
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id() == id)
    }

    pub fn paragraph(&self, id: &BlockId) -> Option<&Paragraph> {
        self.block(id).and_then(Block::as_paragraph)
    }

    pub fn paragraph_mut(&mut self, id: &BlockId) -> Option<&mut Paragraph> {
        self.blocks
            .iter_mut()
            .find(|b| b.id() == id)
            .and_then(Block::as_paragraph_mut)
    }

    pub(crate) fn blocks_mut(&mut self) -> &mut [Block] {
        &mut self.blocks
    }

    pub fn push(&mut self, block: impl Into<Block>) -> Result<(), Error> {
        let len = self.blocks.len();
        self.insert(len, block)
    }

    /// Insert `block` at `index` (clamped to the end).
    pub fn insert(
        &mut self,
        index: usize,
        block: impl Into<Block>,
    ) -> Result<(), Error> {
        let block = block.into();
        if self.contains(block.id()) {
            return Err(Error::DuplicateBlockId(block.id().clone()));
        }
        let index = index.min(self.blocks.len());
        self.blocks.insert(index, block);
        Ok(())
    }

    pub fn remove(&mut self, id: &BlockId) -> Option<Block> {
        let index = self.index_of(id)?;
        Some(self.blocks.remove(index))
    }

    /// Paragraph texts joined by newlines. Horizontal rules contribute an
    /// empty line.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.as_paragraph().map_or("", |p| p.text.text()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
