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

//! Serde shapes of the persisted form.
//!
//! These are output types only. Input goes through the tolerant reader
//! in `parse`, which walks a [`serde_json::Value`] so that one bad field
//! never sinks the rest of the document.

use serde::Serialize;

use crate::{
    Alignment, Attribution, AttributionFamily, AttributionSpan, Block,
    BlockMetadata, Document, HeadingLevel, ListType, Paragraph,
};

/// Version written to every document.
pub const FORMAT_VERSION: &str = "1.0";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WireDocument {
    pub version: String,
    pub nodes: Vec<WireNode>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WireNodeType {
    Paragraph,
    HorizontalRule,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: WireNodeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributions: Vec<WireAttribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<WireMetadata>,
}

/// One attribution span. Only the fields its family uses are written.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAttribution {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub family: AttributionFamily,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<HeadingLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_type: Option<ListType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_indent: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_block_quote: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl From<&Document> for WireDocument {
    fn from(document: &Document) -> Self {
        Self {
            version: FORMAT_VERSION.to_owned(),
            nodes: document.iter().map(WireNode::from).collect(),
        }
    }
}

impl From<&Block> for WireNode {
    fn from(block: &Block) -> Self {
        match block {
            Block::Paragraph(paragraph) => Self::from(paragraph),
            Block::HorizontalRule { id } => Self {
                id: id.to_string(),
                node_type: WireNodeType::HorizontalRule,
                text: None,
                attributions: Vec::new(),
                metadata: None,
            },
        }
    }
}

impl From<&Paragraph> for WireNode {
    fn from(paragraph: &Paragraph) -> Self {
        Self {
            id: paragraph.id.to_string(),
            node_type: WireNodeType::Paragraph,
            text: Some(paragraph.text.text().to_owned()),
            attributions: paragraph
                .text
                .spans()
                .iter()
                .map(WireAttribution::from)
                .collect(),
            metadata: paragraph
                .metadata
                .has_formatting()
                .then(|| WireMetadata::from(paragraph.metadata)),
        }
    }
}

impl From<&AttributionSpan> for WireAttribution {
    fn from(span: &AttributionSpan) -> Self {
        let mut wire = Self {
            start: span.start,
            end: span.end,
            family: span.attribution.family(),
            color: None,
            size: None,
            name: None,
            entity_type: None,
            recognized: None,
            start_offset: None,
            end_offset: None,
        };
        match &span.attribution {
            Attribution::Bold
            | Attribution::Italic
            | Attribution::Underline
            | Attribution::Strikethrough => {}
            Attribution::TextColor(color) | Attribution::HighlightColor(color) => {
                wire.color = Some(color.to_string());
            }
            Attribution::FontSize(size) => wire.size = Some(size.points()),
            Attribution::Entity(entity) => {
                wire.name = Some(entity.name.clone());
                wire.entity_type = Some(entity.entity_type.clone());
                wire.recognized = Some(entity.recognized);
                wire.start_offset = Some(entity.start_offset);
                wire.end_offset = Some(entity.end_offset);
            }
        }
        wire
    }
}

impl From<BlockMetadata> for WireMetadata {
    fn from(metadata: BlockMetadata) -> Self {
        Self {
            heading_level: metadata.heading_level,
            list_type: metadata.list_type,
            list_indent: metadata.list_indent,
            alignment: metadata.alignment,
            is_block_quote: metadata.is_block_quote,
        }
    }
}
