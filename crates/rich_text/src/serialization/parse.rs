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

//! The reader never fails. Each node, attribution entry and metadata
//! field is checked on its own and dropped or defaulted when it does not
//! make sense, so the rest of the document still loads.

use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::FORMAT_VERSION;
use crate::{
    AttributedText, Attribution, AttributionFamily, Block, BlockId,
    BlockMetadata, Document, EntityRef, FontSize, Paragraph, Rgba,
};

/// Read a document from JSON text. Text that is not JSON at all yields a
/// document with one empty paragraph.
pub fn from_json_str(json: &str) -> Document {
    match serde_json::from_str::<Value>(json) {
        Ok(value) => from_json_value(&value),
        Err(e) => {
            warn!(error = %e, "unparsable document, starting empty");
            Document::new()
        }
    }
}

/// Read a document from a JSON value, keeping everything that can be
/// salvaged. The result always has at least one block.
pub fn from_json_value(value: &Value) -> Document {
    let Some(root) = value.as_object() else {
        warn!("document is not an object, starting empty");
        return Document::new();
    };

    match root.get("version").and_then(Value::as_str) {
        Some(FORMAT_VERSION) => {}
        version => debug!(?version, "unexpected document version"),
    }

    let nodes: &[Value] = match root.get("nodes") {
        Some(Value::Array(nodes)) => nodes.as_slice(),
        other => {
            debug!(present = other.is_some(), "no node list");
            &[]
        }
    };

    let mut seen = HashSet::new();
    let blocks: Vec<Block> = nodes
        .iter()
        .enumerate()
        .filter_map(|(index, node)| read_node(index, node, &mut seen))
        .collect();
    if blocks.is_empty() {
        return Document::new();
    }
    Document::from_blocks(blocks).unwrap_or_else(|e| {
        warn!(error = %e, "could not assemble document, starting empty");
        Document::new()
    })
}

fn read_node(index: usize, node: &Value, seen: &mut HashSet<String>) -> Option<Block> {
    let Some(node) = node.as_object() else {
        warn!(index, "node is not an object, dropped");
        return None;
    };
    let Some(id) = node.get("id").and_then(Value::as_str).filter(|id| !id.is_empty()) else {
        warn!(index, "node without id dropped");
        return None;
    };
    let id = if seen.insert(id.to_owned()) {
        BlockId::new(id)
    } else {
        let fresh = BlockId::generate();
        warn!(index, duplicate = id, replacement = %fresh, "duplicate node id replaced");
        seen.insert(fresh.to_string());
        fresh
    };

    match node.get("type").and_then(Value::as_str) {
        Some("horizontalRule") => return Some(Block::HorizontalRule { id }),
        Some("paragraph") => {}
        other => debug!(%id, node_type = ?other, "unknown node type read as paragraph"),
    }

    let mut text = AttributedText::new(node.get("text").and_then(Value::as_str).unwrap_or_default());
    if let Some(Value::Array(entries)) = node.get("attributions") {
        for entry in entries {
            let Some((attribution, range)) = read_attribution(entry, text.len()) else {
                continue;
            };
            if let Err(e) = text.add_attribution(attribution, range) {
                debug!(%id, error = %e, "attribution rejected");
            }
        }
    }

    let metadata = node
        .get("metadata")
        .and_then(Value::as_object)
        .map(read_metadata)
        .unwrap_or_default();

    Some(Paragraph { id, text, metadata }.into())
}

fn read_attribution(entry: &Value, len: usize) -> Option<(Attribution, RangeInclusive<usize>)> {
    let entry = entry.as_object()?;
    let start = read_offset(entry, "start")?;
    let end = read_offset(entry, "end")?;
    if start > end || end >= len {
        debug!(start, end, len, "attribution range outside the text");
        return None;
    }

    let kind = entry.get("type").and_then(Value::as_str)?;
    let Ok(family) = AttributionFamily::from_str(kind) else {
        debug!(kind, "unknown attribution type");
        return None;
    };

    let attribution = match family {
        AttributionFamily::Bold => Attribution::Bold,
        AttributionFamily::Italic => Attribution::Italic,
        AttributionFamily::Underline => Attribution::Underline,
        AttributionFamily::Strikethrough => Attribution::Strikethrough,
        AttributionFamily::TextColor => Attribution::TextColor(read_color(entry)?),
        AttributionFamily::HighlightColor => Attribution::HighlightColor(read_color(entry)?),
        AttributionFamily::FontSize => Attribution::FontSize(read_size(entry)?),
        AttributionFamily::Entity => {
            let Some(name) = entry.get("name").and_then(Value::as_str) else {
                debug!(start, end, "entity without name");
                return None;
            };
            Attribution::Entity(EntityRef {
                name: name.to_owned(),
                entity_type: entry
                    .get("entityType")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned(),
                recognized: entry
                    .get("recognized")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
                start_offset: read_offset(entry, "startOffset").unwrap_or(start),
                end_offset: read_offset(entry, "endOffset").unwrap_or(end),
            })
        }
    };
    Some((attribution, start..=end))
}

fn read_offset(object: &Map<String, Value>, key: &str) -> Option<usize> {
    object
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
}

fn read_color(entry: &Map<String, Value>) -> Option<Rgba> {
    let raw = entry.get("color").and_then(Value::as_str)?;
    match raw.parse() {
        Ok(color) => Some(color),
        Err(e) => {
            debug!(error = %e, "colour attribution skipped");
            None
        }
    }
}

fn read_size(entry: &Map<String, Value>) -> Option<FontSize> {
    let raw = entry.get("size").and_then(Value::as_f64)?;
    let size = raw as f32;
    if !size.is_finite() || size <= 0.0 {
        debug!(size = raw, "font size attribution skipped");
        return None;
    }
    Some(FontSize::new(size))
}

/// Unknown or mistyped values become absent. A heading wins over a list
/// if both are present; an indent without a list type is dropped.
fn read_metadata(object: &Map<String, Value>) -> BlockMetadata {
    fn read_enum<T: FromStr>(object: &Map<String, Value>, key: &str) -> Option<T> {
        let raw = object.get(key)?;
        let parsed = raw.as_str().and_then(|s| s.parse().ok());
        if parsed.is_none() && !raw.is_null() {
            debug!(key, value = %raw, "metadata value ignored");
        }
        parsed
    }

    let base = BlockMetadata::default()
        .with_alignment(read_enum(object, "alignment"))
        .with_block_quote(
            object
                .get("isBlockQuote")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        );

    match (read_enum(object, "headingLevel"), read_enum(object, "listType")) {
        (Some(level), _) => base.with_heading_level(Some(level)),
        (None, Some(list_type)) => {
            let indent = object
                .get("listIndent")
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0);
            base.with_list(list_type, indent)
        }
        (None, None) => base,
    }
}
