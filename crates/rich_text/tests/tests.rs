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

use rich_text::{
    from_json_str, from_json_value, to_json_string, to_json_value,
    Attribution, BlockId, Composer, Document, Entity, InlineStyle,
    ListType, Paragraph, Position, Selection,
};
use serde_json::json;

fn model_with_text(text: &str) -> Composer {
    let doc = Document::from_blocks(vec![
        Paragraph::new(BlockId::from("p"), text).into(),
    ])
    .unwrap();
    Composer::from_document(doc)
}

#[test]
fn can_instantiate_a_model_and_call_methods() {
    let mut model = Composer::new();
    model.replace_text("foo");
    let id = model.document().blocks()[0].id().clone();
    model.select_in(id, 1, 2);

    let state = model.bold();

    assert!(state.is_active(InlineStyle::Bold));
    let spans = model.document().blocks()[0]
        .as_paragraph()
        .unwrap()
        .text
        .spans();
    assert_eq!(spans.len(), 1);
    assert_eq!((spans[0].start, spans[0].end), (1, 1));
}

#[test]
fn bold_survives_a_round_trip() {
    let text = "This is bold text";
    let mut model = model_with_text(text);
    model.select_in(BlockId::from("p"), 8, 12);
    model.bold();

    let json = to_json_string(model.document()).unwrap();
    let doc = from_json_str(&json);

    let paragraph = doc.paragraph(&BlockId::from("p")).unwrap();
    assert_eq!(paragraph.text.text(), text);
    let bold: Vec<_> = paragraph
        .text
        .spans()
        .into_iter()
        .filter(|s| s.attribution == Attribution::Bold)
        .map(|s| (s.start, s.end))
        .collect();
    assert_eq!(bold, [(8, 11)]);
}

#[test]
fn malformed_documents_still_load() {
    let inputs = [
        json!({}),
        json!({ "nodes": [] }),
        json!({
            "nodes": [{
                "id": "a",
                "text": "short",
                "attributions": [{ "start": 40, "end": 44, "type": "bold" }]
            }]
        }),
        json!({
            "nodes": [{
                "id": "a",
                "text": "short",
                "attributions": [{ "start": 0, "end": 1, "type": "bogus" }]
            }]
        }),
    ];
    for input in inputs {
        let doc = from_json_value(&input);
        assert!(doc.paragraphs().count() >= 1, "{input}");
        assert!(doc.paragraphs().all(|p| !p.text.has_attributions()));
    }
}

#[test]
fn editing_session_end_to_end() {
    let doc = Document::from_blocks(vec![
        Paragraph::new(BlockId::from("one"), "Shopping").into(),
        Paragraph::new(BlockId::from("two"), "milk for Alice").into(),
        Paragraph::new(BlockId::from("three"), "eggs").into(),
    ])
    .unwrap();
    let mut model = Composer::from_document(doc);

    model.select(Selection::new(
        Position::new(BlockId::from("two"), 0),
        Position::new(BlockId::from("three"), 4),
    ));
    model.unordered_list();
    model.italic();

    model.recognize_entities(&|text: &str| {
        text.find("Alice")
            .map(|byte| {
                let start = text[..byte].chars().count();
                vec![Entity {
                    name: "Alice".to_owned(),
                    entity_type: "person".to_owned(),
                    start_offset: start,
                    end_offset: start + 4,
                    recognized: true,
                }]
            })
            .unwrap_or_default()
    });

    model.clear_formatting();

    let value = to_json_value(model.document()).unwrap();
    assert_eq!(
        value["nodes"][1],
        json!({
            "id": "two",
            "type": "paragraph",
            "text": "milk for Alice",
            "attributions": [{
                "start": 9, "end": 13, "type": "entity",
                "name": "Alice", "entityType": "person", "recognized": true,
                "startOffset": 9, "endOffset": 13
            }]
        })
    );
    assert_eq!(
        value["nodes"][2],
        json!({ "id": "three", "type": "paragraph", "text": "eggs" })
    );
}

#[test]
fn list_formatting_reaches_every_selected_paragraph() {
    let doc = Document::from_blocks(
        (0..5)
            .map(|i| Paragraph::new(BlockId::new(format!("p{i}")), "item").into())
            .collect(),
    )
    .unwrap();
    let mut model = Composer::from_document(doc);
    model.select(Selection::new(
        Position::new(BlockId::from("p3"), 2),
        Position::new(BlockId::from("p1"), 1),
    ));
    model.ordered_list();

    let lists: Vec<_> = model
        .document()
        .paragraphs()
        .map(|p| p.metadata.list_type)
        .collect();
    assert_eq!(
        lists,
        [
            None,
            Some(ListType::Ordered),
            Some(ListType::Ordered),
            Some(ListType::Ordered),
            None
        ]
    );
}

#[test]
fn commands_on_missing_blocks_do_nothing() {
    let mut model = model_with_text("abc");
    let before = model.document().clone();
    let state = model.select_in(BlockId::from("gone"), 0, 2);
    assert_eq!(state, Default::default());
    assert_eq!(model.bold(), Default::default());
    assert_eq!(model.ordered_list(), Default::default());
    assert_eq!(model.clear_formatting(), Default::default());
    assert_eq!(model.document(), &before);
    assert!(!model.apply_entities(&BlockId::from("gone"), &[]));
}
