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

//! Property tests for the attribution store, the formatting commands
//! and the serializer.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rich_text::{
    from_json_value, to_json_value, Alignment, AttributedText, Attribution,
    AttributionFamily, Block, BlockId, BlockMetadata, Composer, Document,
    EntityRef, FontSize, HeadingLevel, ListType, Paragraph, Position, Rgba,
    Selection,
};

/// Short text mixing one-byte, two-byte and four-byte codepoints.
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-z é\u{1F600}]{1,24}"
}

fn attribution_strategy() -> impl Strategy<Value = Attribution> {
    prop_oneof![
        Just(Attribution::Bold),
        Just(Attribution::Italic),
        Just(Attribution::Underline),
        (0u8..3).prop_map(|v| Attribution::TextColor(Rgba::opaque(v, 0, 0))),
        (0u8..3).prop_map(|v| Attribution::HighlightColor(Rgba::new(0, v, 0, 0x80))),
        (1u8..4).prop_map(|v| Attribution::FontSize(FontSize::new(f32::from(v) * 6.0))),
        (prop::num::f32::POSITIVE | prop::num::f32::NORMAL)
            .prop_map(|v| Attribution::FontSize(FontSize::new(v))),
        Just(Attribution::Entity(EntityRef {
            name: "x".to_owned(),
            entity_type: "tag".to_owned(),
            recognized: true,
            start_offset: 0,
            end_offset: 0,
        })),
    ]
}

/// An inclusive range inside a text of `len` codepoints.
fn range_in(len: usize) -> impl Strategy<Value = (usize, usize)> {
    (0..len, 0..len).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

/// Text plus a list of `(add?, attribution, start, end)` edits valid for it.
fn edited_text_strategy(
) -> impl Strategy<Value = (String, Vec<(bool, Attribution, usize, usize)>)> {
    text_strategy().prop_flat_map(|text| {
        let len = text.chars().count();
        let edit = (any::<bool>(), attribution_strategy(), range_in(len))
            .prop_map(|(add, attribution, (s, e))| (add, attribution, s, e));
        (Just(text), prop::collection::vec(edit, 0..12))
    })
}

fn metadata_strategy() -> impl Strategy<Value = BlockMetadata> {
    let kind = prop_oneof![
        Just(BlockMetadata::default()),
        prop_oneof![Just(HeadingLevel::H1), Just(HeadingLevel::H2), Just(HeadingLevel::H3)]
            .prop_map(|level| BlockMetadata::default().with_heading_level(Some(level))),
        (prop_oneof![Just(ListType::Ordered), Just(ListType::Unordered)], 0u32..4)
            .prop_map(|(list, indent)| BlockMetadata::default().with_list(list, indent)),
    ];
    let alignment = prop_oneof![
        Just(None),
        Just(Some(Alignment::Left)),
        Just(Some(Alignment::Center)),
        Just(Some(Alignment::Right)),
        Just(Some(Alignment::Justify)),
    ];
    (kind, alignment, any::<bool>()).prop_map(|(meta, alignment, quote)| {
        meta.with_alignment(alignment).with_block_quote(quote)
    })
}

fn build_text(text: &str, edits: &[(bool, Attribution, usize, usize)]) -> AttributedText {
    let mut attributed = AttributedText::new(text);
    for (add, attribution, s, e) in edits {
        if *add {
            attributed.add_attribution(attribution.clone(), *s..=*e).unwrap();
        } else {
            attributed.remove_attribution(attribution, *s..=*e).unwrap();
        }
    }
    attributed
}

/// One to four blocks; roughly one in five is a horizontal rule.
fn document_strategy() -> impl Strategy<Value = Document> {
    let block = prop::option::weighted(0.8, (edited_text_strategy(), metadata_strategy()));
    prop::collection::vec(block, 1..5).prop_map(|blocks| {
        let blocks = blocks
            .into_iter()
            .enumerate()
            .map(|(i, block)| match block {
                Some(((text, edits), metadata)) => Paragraph {
                    id: BlockId::new(format!("p{i}")),
                    text: build_text(&text, &edits),
                    metadata,
                }
                .into(),
                None => Block::HorizontalRule {
                    id: BlockId::new(format!("hr{i}")),
                },
            })
            .collect();
        Document::from_blocks(blocks).unwrap()
    })
}

fn select_all(model: &mut Composer) {
    let blocks = model.document().blocks();
    let first = blocks[0].id().clone();
    let last = &blocks[blocks.len() - 1];
    let len = last.as_paragraph().map_or(0, |p| p.text.len());
    let end = Position::new(last.id().clone(), len);
    model.select(Selection::new(Position::new(first, 0), end));
}

proptest! {
    #[test]
    fn spans_match_a_per_codepoint_model((text, edits) in edited_text_strategy()) {
        let attributed = build_text(&text, &edits);
        attributed.explicitly_assert_invariants();

        let mut naive = vec![BTreeSet::new(); attributed.len()];
        for (add, attribution, s, e) in &edits {
            for set in &mut naive[*s..=*e] {
                if *add {
                    set.insert(attribution.clone());
                } else {
                    set.remove(attribution);
                }
            }
        }

        for (pos, expected) in naive.iter().enumerate() {
            let actual: BTreeSet<Attribution> = attributed
                .all_attributions_at(pos)
                .unwrap()
                .into_iter()
                .cloned()
                .collect();
            prop_assert_eq!(&actual, expected, "position {}", pos);
        }
    }

    #[test]
    fn bold_twice_restores_the_text(
        (text, edits) in edited_text_strategy(),
        seed in (any::<prop::sample::Index>(), any::<prop::sample::Index>()),
    ) {
        let edits: Vec<_> = edits
            .into_iter()
            .filter(|(_, a, _, _)| *a != Attribution::Bold)
            .collect();
        let doc = Document::from_blocks(vec![
            Paragraph { id: BlockId::from("p"), text: build_text(&text, &edits), metadata: BlockMetadata::default() }.into(),
        ]).unwrap();
        let len = text.chars().count();
        let (a, b) = (seed.0.index(len + 1), seed.1.index(len + 1));

        let mut model = Composer::from_document(doc.clone());
        model.select_in(BlockId::from("p"), a, b);
        model.bold();
        model.bold();
        prop_assert_eq!(model.document(), &doc);
    }

    #[test]
    fn a_second_font_size_replaces_the_first(
        text in text_strategy(),
        seed in (any::<prop::sample::Index>(), any::<prop::sample::Index>()),
        v1 in 6u8..=200,
        v2 in 6u8..=200,
    ) {
        let len = text.chars().count();
        let (a, b) = (seed.0.index(len), seed.1.index(len));
        let (s, e) = (a.min(b), a.max(b));

        let mut model = Composer::from_document(
            Document::from_blocks(vec![Paragraph::new(BlockId::from("p"), text).into()]).unwrap(),
        );
        model.select_in(BlockId::from("p"), s, e + 1);
        model.set_font_size(f32::from(v1));
        model.set_font_size(f32::from(v2));

        let paragraph = model.document().paragraph(&BlockId::from("p")).unwrap();
        for pos in s..=e {
            let sizes: Vec<_> = paragraph
                .text
                .all_attributions_at(pos)
                .unwrap()
                .into_iter()
                .filter(|a| a.is_family(AttributionFamily::FontSize))
                .cloned()
                .collect();
            prop_assert_eq!(sizes, vec![Attribution::FontSize(FontSize::new(f32::from(v2)))]);
        }
    }

    #[test]
    fn clearing_keeps_structure_and_entities(doc in document_strategy()) {
        let mut model = Composer::from_document(doc.clone());
        select_all(&mut model);
        model.clear_formatting();

        let after = model.document();
        let ids = |d: &Document| d.iter().map(|b| b.id().clone()).collect::<Vec<_>>();
        prop_assert_eq!(ids(after), ids(&doc));
        for (before, after) in doc.paragraphs().zip(after.paragraphs()) {
            prop_assert_eq!(&before.id, &after.id);
            prop_assert_eq!(before.text.text(), after.text.text());
            prop_assert_eq!(after.metadata, BlockMetadata::default());
            let entities: Vec<_> = before
                .text
                .spans()
                .into_iter()
                .filter(|s| s.attribution.is_family(AttributionFamily::Entity))
                .collect();
            prop_assert_eq!(after.text.spans(), entities);
        }
    }

    #[test]
    fn documents_survive_a_round_trip(doc in document_strategy()) {
        let value = to_json_value(&doc).unwrap();
        prop_assert_eq!(from_json_value(&value), doc);
    }
}
