use proptest::prelude::*;
use unicode_blocks::Query;
use unicode_blocks_prepare::{compile, CompilerOptions};
use unicode_blocks_source::BlockIndex;

use crate::data::{blocks_txt, provider};

/// непересекающиеся диапазоны: соседние пары отсортированных границ
fn ranges() -> impl Strategy<Value = Vec<(u32, u32)>>
{
    prop::collection::btree_set(0u32 .. 0x800, 2 .. 24).prop_map(|bounds| {
        let bounds: Vec<u32> = bounds.into_iter().collect();

        bounds
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    })
}

proptest! {
    #[test]
    fn every_codepoint_maps_to_its_block(ranges in ranges())
    {
        let index = BlockIndex::parse(&blocks_txt(&ranges)).unwrap();

        prop_assert!(index.overlapping().is_none());

        for code in 0 .. 0x800 {
            let expected = ranges
                .iter()
                .position(|(first, last)| *first <= code && code <= *last);

            prop_assert_eq!(index.find(code).map(|(i, _)| i), expected);
        }
    }

    #[test]
    fn query_respects_block_ranges(ranges in ranges(), probe in 0u32 .. 0x800)
    {
        let artifact = compile(&provider(blocks_txt(&ranges), String::new()), &CompilerOptions::default())
            .unwrap();

        match ranges.iter().position(|(first, last)| *first <= probe && probe <= *last) {
            Some(i) => {
                let query = artifact.query(probe);
                let block_name = format!("Block {}", i);

                prop_assert_eq!(query.block_name, Some(block_name.as_str()));
                prop_assert_eq!(query.attributes, None);
            }
            None => prop_assert_eq!(artifact.query(probe), Query::no_match()),
        }
    }
}

#[test]
fn overlapping_blocks_first_listed_wins()
{
    let blocks = "0000..00FF; Outer\n0040..007F; Inner\n".to_owned();
    let artifact = compile(&provider(blocks, String::new()), &CompilerOptions::default()).unwrap();

    assert_eq!(artifact.query(0x50).block_name, Some("Outer"));
    assert_eq!(artifact.query(0x50).block_id, Some("0000"));
}
