use proptest::prelude::*;
use unicode_blocks_prepare::tables::is_sparse;
use unicode_blocks_prepare::{compile, CompilerOptions};

use crate::data::{blocks_txt, provider, unicode_data_txt};

/// размер тестового блока
const SIZE: u32 = 0x40;

proptest! {
    #[test]
    fn layout_follows_occupancy(
        codes in prop::collection::btree_set(0u32 .. SIZE, 0 .. SIZE as usize),
        trim in any::<bool>(),
    )
    {
        let codes: Vec<u32> = codes.into_iter().collect();
        let options = CompilerOptions {
            trim_trailing_holes: trim,
            ..Default::default()
        };

        let artifact = compile(
            &provider(blocks_txt(&[(0, SIZE - 1)]), unicode_data_txt(&codes)),
            &options,
        )
        .unwrap();

        let table = &artifact.tables.blocks()[0].table;

        let size = match trim {
            true => codes.last().map_or(0, |last| last + 1) as usize,
            false => SIZE as usize,
        };

        prop_assert_eq!(table.is_sparse(), is_sparse(size - codes.len(), size));
        prop_assert_eq!(table.records(), codes.len());

        for code in 0 .. SIZE {
            let name = artifact.query(code).attributes.map(|record| record.name.clone());
            let expected = codes.contains(&code).then(|| format!("CHARACTER {:04X}", code));

            prop_assert_eq!(name, expected);
        }
    }
}
