use unicode_blocks::{Query, UnicodeBlocks};
use unicode_blocks_prepare::{write_artifact, CompilerOptions, JsonEmitter, TypstEmitter};

use crate::data::compile_test_data;

#[test]
fn layouts()
{
    let artifact = compile_test_data(&CompilerOptions::default());
    let stats = &artifact.stats;

    assert_eq!(stats.blocks, 9);
    assert_eq!((stats.dense, stats.sparse), (7, 2));

    let sparse: Vec<&str> = artifact
        .tables
        .blocks()
        .iter()
        .filter(|block| block.table.is_sparse())
        .map(|block| block.name.as_str())
        .collect();

    assert_eq!(sparse, vec!["Hangul Syllables", "Specials"]);
}

#[test]
fn attributes()
{
    let artifact = compile_test_data(&CompilerOptions::default());

    let query = artifact.query('A' as u32);
    assert_eq!(query.block_name, Some("Basic Latin"));
    assert_eq!(query.block_id, Some("0000"));

    let record = query.attributes.unwrap();
    assert_eq!(record.name, "LATIN CAPITAL LETTER A");
    assert_eq!(record.general_category, "Lu");
    assert_eq!(record.combining_class, 0);

    let record = artifact.query(0x0300).attributes.unwrap();
    assert_eq!(record.name, "COMBINING GRAVE ACCENT");
    assert_eq!(record.general_category, "Mn");
    assert_eq!(record.combining_class, 230);

    let query = artifact.query(0x1F600);
    assert_eq!(query.block_name, Some("Emoticons"));
    assert_eq!(query.block_id, Some("1F600"));
    assert_eq!(query.attributes.map(|r| r.name.as_str()), Some("GRINNING FACE"));

    let query = artifact.query(0xFFFD);
    assert_eq!(query.block_name, Some("Specials"));
    assert_eq!(query.attributes.map(|r| r.name.as_str()), Some("REPLACEMENT CHARACTER"));
}

#[test]
fn holes_and_gaps()
{
    let artifact = compile_test_data(&CompilerOptions::default());

    // не назначен, но внутри блока
    let query = artifact.query(0x0378);
    assert_eq!(query.block_name, Some("Greek and Coptic"));
    assert_eq!(query.attributes, None);

    // внутри диапазона Hangul, но диапазоны не развернуты
    let query = artifact.query(0xAC01);
    assert_eq!(query.block_name, Some("Hangul Syllables"));
    assert_eq!(query.attributes, None);

    // Latin Extended-A в тестовом Blocks.txt отсутствует
    assert_eq!(artifact.query(0x0100), Query::no_match());
    assert_eq!(artifact.query(0x10FFFF), Query::no_match());
}

#[test]
fn aliases()
{
    let artifact = compile_test_data(&CompilerOptions::default());

    let aliases = artifact.query(0xFEFF).aliases;
    assert_eq!(aliases.alternate, vec!["BYTE ORDER MARK"]);
    assert_eq!(aliases.abbreviation, vec!["BOM", "ZWNBSP"]);
    assert!(aliases.control.is_empty());

    let aliases = artifact.query(0x000A).aliases;
    assert_eq!(aliases.control, vec!["LINE FEED", "NEW LINE", "END OF LINE"]);
    assert_eq!(aliases.abbreviation, vec!["LF", "NL", "EOL"]);

    let aliases = artifact.query(0x0080).aliases;
    assert_eq!(aliases.figment, vec!["PADDING CHARACTER"]);

    assert_eq!(artifact.query(0x01A2).aliases.correction, vec!["LATIN CAPITAL LETTER GHA"]);
    assert!(artifact.query('A' as u32).aliases.is_empty());
}

#[test]
fn expanded_hangul()
{
    let options = CompilerOptions {
        expand_ranges: true,
        ..Default::default()
    };
    let artifact = compile_test_data(&options);

    let query = artifact.query(0xAC01);
    assert_eq!(query.attributes.map(|r| r.name.as_str()), Some("Hangul Syllable-AC01"));
    assert_eq!(query.attributes.map(|r| r.general_category.as_str()), Some("Lo"));

    // после разворачивания блок заполнен почти полностью
    assert_eq!(artifact.stats.sparse, 1);
}

#[test]
fn json_artifact_matches_compiled()
{
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("ucd");
    let artifact = compile_test_data(&CompilerOptions::default());

    write_artifact(&artifact, &JsonEmitter, &target).unwrap();

    let loaded = UnicodeBlocks::load(&target).unwrap();

    for code in (0 ..= 0x400).chain(0xAC00 .. 0xAC10).chain(0xFE70 ..= 0xFFFF).chain(0x1F5F0 .. 0x1F660) {
        assert_eq!(loaded.query(code), artifact.query(code), "U+{:04X}", code);
    }

    assert!(target.join("LICENSE").exists());
}

#[test]
fn typst_artifact_files()
{
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("ucd");
    let artifact = compile_test_data(&CompilerOptions::default());

    write_artifact(&artifact, &TypstEmitter, &target).unwrap();

    for block in artifact.tables.blocks() {
        assert!(target.join(format!("block-{}.typ", block.id)).exists(), "{}", block.name);
    }

    assert!(target.join("aliases.typ").exists());
    assert!(target.join("index.typ").exists());
}
