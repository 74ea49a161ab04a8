use std::env;

use unicode_blocks::BlockTable;
use unicode_blocks_prepare::{compile, CompilerOptions};
use unicode_blocks_source::DirectoryProvider;

/// заполненность блоков и выбранный вариант хранения
///
/// cargo run --example occupancy -- ./test_data/ucd
fn main()
{
    let dir = env::args().nth(1).unwrap_or_else(|| "./test_data/ucd".to_owned());

    let options = CompilerOptions {
        include_license: false,
        ..Default::default()
    };

    let artifact = match compile(&DirectoryProvider::new(&dir), &options) {
        Ok(artifact) => artifact,
        Err(e) => {
            println!("не удалось подготовить данные из {}: {}", dir, e);
            return;
        }
    };

    for block in artifact.tables.blocks() {
        let size = block.last - block.first + 1;
        let records = block.table.records();

        let layout = match &block.table {
            BlockTable::Dense(_) => "dense ",
            BlockTable::Sparse(_) => "sparse",
        };

        println!(
            "{} U+{:04X} ..= U+{:04X}  {:>6} / {:<6} {:>5.1}%  {}",
            layout,
            block.first,
            block.last,
            records,
            size,
            records as f64 * 100.0 / size as f64,
            block.name,
        );
    }

    let stats = &artifact.stats;

    println!(
        "\nблоков: {} (dense: {}, sparse: {}), кодпоинтов: {}, пустых позиций в dense-блоках: {}\n",
        stats.blocks, stats.dense, stats.sparse, stats.records, stats.stored_holes,
    );
}
