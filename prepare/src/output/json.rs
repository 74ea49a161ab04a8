use std::path::Path;

use serde::Serialize;
use unicode_blocks::{block_file, ArtifactIndex, ArtifactIndexEntry, ALIASES_FILE, INDEX_FILE};

use super::{write_file, Emitter};
use crate::compile::CompiledArtifact;
use crate::error::Result;

/// запись в JSON, формат читается unicode_blocks::UnicodeBlocks::load
///
/// ```text
/// index.json        - блоки в порядке проверки, ссылки на таблицы
/// block-XXXX.json   - таблица блока: {"layout": "dense" | "sparse", "data": ...}
/// aliases.json      - альтернативные названия
/// ```
pub struct JsonEmitter;

impl Emitter for JsonEmitter
{
    fn emit(&self, artifact: &CompiledArtifact, dir: &Path) -> Result<()>
    {
        let mut index = ArtifactIndex {
            blocks: Vec::with_capacity(artifact.tables.blocks().len()),
            aliases: ALIASES_FILE.to_owned(),
        };

        for block in artifact.tables.blocks() {
            let table = block_file(&block.id);

            write_json(&dir.join(&table), &block.table, false)?;

            index.blocks.push(ArtifactIndexEntry {
                id: block.id.clone(),
                first: block.first,
                last: block.last,
                name: block.name.clone(),
                layout: block.table.layout().to_owned(),
                table,
            });
        }

        write_json(&dir.join(ALIASES_FILE), artifact.tables.aliases(), false)?;
        write_json(&dir.join(INDEX_FILE), &index, true)?;

        Ok(())
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<()>
{
    let content = match pretty {
        true => serde_json::to_string_pretty(value)?,
        false => serde_json::to_string(value)?,
    };

    write_file(path, &content)
}
