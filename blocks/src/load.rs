use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{AliasSet, BlockEntry, BlockTable, UnicodeBlocks};

/// файл с описанием диспетчеризации
pub const INDEX_FILE: &str = "index.json";
/// файл таблицы альтернативных названий
pub const ALIASES_FILE: &str = "aliases.json";

/// название файла таблицы блока
pub fn block_file(id: &str) -> String
{
    format!("block-{}.json", id)
}

/// описание диспетчеризации: блоки в порядке проверки и ссылки на их таблицы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactIndex
{
    pub blocks: Vec<ArtifactIndexEntry>,
    /// файл таблицы альтернативных названий
    pub aliases: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactIndexEntry
{
    pub id: String,
    pub first: u32,
    pub last: u32,
    pub name: String,
    /// dense / sparse
    pub layout: String,
    /// файл таблицы блока
    pub table: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError
{
    #[error("не удалось прочитать {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("некорректный JSON в {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("блок {id}: в индексе указан вариант {expected}, в таблице - {found}")]
    LayoutMismatch {
        id: String,
        expected: String,
        found: &'static str,
    },
}

impl UnicodeBlocks
{
    /// загрузить подготовленные данные из каталога (формат JSON)
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, LoadError>
    {
        let dir = dir.as_ref();
        let index: ArtifactIndex = read_json(&dir.join(INDEX_FILE))?;

        let mut blocks = Vec::with_capacity(index.blocks.len());

        for entry in index.blocks {
            let table: BlockTable = read_json(&dir.join(&entry.table))?;

            if table.layout() != entry.layout {
                return Err(LoadError::LayoutMismatch {
                    id: entry.id,
                    expected: entry.layout,
                    found: table.layout(),
                });
            }

            blocks.push(BlockEntry {
                id: entry.id,
                first: entry.first,
                last: entry.last,
                name: entry.name,
                table,
            });
        }

        let aliases: AliasSet = read_json(&dir.join(&index.aliases))?;

        Ok(Self::new(blocks, aliases))
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, LoadError>
{
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
