pub use aliases::codepoint_key;
pub use aliases::AliasSet;
pub use aliases::Aliases;
pub use load::block_file;
pub use load::ArtifactIndex;
pub use load::ArtifactIndexEntry;
pub use load::LoadError;
pub use load::ALIASES_FILE;
pub use load::INDEX_FILE;
pub use record::offset_key;
pub use record::AttributeRecord;
pub use record::BlockTable;

use serde::{Deserialize, Serialize};

mod aliases;
mod load;
mod record;

/// блок Unicode вместе с таблицей его кодпоинтов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEntry
{
    /// идентификатор - первый кодпоинт блока в шестнадцатеричном виде (0000, 1F600)
    pub id: String,
    pub first: u32,
    pub last: u32,
    pub name: String,
    pub table: BlockTable,
}

impl BlockEntry
{
    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.first <= code && code <= self.last
    }
}

/// результат запроса информации о кодпоинте
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query<'a>
{
    /// название блока, None - кодпоинт не входит ни в один блок
    pub block_name: Option<&'a str>,
    pub block_id: Option<&'a str>,
    /// свойства кодпоинта, None - в таблице блока нет записи
    pub attributes: Option<&'a AttributeRecord>,
    /// альтернативные названия, при отсутствии - пустой набор
    pub aliases: &'a Aliases,
}

impl Query<'_>
{
    /// кодпоинт не принадлежит ни одному блоку
    pub fn no_match() -> Query<'static>
    {
        Query {
            block_name: None,
            block_id: None,
            attributes: None,
            aliases: Aliases::empty(),
        }
    }
}

/// подготовленные данные UCD: блоки в порядке проверки и общая таблица альтернативных названий
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnicodeBlocks
{
    blocks: Vec<BlockEntry>,
    aliases: AliasSet,
}

impl UnicodeBlocks
{
    pub fn new(blocks: Vec<BlockEntry>, aliases: AliasSet) -> Self
    {
        Self { blocks, aliases }
    }

    pub fn blocks(&self) -> &[BlockEntry]
    {
        &self.blocks
    }

    pub fn aliases(&self) -> &AliasSet
    {
        &self.aliases
    }

    /// первый в порядке проверки блок, содержащий кодпоинт
    #[inline]
    pub fn block_for(&self, code: u32) -> Option<&BlockEntry>
    {
        self.blocks.iter().find(|block| block.contains(code))
    }

    /// альтернативные названия кодпоинта
    #[inline]
    pub fn aliases_for(&self, code: u32) -> &Aliases
    {
        self.aliases
            .get(&codepoint_key(code))
            .unwrap_or(Aliases::empty())
    }

    /// информация о кодпоинте: блок, свойства и альтернативные названия
    pub fn query(&self, code: u32) -> Query<'_>
    {
        match self.block_for(code) {
            Some(block) => Query {
                block_name: Some(&block.name),
                block_id: Some(&block.id),
                attributes: block.table.get(code - block.first),
                aliases: self.aliases_for(code),
            },
            None => Query::no_match(),
        }
    }

    #[inline]
    pub fn query_char(&self, c: char) -> Query<'_>
    {
        self.query(u32::from(c))
    }
}
