use crate::records::parse_codepoint;
use crate::{parse_records, SourceError, UcdRecord, UcdResource};

/// блок Unicode - именованный непрерывный диапазон кодпоинтов
/// источник - UCD, Blocks.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block
{
    /// первый кодпоинт блока в шестнадцатеричном виде, не менее 4 цифр (0000, 1F600)
    pub id: String,
    pub first: u32,
    pub last: u32,
    pub name: String,
}

impl Block
{
    pub fn new(first: u32, last: u32, name: impl Into<String>) -> Self
    {
        debug_assert!(first <= last);

        Self {
            id: format!("{:04X}", first),
            first,
            last,
            name: name.into(),
        }
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.first <= code && code <= self.last
    }

    /// количество кодпоинтов в блоке
    #[inline]
    pub fn size(&self) -> usize
    {
        (self.last - self.first) as usize + 1
    }

    /// пересекаются ли диапазоны блоков
    #[inline]
    pub fn overlaps(&self, other: &Block) -> bool
    {
        self.first <= other.last && other.first <= self.last
    }
}

/// список блоков в порядке следования в Blocks.txt
///
/// порядок списка - порядок проверки при поиске блока: выигрывает первый подходящий.
/// предполагается, что блоки не пересекаются и идут по возрастанию - это не проверяется
/// и не исправляется (см. overlapping)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockIndex
{
    blocks: Vec<Block>,
}

impl BlockIndex
{
    pub fn new(blocks: Vec<Block>) -> Self
    {
        Self { blocks }
    }

    /// разбор Blocks.txt
    pub fn parse(text: &str) -> Result<Self, SourceError>
    {
        Self::from_records(&parse_records(UcdResource::Blocks, text))
    }

    /// записи Blocks.txt: диапазон (FIRST..LAST или FIRST) и название
    pub fn from_records(records: &[UcdRecord]) -> Result<Self, SourceError>
    {
        let mut blocks = Vec::with_capacity(records.len());

        for record in records {
            record.expect_fields(2)?;

            let (first, last) = parse_range(record)?;

            blocks.push(Block::new(first, last, record.field(1)));
        }

        Ok(Self { blocks })
    }

    /// первый блок, содержащий кодпоинт, и его позиция в списке
    #[inline]
    pub fn find(&self, code: u32) -> Option<(usize, &Block)>
    {
        self.blocks
            .iter()
            .enumerate()
            .find(|(_, block)| block.contains(code))
    }

    pub fn blocks(&self) -> &[Block]
    {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block>
    {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize
    {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.blocks.is_empty()
    }

    /// первая найденная пара пересекающихся блоков
    pub fn overlapping(&self) -> Option<(&Block, &Block)>
    {
        let mut sorted: Vec<&Block> = self.blocks.iter().collect();
        sorted.sort_by_key(|block| (block.first, block.last));

        sorted
            .windows(2)
            .find(|pair| pair[0].overlaps(pair[1]))
            .map(|pair| (pair[0], pair[1]))
    }
}

/// диапазон блока: FIRST..LAST, одиночный кодпоинт записывается как FIRST
fn parse_range(record: &UcdRecord) -> Result<(u32, u32), SourceError>
{
    let range = record.field(0);

    let (first, last) = match range.split_once("..") {
        Some((first, last)) => (first.trim(), last.trim()),
        None => (range, range),
    };

    let malformed = || record.malformed(format!("некорректный диапазон: '{}'", range));

    let first = parse_codepoint(first).ok_or_else(malformed)?;
    let last = parse_codepoint(last).ok_or_else(malformed)?;

    if first > last {
        return Err(malformed());
    }

    Ok((first, last))
}
