use unicode_blocks::AttributeRecord;
use unicode_blocks_source::{BlockIndex, NameAlias, UcdResource, UnicodeDataRecord};

use crate::error::{PrepareError, Result};

/// кодпоинт с найденным блоком и свойствами, которые будут записаны в таблицу блока
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted
{
    /// позиция блока в BlockIndex
    pub block: usize,
    pub code: u32,
    pub record: AttributeRecord,
}

/// свойства кодпоинта для таблицы: название, категория, CCC
#[inline]
pub fn encode_record(codepoint: &UnicodeDataRecord) -> AttributeRecord
{
    AttributeRecord {
        name: codepoint.name.clone(),
        general_category: codepoint.gc.clone(),
        combining_class: u8::from(codepoint.ccc),
    }
}

/// найти блок для каждого кодпоинта
///
/// кодпоинт вне всех блоков прерывает сборку сразу: без него таблицы будут неполными
pub fn extract(index: &BlockIndex, codepoints: &[UnicodeDataRecord]) -> Result<Vec<Extracted>>
{
    let mut extracted = Vec::with_capacity(codepoints.len());

    for codepoint in codepoints {
        let (block, _) = index
            .find(codepoint.code)
            .ok_or(PrepareError::OutsideBlocks {
                resource: UcdResource::UnicodeData,
                line: codepoint.line,
                code: codepoint.code,
            })?;

        extracted.push(Extracted {
            block,
            code: codepoint.code,
            record: encode_record(codepoint),
        });
    }

    tracing::info!(codepoints = extracted.len(), "свойства кодпоинтов извлечены");

    Ok(extracted)
}

/// проверить, что каждое альтернативное название относится к кодпоинту внутри какого-либо блока
pub fn check_aliases(index: &BlockIndex, aliases: &[NameAlias]) -> Result<()>
{
    match aliases.iter().find(|alias| index.find(alias.code).is_none()) {
        Some(alias) => Err(PrepareError::OutsideBlocks {
            resource: UcdResource::NameAliases,
            line: alias.line,
            code: alias.code,
        }),
        None => Ok(()),
    }
}
