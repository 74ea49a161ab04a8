use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// свойства кодпоинта, сохраняемые в таблице блока
/// источник - UCD, UnicodeData.txt: название, основная категория и класс канонического комбинирования
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRecord
{
    /// название символа
    pub name: String,
    /// основная категория, двухбуквенное обозначение (Lu, Mn, ...)
    pub general_category: String,
    /// класс канонического комбинирования (CCC)
    pub combining_class: u8,
}

/// таблица кодпоинтов блока
///
/// вариант выбирается один раз при подготовке таблицы:
///     - dense - последовательность, индекс - смещение кодпоинта относительно начала блока, пропуски - null
///     - sparse - словарь, ключ - смещение относительно начала блока (см. offset_key), хранятся только
///       заполненные позиции
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "layout", content = "data", rename_all = "lowercase")]
pub enum BlockTable
{
    Dense(Vec<Option<AttributeRecord>>),
    Sparse(BTreeMap<String, AttributeRecord>),
}

impl BlockTable
{
    /// свойства кодпоинта по смещению относительно начала блока
    #[inline]
    pub fn get(&self, offset: u32) -> Option<&AttributeRecord>
    {
        match self {
            Self::Dense(slots) => slots.get(offset as usize).and_then(Option::as_ref),
            Self::Sparse(entries) => entries.get(&offset_key(offset)),
        }
    }

    #[inline]
    pub fn is_sparse(&self) -> bool
    {
        matches!(self, Self::Sparse(_))
    }

    /// обозначение варианта хранения, совпадает с тегом в сериализованном виде
    pub fn layout(&self) -> &'static str
    {
        match self {
            Self::Dense(_) => "dense",
            Self::Sparse(_) => "sparse",
        }
    }

    /// количество заполненных позиций
    pub fn records(&self) -> usize
    {
        match self {
            Self::Dense(slots) => slots.iter().filter(|slot| slot.is_some()).count(),
            Self::Sparse(entries) => entries.len(),
        }
    }

    /// заполненные позиции таблицы в порядке возрастания смещения
    pub fn iter(&self) -> Box<dyn Iterator<Item = (u32, &AttributeRecord)> + '_>
    {
        match self {
            Self::Dense(slots) => Box::new(
                slots
                    .iter()
                    .enumerate()
                    .filter_map(|(offset, slot)| slot.as_ref().map(|record| (offset as u32, record))),
            ),
            Self::Sparse(entries) => {
                let mut sorted: Vec<(u32, &AttributeRecord)> = entries
                    .iter()
                    .filter_map(|(key, record)| u32::from_str_radix(key, 16).ok().map(|offset| (offset, record)))
                    .collect();

                sorted.sort_by_key(|(offset, _)| *offset);

                Box::new(sorted.into_iter())
            }
        }
    }
}

/// ключ sparse-таблицы: смещение в шестнадцатеричном виде, строчными буквами, без дополнения нулями
///
/// используется и при записи таблицы, и при поиске - другого способа получить ключ быть не должно
#[inline]
pub fn offset_key(offset: u32) -> String
{
    format!("{:x}", offset)
}
