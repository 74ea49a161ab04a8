mod aliases;
mod layout;

pub use aliases::aggregate_aliases;
pub use layout::build_table;
pub use layout::count_holes;
pub use layout::is_sparse;
pub use layout::trim_trailing_holes;

use rayon::prelude::*;
use unicode_blocks::{AttributeRecord, BlockEntry, BlockTable};
use unicode_blocks_source::BlockIndex;

use crate::encode::Extracted;

/// содержимое блока до выбора варианта хранения: позиция - смещение относительно начала блока
pub type Slots = Vec<Option<AttributeRecord>>;

/// результат распределения кодпоинтов по блокам
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition
{
    /// содержимое каждого блока, в порядке BlockIndex
    pub slots: Vec<Slots>,
    /// количество записей, перезаписавших уже занятую позицию
    pub overwritten: usize,
}

/// распределить кодпоинты по блокам
///
/// для каждого блока выделяется last - first + 1 пустых позиций. повторная запись в занятую позицию
/// заменяет предыдущую (в UCD кодпоинты уникальны, поэтому это признак испорченных данных)
pub fn partition(index: &BlockIndex, extracted: Vec<Extracted>) -> Partition
{
    let mut slots: Vec<Slots> = index.iter().map(|block| vec![None; block.size()]).collect();
    let mut overwritten = 0;

    for Extracted {
        block,
        code,
        record,
    } in extracted
    {
        let offset = (code - index.blocks()[block].first) as usize;
        let slot = &mut slots[block][offset];

        if let Some(previous) = slot.replace(record) {
            tracing::warn!(
                code = format!("U+{:04X}", code).as_str(),
                previous = previous.name.as_str(),
                "кодпоинт встречается повторно, предыдущая запись заменена"
            );
            overwritten += 1;
        }
    }

    Partition { slots, overwritten }
}

/// выбрать вариант хранения для каждого блока
///
/// блоки обрабатываются независимо, поэтому при parallel = true порядок вычислений не влияет на результат
pub fn prepare_tables(index: &BlockIndex, slots: Vec<Slots>, trim: bool, parallel: bool) -> Vec<BlockEntry>
{
    let prepare = |mut slots: Slots| -> BlockTable {
        if trim {
            trim_trailing_holes(&mut slots);
        }

        build_table(slots)
    };

    let tables: Vec<BlockTable> = match parallel {
        true => slots.into_par_iter().map(prepare).collect(),
        false => slots.into_iter().map(prepare).collect(),
    };

    index
        .iter()
        .zip(tables)
        .map(|(block, table)| {
            tracing::debug!(
                id = block.id.as_str(),
                name = block.name.as_str(),
                layout = table.layout(),
                records = table.records(),
                size = block.size(),
                "вариант хранения блока"
            );

            BlockEntry {
                id: block.id.clone(),
                first: block.first,
                last: block.last,
                name: block.name.clone(),
                table,
            }
        })
        .collect()
}
