use std::collections::BTreeMap;

use unicode_blocks::{offset_key, AttributeRecord, BlockTable};

/// выбор варианта хранения: sparse, если пустых позиций больше половины
///
/// словарь хранит ключ для каждой записи, поэтому выигрывает только при заполненности меньше половины
#[inline]
pub fn is_sparse(holes: usize, size: usize) -> bool
{
    holes * 2 > size
}

/// количество пустых позиций
#[inline]
pub fn count_holes(slots: &[Option<AttributeRecord>]) -> usize
{
    slots.iter().filter(|slot| slot.is_none()).count()
}

/// отбросить пустые позиции в конце блока
pub fn trim_trailing_holes(slots: &mut Vec<Option<AttributeRecord>>)
{
    let len = slots
        .iter()
        .rposition(Option::is_some)
        .map_or(0, |last| last + 1);

    slots.truncate(len);
}

/// таблица блока в выбранном варианте хранения
pub fn build_table(slots: Vec<Option<AttributeRecord>>) -> BlockTable
{
    match is_sparse(count_holes(&slots), slots.len()) {
        true => BlockTable::Sparse(
            slots
                .into_iter()
                .enumerate()
                .filter_map(|(offset, slot)| slot.map(|record| (offset_key(offset as u32), record)))
                .collect::<BTreeMap<String, AttributeRecord>>(),
        ),
        false => BlockTable::Dense(slots),
    }
}
