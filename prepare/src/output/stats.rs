use unicode_blocks::{AliasSet, BlockEntry, BlockTable};

/// статистика подготовленных данных
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats
{
    /// количество блоков
    pub blocks: usize,
    /// блоки, записанные массивом
    pub dense: usize,
    /// блоки, записанные словарем
    pub sparse: usize,
    /// кодпоинты со свойствами
    pub records: usize,
    /// кодпоинты блоков без записи в UnicodeData.txt
    pub holes: usize,
    /// пустые позиции, которые будут записаны явно (только dense-блоки)
    pub stored_holes: usize,
    /// кодпоинты с альтернативными названиями
    pub alias_codepoints: usize,
    /// всего альтернативных названий
    pub aliases: usize,
    /// записи, заменившие уже занятую позицию
    pub overwritten: usize,
}

impl BuildStats
{
    pub fn collect(blocks: &[BlockEntry], aliases: &AliasSet, overwritten: usize) -> Self
    {
        let mut stats = Self {
            blocks: blocks.len(),
            alias_codepoints: aliases.len(),
            aliases: aliases.values().map(|entry| entry.len()).sum(),
            overwritten,
            ..Default::default()
        };

        for block in blocks {
            let records = block.table.records();
            let size = (block.last - block.first) as usize + 1;

            stats.records += records;
            stats.holes += size - records;

            match &block.table {
                BlockTable::Dense(slots) => {
                    stats.dense += 1;
                    stats.stored_holes += slots.len() - records;
                }
                BlockTable::Sparse(_) => stats.sparse += 1,
            }
        }

        stats
    }

    /// вывести статистику в лог
    pub fn log(&self)
    {
        tracing::info!(
            blocks = self.blocks,
            dense = self.dense,
            sparse = self.sparse,
            records = self.records,
            holes = self.holes,
            stored_holes = self.stored_holes,
            alias_codepoints = self.alias_codepoints,
            aliases = self.aliases,
            overwritten = self.overwritten,
            "данные UCD подготовлены"
        );

        if self.overwritten > 0 {
            tracing::warn!(
                overwritten = self.overwritten,
                "в UnicodeData.txt есть повторяющиеся кодпоинты"
            );
        }
    }
}
