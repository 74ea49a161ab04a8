use unicode_blocks::{AliasSet, Query, UnicodeBlocks};
use unicode_blocks_source::{
    name_aliases, parse_records, unicode_data, BlockIndex, UcdProvider, UcdResource,
};

use crate::config::CompilerOptions;
use crate::encode::{check_aliases, extract};
use crate::error::Result;
use crate::output::stats::BuildStats;
use crate::tables::{aggregate_aliases, partition, prepare_tables};

/// подготовленные данные: таблицы блоков, альтернативные названия, лицензия
///
/// создается один раз за сборку и после записи больше не нужен
#[derive(Debug, Clone)]
pub struct CompiledArtifact
{
    pub tables: UnicodeBlocks,
    /// текст лицензии Unicode, если был запрошен
    pub license: Option<String>,
    pub stats: BuildStats,
}

impl CompiledArtifact
{
    /// информация о кодпоинте по подготовленным таблицам
    pub fn query(&self, code: u32) -> Query<'_>
    {
        self.tables.query(code)
    }
}

/// подготовить данные UCD
///
/// стадии выполняются последовательно, ничего не записывается: при любой ошибке результата нет
pub fn compile(provider: &dyn UcdProvider, options: &CompilerOptions) -> Result<CompiledArtifact>
{
    // блоки
    let index = BlockIndex::parse(&provider.read(UcdResource::Blocks)?)?;

    tracing::info!(blocks = index.len(), "прочитан список блоков");

    if let Some((a, b)) = index.overlapping() {
        tracing::warn!(
            first = a.name.as_str(),
            second = b.name.as_str(),
            "блоки пересекаются, кодпоинт будет отнесен к первому в списке"
        );
    }

    // свойства кодпоинтов
    let records = parse_records(
        UcdResource::UnicodeData,
        &provider.read(UcdResource::UnicodeData)?,
    );
    let codepoints = unicode_data(&records, options.expand_ranges)?;
    let extracted = extract(&index, &codepoints)?;

    // альтернативные названия
    let aliases = match options.aliases {
        true => {
            let records = parse_records(
                UcdResource::NameAliases,
                &provider.read(UcdResource::NameAliases)?,
            );
            let aliases = name_aliases(&records)?;
            check_aliases(&index, &aliases)?;

            aggregate_aliases(&aliases)
        }
        false => AliasSet::new(),
    };

    let license = match options.include_license {
        true => Some(provider.read(UcdResource::License)?),
        false => None,
    };

    // таблицы блоков
    let partition = partition(&index, extracted);
    let blocks = prepare_tables(
        &index,
        partition.slots,
        options.trim_trailing_holes,
        options.parallel,
    );

    let stats = BuildStats::collect(&blocks, &aliases, partition.overwritten);
    stats.log();

    Ok(CompiledArtifact {
        tables: UnicodeBlocks::new(blocks, aliases),
        license,
        stats,
    })
}
