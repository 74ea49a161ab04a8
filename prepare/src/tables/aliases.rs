use unicode_blocks::{codepoint_key, AliasSet, Aliases};
use unicode_blocks_source::{AliasCategory, NameAlias};

/// список названий нужной категории
#[inline]
fn category_mut(aliases: &mut Aliases, category: AliasCategory) -> &mut Vec<String>
{
    match category {
        AliasCategory::Correction => &mut aliases.correction,
        AliasCategory::Control => &mut aliases.control,
        AliasCategory::Alternate => &mut aliases.alternate,
        AliasCategory::Figment => &mut aliases.figment,
        AliasCategory::Abbreviation => &mut aliases.abbreviation,
    }
}

/// таблица альтернативных названий: кодпоинт -> названия по категориям в порядке исходного файла
///
/// кодпоинты без альтернативных названий в таблицу не попадают
pub fn aggregate_aliases(records: &[NameAlias]) -> AliasSet
{
    let mut set = AliasSet::new();

    for record in records {
        let aliases = set.entry(codepoint_key(record.code)).or_default();

        category_mut(aliases, record.category).push(record.alias.clone());
    }

    tracing::info!(
        records = records.len(),
        codepoints = set.len(),
        "альтернативные названия собраны"
    );

    set
}
