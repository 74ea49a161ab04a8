use core::fmt;

use crate::{SourceError, UcdRecord};

/// тип альтернативного названия
/// берется из UCD: третья колонка NameAliases.txt, набор значений фиксирован
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AliasCategory
{
    /// исправление ошибки в названии
    Correction,
    /// название управляющего символа
    Control,
    /// широко используемое альтернативное название
    Alternate,
    /// название, документированное, но фактически не использовавшееся
    Figment,
    /// сокращение
    Abbreviation,
}

impl AliasCategory
{
    pub const ALL: [Self; 5] = [
        Self::Correction,
        Self::Control,
        Self::Alternate,
        Self::Figment,
        Self::Abbreviation,
    ];

    pub fn as_str(&self) -> &'static str
    {
        match self {
            Self::Correction => "correction",
            Self::Control => "control",
            Self::Alternate => "alternate",
            Self::Figment => "figment",
            Self::Abbreviation => "abbreviation",
        }
    }
}

impl fmt::Display for AliasCategory
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AliasCategory
{
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or(())
    }
}

/// альтернативное название кодпоинта
/// источник - UCD, NameAliases.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAlias
{
    pub code: u32,
    /// строка NameAliases.txt
    pub line: usize,
    pub alias: String,
    pub category: AliasCategory,
}

impl TryFrom<&UcdRecord> for NameAlias
{
    type Error = SourceError;

    fn try_from(record: &UcdRecord) -> Result<Self, Self::Error>
    {
        record.expect_fields(3)?;

        let code = record.codepoint(0)?;

        let category = AliasCategory::try_from(record.field(2)).map_err(|_| {
            record.integrity(format!("неизвестный тип альтернативного названия: '{}'", record.field(2)))
        })?;

        Ok(Self {
            code,
            line: record.line,
            alias: record.field(1).to_owned(),
            category,
        })
    }
}

/// разбор записей NameAliases.txt
pub fn name_aliases(records: &[UcdRecord]) -> Result<Vec<NameAlias>, SourceError>
{
    records.iter().map(NameAlias::try_from).collect()
}
