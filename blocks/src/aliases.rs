use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// альтернативные названия кодпоинта, сгруппированные по типу
/// источник - UCD, NameAliases.txt; порядок внутри списка соответствует порядку в исходном файле
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aliases
{
    /// исправления ошибок в названии
    pub correction: Vec<String>,
    /// названия управляющих символов
    pub control: Vec<String>,
    /// широко используемые альтернативные названия
    pub alternate: Vec<String>,
    /// названия, документированные, но фактически не использовавшиеся
    pub figment: Vec<String>,
    /// сокращения
    pub abbreviation: Vec<String>,
}

/// пустой набор, возвращается для кодпоинтов без альтернативных названий
static EMPTY: Aliases = Aliases::EMPTY;

impl Aliases
{
    pub const EMPTY: Self = Self {
        correction: Vec::new(),
        control: Vec::new(),
        alternate: Vec::new(),
        figment: Vec::new(),
        abbreviation: Vec::new(),
    };

    /// ссылка на пустой набор со статическим временем жизни
    #[inline]
    pub fn empty() -> &'static Self
    {
        &EMPTY
    }

    pub fn is_empty(&self) -> bool
    {
        self.correction.is_empty()
            && self.control.is_empty()
            && self.alternate.is_empty()
            && self.figment.is_empty()
            && self.abbreviation.is_empty()
    }

    /// общее количество названий во всех категориях
    pub fn len(&self) -> usize
    {
        self.correction.len()
            + self.control.len()
            + self.alternate.len()
            + self.figment.len()
            + self.abbreviation.len()
    }
}

/// таблица альтернативных названий, ключ - кодпоинт (см. codepoint_key)
pub type AliasSet = BTreeMap<String, Aliases>;

/// ключ таблицы альтернативных названий: кодпоинт в шестнадцатеричном виде, строчными буквами, без
/// дополнения нулями - то же правило, что и для ключей sparse-таблиц
#[inline]
pub fn codepoint_key(code: u32) -> String
{
    format!("{:x}", code)
}
