use crate::{SourceError, UcdResource};

/// последний кодпоинт Unicode
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// строка файла UCD, разбитая на поля
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UcdRecord
{
    /// файл, из которого взята запись
    pub resource: UcdResource,
    /// номер строки (с 1)
    pub line: usize,
    /// поля без окружающих пробелов
    pub fields: Vec<String>,
}

/// разбор файла UCD: пустые строки и комментарии (#) пропускаются, остальные строки делятся по `;`
pub fn parse_records(resource: UcdResource, text: &str) -> Vec<UcdRecord>
{
    let mut records = vec![];

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        records.push(UcdRecord {
            resource,
            line: i + 1,
            fields: line.split(';').map(|field| field.trim().to_owned()).collect(),
        });
    }

    records
}

impl UcdRecord
{
    /// проверить количество полей
    pub fn expect_fields(&self, count: usize) -> Result<(), SourceError>
    {
        match self.fields.len() == count {
            true => Ok(()),
            false => Err(self.malformed(format!(
                "ожидается полей: {}, получено: {}",
                count,
                self.fields.len()
            ))),
        }
    }

    /// значение поля, для отсутствующего поля - пустая строка
    #[inline]
    pub fn field(&self, index: usize) -> &str
    {
        self.fields.get(index).map_or("", String::as_str)
    }

    /// поле как кодпоинт в шестнадцатеричной записи
    pub fn codepoint(&self, index: usize) -> Result<u32, SourceError>
    {
        parse_codepoint(self.field(index)).ok_or_else(|| {
            self.malformed(format!("некорректный кодпоинт: '{}'", self.field(index)))
        })
    }

    pub fn malformed(&self, detail: impl Into<String>) -> SourceError
    {
        SourceError::Malformed {
            resource: self.resource,
            line: self.line,
            detail: detail.into(),
        }
    }

    pub fn integrity(&self, detail: impl Into<String>) -> SourceError
    {
        SourceError::DataIntegrity {
            resource: self.resource,
            line: self.line,
            detail: detail.into(),
        }
    }
}

/// кодпоинт в шестнадцатеричной записи, без префикса
pub fn parse_codepoint(value: &str) -> Option<u32>
{
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(value, 16)
        .ok()
        .filter(|&code| code <= MAX_CODEPOINT)
}
