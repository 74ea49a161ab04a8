use crate::UcdResource;

/// ошибки чтения и разбора файлов UCD
///
/// любая из них прерывает подготовку данных целиком
#[derive(Debug, thiserror::Error)]
pub enum SourceError
{
    /// файл UCD не удалось получить (чтение с диска, загрузка по сети)
    #[error("{resource}: источник недоступен: {detail}")]
    Unavailable {
        resource: UcdResource,
        detail: String,
    },

    /// некорректная запись: количество полей, кодпоинт или число не разбираются
    #[error("{resource}, строка {line}: некорректная запись: {detail}")]
    Malformed {
        resource: UcdResource,
        line: usize,
        detail: String,
    },

    /// запись ссылается на неизвестное значение (например, тип альтернативного названия)
    #[error("{resource}, строка {line}: нарушение целостности данных: {detail}")]
    DataIntegrity {
        resource: UcdResource,
        line: usize,
        detail: String,
    },
}

impl SourceError
{
    pub fn is_data_integrity(&self) -> bool
    {
        matches!(self, Self::DataIntegrity { .. })
    }

    pub fn is_malformed(&self) -> bool
    {
        matches!(self, Self::Malformed { .. })
    }
}
