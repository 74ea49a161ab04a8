use std::path::PathBuf;

use unicode_blocks_source::{SourceError, UcdResource};

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, PrepareError>;

/// ошибки подготовки данных, любая из них прерывает сборку целиком
#[derive(Debug, thiserror::Error)]
pub enum PrepareError
{
    /// чтение или разбор файлов UCD
    #[error(transparent)]
    Source(#[from] SourceError),

    /// кодпоинт из UnicodeData.txt или NameAliases.txt не входит ни в один блок
    #[error("{resource}, строка {line}: кодпоинт U+{code:04X} не входит ни в один блок")]
    OutsideBlocks {
        resource: UcdResource,
        line: usize,
        code: u32,
    },

    /// запись подготовленных данных
    #[error("не удалось записать {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    /// новые данные не записаны, прежние остались в резервной копии
    #[error(
        "не удалось записать {}: {source}; прежние данные сохранены в {}",
        .target.display(),
        .backup.display()
    )]
    Restore {
        target: PathBuf,
        backup: PathBuf,
        source: std::io::Error,
    },

    #[error("ошибка сериализации: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PrepareError
{
    /// нарушение целостности данных: кодпоинт вне блоков или неизвестный тип альтернативного названия
    pub fn is_data_integrity(&self) -> bool
    {
        match self {
            Self::OutsideBlocks { .. } => true,
            Self::Source(e) => e.is_data_integrity(),
            _ => false,
        }
    }

    pub fn is_malformed(&self) -> bool
    {
        matches!(self, Self::Source(e) if e.is_malformed())
    }

    pub(crate) fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self
    {
        Self::Output {
            path: path.into(),
            source,
        }
    }
}
