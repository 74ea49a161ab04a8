use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::SourceError;

/// файлы UCD, используемые при подготовке данных
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UcdResource
{
    /// диапазоны блоков
    Blocks,
    /// свойства кодпоинтов
    UnicodeData,
    /// альтернативные названия
    NameAliases,
    /// лицензия Unicode, копируется рядом с подготовленными данными
    License,
}

impl UcdResource
{
    pub fn file_name(&self) -> &'static str
    {
        match self {
            Self::Blocks => "Blocks.txt",
            Self::UnicodeData => "UnicodeData.txt",
            Self::NameAliases => "NameAliases.txt",
            Self::License => "license.txt",
        }
    }
}

impl fmt::Display for UcdResource
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.file_name())
    }
}

/// источник файлов UCD
///
/// чтение синхронное, без повторных попыток: любая ошибка - SourceError::Unavailable
pub trait UcdProvider
{
    fn read(&self, resource: UcdResource) -> Result<String, SourceError>;
}

/// файлы UCD в локальном каталоге
#[derive(Debug, Clone)]
pub struct DirectoryProvider
{
    root: PathBuf,
}

impl DirectoryProvider
{
    pub fn new(root: impl Into<PathBuf>) -> Self
    {
        Self { root: root.into() }
    }
}

impl UcdProvider for DirectoryProvider
{
    fn read(&self, resource: UcdResource) -> Result<String, SourceError>
    {
        let path = self.root.join(resource.file_name());

        tracing::debug!(path = %path.display(), "чтение файла UCD");

        fs::read_to_string(&path).map_err(|e| SourceError::Unavailable {
            resource,
            detail: format!("{}: {}", path.display(), e),
        })
    }
}

/// файлы UCD, уже находящиеся в памяти
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider
{
    resources: HashMap<UcdResource, String>,
}

impl MemoryProvider
{
    pub fn new() -> Self
    {
        Self::default()
    }

    pub fn with(mut self, resource: UcdResource, content: impl Into<String>) -> Self
    {
        self.resources.insert(resource, content.into());
        self
    }
}

impl UcdProvider for MemoryProvider
{
    fn read(&self, resource: UcdResource) -> Result<String, SourceError>
    {
        self.resources
            .get(&resource)
            .cloned()
            .ok_or_else(|| SourceError::Unavailable {
                resource,
                detail: "отсутствует".to_owned(),
            })
    }
}

/// адрес последней версии UCD
#[cfg(feature = "fetch")]
pub const UCD_LATEST_URL: &str = "https://www.unicode.org/Public/UCD/latest/ucd/";
/// адрес лицензии Unicode
#[cfg(feature = "fetch")]
pub const UNICODE_LICENSE_URL: &str = "https://www.unicode.org/license.txt";

/// загрузка файлов UCD по HTTP
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct HttpProvider
{
    base_url: String,
    license_url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "fetch")]
impl HttpProvider
{
    pub fn new(base_url: impl Into<String>, license_url: impl Into<String>) -> Self
    {
        Self {
            base_url: base_url.into(),
            license_url: license_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn latest() -> Self
    {
        Self::new(UCD_LATEST_URL, UNICODE_LICENSE_URL)
    }

    fn url(&self, resource: UcdResource) -> String
    {
        match resource {
            UcdResource::License => self.license_url.clone(),
            _ => format!("{}/{}", self.base_url.trim_end_matches('/'), resource.file_name()),
        }
    }
}

#[cfg(feature = "fetch")]
impl UcdProvider for HttpProvider
{
    fn read(&self, resource: UcdResource) -> Result<String, SourceError>
    {
        let url = self.url(resource);
        let unavailable = |detail: String| SourceError::Unavailable { resource, detail };

        tracing::info!(%url, "загрузка файла UCD");

        self.client
            .get(&url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| unavailable(format!("{}: {}", url, e)))
    }
}
