use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use unicode_blocks_source::{DirectoryProvider, UcdProvider};

/// параметры подготовки данных, передаются в compile явно
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerOptions
{
    /// читать NameAliases.txt и собирать таблицу альтернативных названий
    pub aliases: bool,
    /// разворачивать диапазоны UnicodeData.txt (<..., First> / <..., Last>)
    pub expand_ranges: bool,
    /// отбрасывать пустые позиции в конце блока до выбора варианта хранения
    pub trim_trailing_holes: bool,
    /// сохранять лицензию Unicode рядом с данными
    pub include_license: bool,
    /// выбирать вариант хранения блоков параллельно
    pub parallel: bool,
}

impl Default for CompilerOptions
{
    fn default() -> Self
    {
        Self {
            aliases: true,
            expand_ranges: false,
            trim_trailing_holes: false,
            include_license: true,
            parallel: false,
        }
    }
}

/// формат подготовленных данных
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat
{
    /// модули Typst: block-XXXX.typ, aliases.typ, index.typ
    #[default]
    Typst,
    /// JSON: block-XXXX.json, aliases.json, index.json
    Json,
}

/// откуда брать файлы UCD
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig
{
    /// локальный каталог с файлами UCD
    pub dir: Option<PathBuf>,
    /// адрес каталога UCD (требует feature "fetch")
    pub url: Option<String>,
    /// адрес лицензии Unicode (требует feature "fetch")
    pub license_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig
{
    /// каталог подготовленных данных, заменяется целиком
    pub dir: PathBuf,
    pub format: OutputFormat,
}

impl Default for OutputConfig
{
    fn default() -> Self
    {
        Self {
            dir: PathBuf::from("target/ucd"),
            format: OutputFormat::default(),
        }
    }
}

/// конфигурация сборки (TOML)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config
{
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub compiler: CompilerOptions,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError
{
    #[error("не удалось прочитать конфигурацию {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("некорректная конфигурация {}: {detail}", .path.display())]
    Parse { path: PathBuf, detail: String },

    #[error("не указан источник файлов UCD (source.dir или source.url)")]
    MissingSource,

    #[error("загрузка по сети недоступна: сборка без feature \"fetch\"")]
    FetchDisabled,
}

impl Config
{
    /// прочитать конфигурацию; отсутствующий файл - конфигурация по умолчанию
    pub fn load(path: &Path) -> Result<Self, ConfigError>
    {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "файл конфигурации не найден, используются значения по умолчанию");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::parse(&content).map_err(|detail| ConfigError::Parse {
            path: path.to_path_buf(),
            detail,
        })
    }

    pub fn parse(content: &str) -> Result<Self, String>
    {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}

impl SourceConfig
{
    /// источник файлов UCD: локальный каталог имеет приоритет над адресом
    pub fn provider(&self) -> Result<Box<dyn UcdProvider>, ConfigError>
    {
        if let Some(dir) = &self.dir {
            return Ok(Box::new(DirectoryProvider::new(dir)));
        }

        match &self.url {
            Some(url) => self.http_provider(url),
            None => Err(ConfigError::MissingSource),
        }
    }

    #[cfg(feature = "fetch")]
    fn http_provider(&self, url: &str) -> Result<Box<dyn UcdProvider>, ConfigError>
    {
        use unicode_blocks_source::{HttpProvider, UNICODE_LICENSE_URL};

        let license_url = self.license_url.as_deref().unwrap_or(UNICODE_LICENSE_URL);

        Ok(Box::new(HttpProvider::new(url, license_url)))
    }

    #[cfg(not(feature = "fetch"))]
    fn http_provider(&self, _: &str) -> Result<Box<dyn UcdProvider>, ConfigError>
    {
        Err(ConfigError::FetchDisabled)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn empty_config_is_default()
    {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn parse_full_config()
    {
        let config = Config::parse(
            r#"
            [source]
            dir = "ucd/15.1.0"

            [output]
            dir = "out/ucd"
            format = "json"

            [compiler]
            aliases = false
            trim_trailing_holes = true
            "#,
        )
        .unwrap();

        assert_eq!(config.source.dir, Some(PathBuf::from("ucd/15.1.0")));
        assert_eq!(config.output.dir, PathBuf::from("out/ucd"));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.compiler.aliases);
        assert!(config.compiler.trim_trailing_holes);
        assert!(config.compiler.include_license);
        assert!(!config.compiler.expand_ranges);
    }

    #[test]
    fn unknown_keys_are_rejected()
    {
        assert!(Config::parse("[compiler]\nsparse_threshold = 3\n").is_err());
    }

    #[test]
    fn missing_file_gives_default()
    {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn source_is_required()
    {
        assert!(matches!(
            SourceConfig::default().provider(),
            Err(ConfigError::MissingSource)
        ));
    }
}
