use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use unicode_blocks_prepare::{compile, emitter, write_artifact, Config, OutputFormat, Result};

/// подготовка таблиц блоков Unicode из файлов UCD
#[derive(Parser, Debug)]
#[command(name = "unicode-blocks-prepare", version)]
struct Args
{
    /// файл конфигурации (TOML)
    #[arg(long, default_value = "ucd.toml")]
    config: PathBuf,

    /// каталог с Blocks.txt, UnicodeData.txt, NameAliases.txt
    #[arg(long, env = "UCD_SOURCE_DIR")]
    source_dir: Option<PathBuf>,

    /// адрес каталога UCD
    #[arg(long, conflicts_with = "source_dir")]
    source_url: Option<String>,

    /// каталог подготовленных данных
    #[arg(long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// отбрасывать пустые позиции в конце блоков
    #[arg(long)]
    trim_trailing_holes: bool,

    /// разворачивать диапазоны UnicodeData.txt
    #[arg(long)]
    expand_ranges: bool,

    /// не собирать альтернативные названия
    #[arg(long)]
    no_aliases: bool,

    /// не сохранять лицензию Unicode
    #[arg(long)]
    no_license: bool,

    /// выбирать вариант хранения блоков параллельно
    #[arg(long)]
    parallel: bool,
}

impl Args
{
    /// параметры командной строки имеют приоритет над файлом конфигурации
    fn apply(&self, config: &mut Config)
    {
        if let Some(dir) = &self.source_dir {
            config.source.dir = Some(dir.clone());
            config.source.url = None;
        }

        if let Some(url) = &self.source_url {
            config.source.url = Some(url.clone());
            config.source.dir = None;
        }

        if let Some(output) = &self.output {
            config.output.dir = output.clone();
        }

        if let Some(format) = self.format {
            config.output.format = format;
        }

        let compiler = &mut config.compiler;

        compiler.trim_trailing_holes |= self.trim_trailing_holes;
        compiler.expand_ranges |= self.expand_ranges;
        compiler.aliases &= !self.no_aliases;
        compiler.include_license &= !self.no_license;
        compiler.parallel |= self.parallel;
    }
}

fn run(args: &Args) -> Result<()>
{
    let mut config = Config::load(&args.config)?;
    args.apply(&mut config);

    tracing::info!(
        source = ?config.source,
        output = %config.output.dir.display(),
        format = ?config.output.format,
        "подготовка данных UCD"
    );

    let provider = config.source.provider()?;
    let artifact = compile(provider.as_ref(), &config.compiler)?;

    write_artifact(
        &artifact,
        emitter(config.output.format).as_ref(),
        &config.output.dir,
    )
}

fn main() -> ExitCode
{
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("unicode_blocks_prepare=info,unicode_blocks_source=info")),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "сборка прервана");
            ExitCode::FAILURE
        }
    }
}
