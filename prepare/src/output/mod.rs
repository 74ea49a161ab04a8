use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::compile::CompiledArtifact;
use crate::config::OutputFormat;
use crate::error::{PrepareError, Result};

pub use json::JsonEmitter;
pub use typst::TypstEmitter;

mod format;
mod json;
pub mod stats;
mod typst;

/// файл лицензии в каталоге подготовленных данных
pub const LICENSE_FILE: &str = "LICENSE";

/// запись подготовленных данных в определенном формате
pub trait Emitter
{
    /// записать таблицы блоков, таблицу альтернативных названий и описание диспетчеризации в каталог
    fn emit(&self, artifact: &CompiledArtifact, dir: &Path) -> Result<()>;
}

/// запись в формате, выбранном в конфигурации
pub fn emitter(format: OutputFormat) -> Box<dyn Emitter>
{
    match format {
        OutputFormat::Typst => Box::new(TypstEmitter),
        OutputFormat::Json => Box::new(JsonEmitter),
    }
}

/// записать подготовленные данные в каталог target
///
/// данные пишутся во временный каталог рядом с target и заменяют target только после успешной записи:
/// при ошибке target остается в прежнем состоянии
pub fn write_artifact(artifact: &CompiledArtifact, emitter: &dyn Emitter, target: &Path) -> Result<()>
{
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent).map_err(|e| PrepareError::output(parent, e))?;

    let staging = tempfile::Builder::new()
        .prefix(".ucd-staging-")
        .tempdir_in(parent)
        .map_err(|e| PrepareError::output(parent, e))?;

    emitter.emit(artifact, staging.path())?;

    if let Some(license) = &artifact.license {
        write_file(&staging.path().join(LICENSE_FILE), license)?;
    }

    // прежний каталог убирается в сторону и удаляется только после того, как новый занял его место
    let previous = match target.exists() {
        true => {
            let previous = tempfile::Builder::new()
                .prefix(".ucd-previous-")
                .tempdir_in(parent)
                .map_err(|e| PrepareError::output(parent, e))?;
            let backup = previous.path().join("ucd");

            fs::rename(target, &backup).map_err(|e| PrepareError::output(target, e))?;

            Some((previous, backup))
        }
        false => None,
    };

    if let Err(e) = fs::rename(staging.path(), target) {
        return Err(match previous {
            Some((previous, backup)) => restore_previous(previous, backup, target, e),
            None => PrepareError::output(target, e),
        });
    }

    tracing::info!(output = %target.display(), "данные записаны");

    // staging и previous удаляются при выходе из области видимости
    Ok(())
}

/// вернуть прежний каталог на место после неудачной замены
///
/// если вернуть не удалось, резервная копия остается на диске и ее путь попадает в ошибку
fn restore_previous(previous: TempDir, backup: PathBuf, target: &Path, error: io::Error) -> PrepareError
{
    match fs::rename(&backup, target) {
        Ok(()) => PrepareError::output(target, error),
        Err(restore) => {
            // прежние данные не должны удаляться вместе с временным каталогом
            let _ = previous.into_path();

            tracing::error!(
                output = %target.display(),
                backup = %backup.display(),
                error = %restore,
                "не удалось вернуть прежние данные на место"
            );

            PrepareError::Restore {
                target: target.to_path_buf(),
                backup,
                source: error,
            }
        }
    }
}

/// записать текстовый файл
pub(crate) fn write_file(path: &Path, content: &str) -> Result<()>
{
    fs::write(path, content).map_err(|e| PrepareError::output(path, e))
}
