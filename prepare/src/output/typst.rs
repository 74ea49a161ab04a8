use std::fmt::Write as _;
use std::path::Path;

use unicode_blocks::{codepoint_key, BlockEntry, BlockTable};

use super::format::{typst_aliases, typst_record, typst_string};
use super::{write_file, Emitter};
use crate::compile::CompiledArtifact;
use crate::error::Result;

/// модуль альтернативных названий
pub const ALIASES_MODULE: &str = "aliases.typ";
/// модуль с функцией get-data
pub const INDEX_MODULE: &str = "index.typ";

/// модуль таблицы блока
pub fn block_module(id: &str) -> String
{
    format!("block-{}.typ", id)
}

/// запись в виде модулей Typst
///
/// ```text
/// block-XXXX.typ  - #let data = (...): массив для dense-блоков, словарь для sparse
/// aliases.typ     - #let data = (...): словарь кодпоинт -> 5 массивов названий
/// index.typ       - get-data(code) -> (название блока, идентификатор, свойства, названия)
/// ```
pub struct TypstEmitter;

impl Emitter for TypstEmitter
{
    fn emit(&self, artifact: &CompiledArtifact, dir: &Path) -> Result<()>
    {
        for block in artifact.tables.blocks() {
            write_file(&dir.join(block_module(&block.id)), &block_source(&block.table))?;
        }

        write_file(&dir.join(ALIASES_MODULE), &aliases_source(artifact))?;
        write_file(&dir.join(INDEX_MODULE), &index_source(artifact.tables.blocks()))?;

        Ok(())
    }
}

/// содержимое модуля блока
pub fn block_source(table: &BlockTable) -> String
{
    let mut output = String::new();

    match table {
        BlockTable::Dense(slots) if slots.is_empty() => output.push_str("#let data = ()\n"),
        BlockTable::Sparse(entries) if entries.is_empty() => output.push_str("#let data = (:)\n"),
        BlockTable::Dense(slots) => {
            output.push_str("#let data = (\n");
            for slot in slots {
                let _ = writeln!(output, "  {},", typst_record(slot.as_ref()));
            }
            output.push_str(")\n");
        }
        BlockTable::Sparse(_) => {
            output.push_str("#let data = (\n");
            // по возрастанию смещения, а не в порядке строковых ключей
            for (offset, record) in table.iter() {
                let _ = writeln!(
                    output,
                    "  {}: {},",
                    typst_string(&unicode_blocks::offset_key(offset)),
                    typst_record(Some(record))
                );
            }
            output.push_str(")\n");
        }
    }

    output
}

/// содержимое модуля альтернативных названий
fn aliases_source(artifact: &CompiledArtifact) -> String
{
    let aliases = artifact.tables.aliases();

    if aliases.is_empty() {
        return "#let data = (:)\n".to_owned();
    }

    let mut entries: Vec<(u32, String)> = aliases
        .iter()
        .filter_map(|(key, entry)| {
            u32::from_str_radix(key, 16)
                .ok()
                .map(|code| (code, typst_aliases(entry)))
        })
        .collect();

    entries.sort_by_key(|(code, _)| *code);

    let mut output = String::from("#let data = (\n");

    for (code, entry) in entries {
        let _ = writeln!(output, "  {}: {},", typst_string(&codepoint_key(code)), entry);
    }

    output.push_str(")\n");
    output
}

/// модуль index.typ: цепочка проверок диапазонов блоков в порядке списка
pub fn index_source(blocks: &[BlockEntry]) -> String
{
    const EMPTY_ALIASES: &str = "((), (), (), (), ())";

    let mut output = String::new();

    let _ = writeln!(output, "#import {}", typst_string(ALIASES_MODULE));
    output.push('\n');
    output.push_str("#let get-data(code) = {\n");
    let _ = writeln!(
        output,
        "  let names = aliases.data.at(str(code, base: 16), default: {})",
        EMPTY_ALIASES
    );
    output.push_str("  ");

    for block in blocks {
        let module = format!("block-{}", block.id);

        // ключ sparse-таблицы - смещение строчными шестнадцатеричными цифрами, как и при записи
        let key = match block.table.is_sparse() {
            true => format!("str(code - 0x{:x}, base: 16)", block.first),
            false => format!("code - 0x{:x}", block.first),
        };

        let _ = writeln!(
            output,
            "if 0x{:x} <= code and code <= 0x{:x} {{",
            block.first, block.last
        );
        let _ = writeln!(output, "    import {}", typst_string(&block_module(&block.id)));
        let _ = writeln!(
            output,
            "    ({}, {}, {}.data.at({}, default: ()), names)",
            typst_string(&block.name),
            typst_string(&block.id),
            module,
            key
        );
        output.push_str("  } else ");
    }

    let _ = writeln!(output, "{{\n    (none, none, (), {})\n  }}", EMPTY_ALIASES);
    output.push_str("}\n");

    output
}
