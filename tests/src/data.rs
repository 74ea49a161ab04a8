use unicode_blocks_prepare::{compile, CompiledArtifact, CompilerOptions};
use unicode_blocks_source::{DirectoryProvider, MemoryProvider, UcdResource};

/// сокращенные файлы UCD для тестов
pub const UCD_DIR: &str = "./../test_data/ucd";

/// подготовить данные из тестовых файлов UCD
pub fn compile_test_data(options: &CompilerOptions) -> CompiledArtifact
{
    compile(&DirectoryProvider::new(UCD_DIR), options).unwrap()
}

/// Blocks.txt из списка диапазонов: блоки называются "Block 0", "Block 1", ...
pub fn blocks_txt(ranges: &[(u32, u32)]) -> String
{
    ranges
        .iter()
        .enumerate()
        .map(|(i, (first, last))| format!("{:04X}..{:04X}; Block {}\n", first, last, i))
        .collect()
}

/// UnicodeData.txt: по записи на каждый кодпоинт
pub fn unicode_data_txt(codes: &[u32]) -> String
{
    codes
        .iter()
        .map(|code| format!("{:04X};CHARACTER {:04X};So;0;ON;;;;;N;;;;;\n", code, code))
        .collect()
}

pub fn provider(blocks: String, unicode_data: String) -> MemoryProvider
{
    MemoryProvider::new()
        .with(UcdResource::Blocks, blocks)
        .with(UcdResource::UnicodeData, unicode_data)
        .with(UcdResource::NameAliases, "")
        .with(UcdResource::License, "")
}
