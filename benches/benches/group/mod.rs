#![allow(dead_code)]

use unicode_blocks_source::{DirectoryProvider, MemoryProvider, UcdProvider, UcdResource};

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// сокращенные файлы UCD
pub const UCD_DIR: &str = "./../test_data/ucd";

/// файлы UCD в памяти, чтобы не измерять чтение с диска
pub fn provider() -> MemoryProvider
{
    let dir = DirectoryProvider::new(UCD_DIR);
    let mut provider = MemoryProvider::new();

    for resource in [
        UcdResource::Blocks,
        UcdResource::UnicodeData,
        UcdResource::NameAliases,
        UcdResource::License,
    ] {
        provider = provider.with(resource, dir.read(resource).unwrap());
    }

    provider
}

/// кодпоинты для запросов: каждый блок тестовых данных и промежутки между блоками
pub fn probes() -> Vec<u32>
{
    (0 ..= 0x400)
        .chain(0xAC00 .. 0xAD00)
        .chain(0xFE70 ..= 0xFFFF)
        .chain(0x1F5F0 .. 0x1F660)
        .collect()
}
