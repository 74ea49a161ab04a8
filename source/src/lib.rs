pub mod properties;

mod blocks;
mod error;
mod name_aliases;
mod provider;
mod records;
mod unicode_data;

pub use blocks::Block;
pub use blocks::BlockIndex;

pub use error::SourceError;

pub use name_aliases::name_aliases;
pub use name_aliases::AliasCategory;
pub use name_aliases::NameAlias;

pub use provider::DirectoryProvider;
pub use provider::MemoryProvider;
pub use provider::UcdProvider;
pub use provider::UcdResource;

#[cfg(feature = "fetch")]
pub use provider::HttpProvider;
#[cfg(feature = "fetch")]
pub use provider::UCD_LATEST_URL;
#[cfg(feature = "fetch")]
pub use provider::UNICODE_LICENSE_URL;

pub use records::parse_codepoint;
pub use records::parse_records;
pub use records::UcdRecord;
pub use records::MAX_CODEPOINT;

pub use unicode_data::unicode_data;
pub use unicode_data::UnicodeDataRecord;
pub use unicode_data::UNICODE_DATA_FIELDS;
