pub mod config;
pub mod encode;
pub mod output;
pub mod tables;

mod compile;
mod error;

pub use compile::compile;
pub use compile::CompiledArtifact;

pub use config::CompilerOptions;
pub use config::Config;
pub use config::ConfigError;
pub use config::OutputFormat;

pub use error::PrepareError;
pub use error::Result;

pub use output::emitter;
pub use output::stats::BuildStats;
pub use output::write_artifact;
pub use output::Emitter;
pub use output::JsonEmitter;
pub use output::TypstEmitter;
