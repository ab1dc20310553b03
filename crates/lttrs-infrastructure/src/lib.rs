pub mod config_service;
pub mod dto;
pub mod file_word_source;
pub mod memory_session_repository;
pub mod paths;
pub mod storage;
pub mod toml_session_repository;

pub use crate::config_service::ConfigService;
pub use crate::file_word_source::FileWordSource;
pub use crate::memory_session_repository::InMemorySessionRepository;
pub use crate::paths::LttrsPaths;
pub use crate::toml_session_repository::TomlSessionRepository;
