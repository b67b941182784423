pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, AppConfig};

pub use self::core::{loader::FixletLoader, session::Session, FixletStore};
pub use domain::model::{Fixlet, SortField};
pub use utils::error::{FixletError, Result};
