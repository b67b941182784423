pub mod loader;
pub mod session;
pub mod store;

pub use crate::domain::model::{Fixlet, SortField};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
pub use store::FixletStore;
