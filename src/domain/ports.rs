use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

/// Typed view of whatever configuration source drives the loader.
pub trait ConfigProvider {
    fn file_path(&self) -> &str;
    fn delimiter(&self) -> u8;
    fn trim_fields(&self) -> bool;
}
