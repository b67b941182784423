use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    /// Relative paths resolve against `base_path`; an empty base means the working directory.
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        tracing::debug!("Reading {}", full_path.display());
        let data = fs::read(full_path)?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FixletError;
    use tempfile::TempDir;

    #[test]
    fn test_read_file_relative_to_base() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fixlets.csv"), "a,b,c,d,e\n").unwrap();

        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
        assert_eq!(storage.read_file("fixlets.csv").unwrap(), b"a,b,c,d,e\n");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
        assert!(matches!(
            storage.read_file("missing.csv"),
            Err(FixletError::IoError(_))
        ));
    }
}
