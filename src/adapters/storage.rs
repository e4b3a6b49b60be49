use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::model::SignupRecord;
use crate::domain::ports::SignupStore;
use crate::utils::error::Result;

/// File-backed fallback store: the full record sequence lives as a JSON
/// array in `<base_path>/<namespace>.json`. A missing file reads as an
/// empty sequence.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_path: PathBuf,
    namespace: String,
}

impl JsonFileStore {
    pub fn new(base_path: impl AsRef<Path>, namespace: &str) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            namespace: namespace.to_string(),
        }
    }

    fn store_file(&self) -> PathBuf {
        self.base_path.join(format!("{}.json", self.namespace))
    }
}

impl SignupStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<SignupRecord>> {
        let path = self.store_file();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(path)?;
        let records = serde_json::from_str(&raw)?;
        Ok(records)
    }

    // The backing value is the whole array, so append is read-modify-write.
    async fn append(&self, record: SignupRecord) -> Result<()> {
        let mut records = self.load().await?;
        records.push(record);

        fs::create_dir_all(&self.base_path)?;
        fs::write(self.store_file(), serde_json::to_string(&records)?)?;
        Ok(())
    }
}
