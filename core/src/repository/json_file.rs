use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;

/// A JSON array persisted as a single pretty-printed file. Every read loads
/// the whole file and every write replaces it.
#[derive(Clone, Debug)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn open(base_dir: &Path, file_name: &str) -> Result<Self> {
        fs::create_dir_all(base_dir)?;
        let path = base_dir.join(file_name);

        if !path.exists() {
            debug!(path = %path.display(), "initializing empty store");
            let mut writer = BufWriter::new(File::create(&path)?);
            writer.write_all(b"[]")?;
            writer.flush()?;
        }

        Ok(JsonFile { path })
    }

    pub fn read<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let reader = BufReader::new(File::open(&self.path)?);
        let items = serde_json::from_reader(reader)?;
        Ok(items)
    }

    pub fn write<T: Serialize>(&self, items: &[T]) -> Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, items)?;
        writer.flush()?;
        debug!(path = %self.path.display(), count = items.len(), "store written");
        Ok(())
    }
}
