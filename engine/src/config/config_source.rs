use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub trait ConfigSource {
    /// `Ok(None)` when there is nothing stored yet.
    fn read(&self) -> Result<Option<String>, ConfigError>;
    fn write(&self, content: &str) -> Result<(), ConfigError>;
}

pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl ConfigSource for FileConfigSource {
    fn read(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                path: self.display_path(),
                source,
            }),
        }
    }

    fn write(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(&self.path, content).map_err(|source| ConfigError::Write {
            path: self.display_path(),
            source,
        })
    }
}
