//! FileBackend: one file per key inside a data directory
//!
//! ## Layout
//!
//! ```text
//! <data_dir>/
//!   memory-phonenumbers-contacts.val
//!   memory-phonenumbers-country.val
//! ```
//!
//! Writes go to `<key>.val.tmp`, are fsynced, then renamed over the target,
//! so a crash leaves either the old or the new value, never a torn one.
//! A writer lock serializes writers within the process; other processes are
//! not coordinated.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use phonerecall_core::{Error, Result};

use crate::backend::KvBackend;

const VALUE_EXTENSION: &str = "val";
const TEMP_EXTENSION: &str = "val.tmp";

/// File-per-key backend
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileBackend {
    /// Open (creating if needed) a backend rooted at `dir`
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        tracing::debug!(
            target: "phonerecall::storage",
            dir = %dir.display(),
            "Opened file backend"
        );
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    /// Directory holding the value files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, VALUE_EXTENSION)))
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'));
    if valid {
        Ok(())
    } else {
        Err(Error::storage(format!("invalid storage key '{}'", key)))
    }
}

fn write_atomic(tmp_path: &Path, path: &Path, value: &str) -> io::Result<()> {
    let mut file = fs::File::create(tmp_path)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()?;
    drop(file);
    fs::rename(tmp_path, path)
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension(TEMP_EXTENSION);
        let _guard = self.write_lock.lock();

        // Atomic write: temp + fsync + rename
        if let Err(e) = write_atomic(&tmp_path, &path, value) {
            tracing::warn!(
                target: "phonerecall::storage",
                key,
                temp_path = %tmp_path.display(),
                error = %e,
                "Write failed, cleaning up temp file"
            );
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        tracing::debug!(
            target: "phonerecall::storage",
            key,
            bytes = value.len(),
            "Wrote value file"
        );
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        let _guard = self.write_lock.lock();
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
