//! Flat-file storage backend (CSV tables + JSON document)
//!
//! **Whole-File Design** (Load-Mutate-Save Pattern):
//! - Every operation reads the complete backing file into memory
//! - Saves truncate and rewrite the complete file
//! - No caching between operations: the file is the source of truth
//!
//! Loading is forgiving. A missing, empty or unreadable file yields an empty
//! collection, and a row that fails to decode is skipped. Each such event is
//! reported as a [`LoadWarning`] (and logged with `tracing::warn!`) instead
//! of an error, so a caller can tell "nothing there yet" apart from a failed
//! write.
//!
//! Writes that would rewrite or rely on the enrollment document use
//! [`load_intact_document`] instead, which turns a damaged load into
//! [`Error::DamagedData`] so a skipped record is never dropped from disk or
//! overlooked by a reference check.
//!
//! Saving is strict: any I/O or encoder failure is returned as
//! [`Error::PersistenceFailure`]. There is no atomic replace, so a crash in
//! the middle of a save can leave a truncated file behind; the next load
//! reports it as a warning.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{Error, Result};

/// Non-fatal condition encountered while loading a backing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The file does not exist yet; it is created on the next save.
    Missing {
        /// Backing file path
        path: PathBuf,
    },
    /// The file exists but holds no data (not even a header).
    Empty {
        /// Backing file path
        path: PathBuf,
    },
    /// The file could not be read or parsed as a whole.
    Corrupt {
        /// Backing file path
        path: PathBuf,
        /// Reader or parser message
        reason: String,
    },
    /// One record could not be decoded and was left out.
    SkippedRecord {
        /// Backing file path
        path: PathBuf,
        /// 1-based record number (data row or array element)
        entry: usize,
        /// Decoder message
        reason: String,
    },
}

impl LoadWarning {
    /// True for warnings that mean records may be missing from the load
    /// (`Corrupt`, `SkippedRecord`). A missing or empty file is not damage.
    #[must_use]
    pub const fn is_damage(&self) -> bool {
        matches!(self, Self::Corrupt { .. } | Self::SkippedRecord { .. })
    }

    /// Path of the file the warning refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Missing { path }
            | Self::Empty { path }
            | Self::Corrupt { path, .. }
            | Self::SkippedRecord { path, .. } => path,
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { path } => {
                write!(f, "{} not found, it will be created on save", path.display())
            }
            Self::Empty { path } => write!(f, "{} is empty", path.display()),
            Self::Corrupt { path, reason } => {
                write!(f, "{} is unreadable: {reason}", path.display())
            }
            Self::SkippedRecord {
                path,
                entry,
                reason,
            } => write!(f, "{} record {entry} skipped: {reason}", path.display()),
        }
    }
}

/// Records decoded from a backing file plus the warnings raised on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<T> {
    records: Vec<T>,
    warnings: Vec<LoadWarning>,
}

impl<T> Loaded<T> {
    fn warned(warning: LoadWarning) -> Self {
        report(&warning);
        Self {
            records: Vec::new(),
            warnings: vec![warning],
        }
    }

    /// Decoded records in file order.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Warnings raised while loading.
    #[must_use]
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// True when the load raised no warnings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// First warning that marks the load as damaged, if any.
    #[must_use]
    pub fn damage(&self) -> Option<&LoadWarning> {
        self.warnings.iter().find(|warning| warning.is_damage())
    }

    /// Drop the warnings and keep the records.
    #[must_use]
    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

fn report(warning: &LoadWarning) {
    warn!(path = %warning.path().display(), "{warning}");
}

fn open_for_load(path: &Path) -> std::result::Result<File, LoadWarning> {
    File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            LoadWarning::Missing {
                path: path.to_path_buf(),
            }
        } else {
            LoadWarning::Corrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        }
    })
}

/// Load a header-first CSV table.
///
/// Columns are matched to fields by header name. Field text is kept as
/// written, surrounding whitespace included. A row that fails to decode (wrong field count, a credit value
/// that is not a non-negative integer, ...) is skipped with a
/// [`LoadWarning::SkippedRecord`]; the remaining rows still load.
pub fn load_table<T: DeserializeOwned>(path: &Path) -> Loaded<T> {
    let file = match open_for_load(path) {
        Ok(file) => file,
        Err(warning) => return Loaded::warned(warning),
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::None)
        .from_reader(file);

    match reader.headers() {
        Ok(headers) if headers.is_empty() => {
            return Loaded::warned(LoadWarning::Empty {
                path: path.to_path_buf(),
            })
        }
        Ok(_) => {}
        Err(e) => {
            return Loaded::warned(LoadWarning::Corrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    }

    let mut loaded = Loaded {
        records: Vec::new(),
        warnings: Vec::new(),
    };
    for (index, row) in reader.deserialize::<T>().enumerate() {
        match row {
            Ok(record) => loaded.records.push(record),
            Err(e) => {
                let warning = LoadWarning::SkippedRecord {
                    path: path.to_path_buf(),
                    entry: index + 1,
                    reason: e.to_string(),
                };
                report(&warning);
                loaded.warnings.push(warning);
            }
        }
    }

    loaded
}

/// Rewrite a CSV table: the header row, then one row per record.
///
/// The header is written even when `records` is empty.
///
/// # Errors
///
/// Returns [`Error::PersistenceFailure`] if the file (or its directory)
/// cannot be created or written.
pub fn save_table<T: Serialize>(path: &Path, headers: &[&str], records: &[T]) -> Result<()> {
    ensure_parent(path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| Error::persistence(path, e))?;

    writer
        .write_record(headers)
        .map_err(|e| Error::persistence(path, e))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| Error::persistence(path, e))?;
    }
    writer.flush().map_err(|e| Error::persistence(path, e))?;

    debug!(path = %path.display(), records = records.len(), "saved table");
    Ok(())
}

/// Load a JSON document holding one array of records.
///
/// A document that is not a JSON array yields an empty collection with a
/// [`LoadWarning::Corrupt`]. Array elements that do not decode are skipped
/// one by one.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Loaded<T> {
    let mut file = match open_for_load(path) {
        Ok(file) => file,
        Err(warning) => return Loaded::warned(warning),
    };

    let mut text = String::new();
    if let Err(e) = file.read_to_string(&mut text) {
        return Loaded::warned(LoadWarning::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        });
    }

    if text.trim().is_empty() {
        return Loaded::warned(LoadWarning::Empty {
            path: path.to_path_buf(),
        });
    }

    let items: Vec<serde_json::Value> = match serde_json::from_str(&text) {
        Ok(items) => items,
        Err(e) => {
            return Loaded::warned(LoadWarning::Corrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    };

    let mut loaded = Loaded {
        records: Vec::with_capacity(items.len()),
        warnings: Vec::new(),
    };
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value(item) {
            Ok(record) => loaded.records.push(record),
            Err(e) => {
                let warning = LoadWarning::SkippedRecord {
                    path: path.to_path_buf(),
                    entry: index + 1,
                    reason: e.to_string(),
                };
                report(&warning);
                loaded.warnings.push(warning);
            }
        }
    }

    loaded
}

/// Load a JSON document that is about to be rewritten or relied upon.
///
/// A missing or empty document is an empty collection, as in
/// [`load_document`].
///
/// # Errors
///
/// Returns [`Error::DamagedData`] if the document could not be read or
/// parsed, or if any element was skipped.
pub fn load_intact_document<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let loaded = load_document(path);
    if let Some(warning) = loaded.damage() {
        return Err(Error::DamagedData {
            path: path.to_path_buf(),
            reason: warning.to_string(),
        });
    }
    Ok(loaded.into_records())
}

/// Replace a JSON document with the pretty-printed array of `records`.
///
/// # Errors
///
/// Returns [`Error::PersistenceFailure`] if the file (or its directory)
/// cannot be created or written.
pub fn save_document<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    ensure_parent(path)?;

    let file = File::create(path).map_err(|e| Error::persistence(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| Error::persistence(path, e))?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|e| Error::persistence(path, e))?;

    debug!(path = %path.display(), records = records.len(), "saved document");
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| Error::persistence(dir, e))
        }
        _ => Ok(()),
    }
}
