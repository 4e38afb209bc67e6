// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Flat-file form store.
//!
//! The whole dataset is one JSON document on disk: a pretty-printed array of
//! record objects. Every save re-reads the file, appends in memory and
//! rewrites it in full; every lookup re-reads the file and scans from the
//! front. There is no locking and no atomic rename, so concurrent writers
//! race and the last write wins.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::Result;
use crate::record::FormRecord;

/// Storage interface for saved forms.
///
/// Callers depend on this trait, never on the backing file. A locking or
/// database-backed store can replace [`FlatFileStore`] behind it without
/// changing any caller.
pub trait FormStore {
    /// Append one record to the store.
    fn append(&self, record: &FormRecord) -> Result<()>;

    /// Return the first (oldest) record whose `form_id` equals `form_id`,
    /// or `None` if no record matches.
    fn find(&self, form_id: &str) -> Result<Option<FormRecord>>;
}

/// `FormStore` backed by a single JSON file.
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    /// Open the store at `path`, creating the parent directory and seeding
    /// an empty list when the file does not exist yet. An existing file is
    /// left untouched.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        if !path.exists() {
            fs::write(&path, "[]")?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the entire store as a generic JSON array. Entries stay untyped
    /// here so a malformed record cannot block access to the others; only
    /// the entry actually returned to a caller must decode as a record.
    fn read_all(&self) -> Result<Vec<Value>> {
        let raw = fs::read_to_string(&self.path)?;
        let forms = serde_json::from_str(&raw)?;
        Ok(forms)
    }

    fn write_all(&self, forms: &[Value]) -> Result<()> {
        let raw = serde_json::to_string_pretty(forms)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl FormStore for FlatFileStore {
    fn append(&self, record: &FormRecord) -> Result<()> {
        let mut forms = self.read_all()?;
        forms.push(serde_json::to_value(record)?);
        self.write_all(&forms)
    }

    fn find(&self, form_id: &str) -> Result<Option<FormRecord>> {
        let forms = self.read_all()?;
        for entry in forms {
            if entry.get("form_id").and_then(Value::as_str) == Some(form_id) {
                let record: FormRecord = serde_json::from_value(entry)?;
                return Ok(Some(record));
            }
        }
        Ok(None)
    }
}
