use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{
    Error,
    error::Result,
    core::contact::Contact,
};

pub const DEFAULT_DATA_FILE: &str = "phonebook.json";

/// The JSON file holding the whole contact collection.
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Reads the collection. A missing file is an empty collection; content
    /// that does not parse, or that repeats or zeroes an id, is reported as
    /// `Error::MalformedStorage`.
    pub fn load(&self) -> Result<Vec<Contact>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(v) => v,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Data file {} does not exist yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(Error::Io(format!(
                "Reading data file {} error: {e}", self.path.display()
            ))),
        };

        let contacts = serde_json::from_str::<Vec<Contact>>(&data).map_err(|e| {
            Error::MalformedStorage(format!(
                "Data file {} is empty or broken: {e}", self.path.display()
            ))
        })?;

        let mut ids = HashSet::new();
        for contact in contacts.iter() {
            if !contact.is_valid() {
                return Err(Error::MalformedStorage(format!(
                    "Data file {} holds an invalid contact with id {}",
                    self.path.display(), contact.id()
                )));
            }
            if !ids.insert(contact.id()) {
                return Err(Error::MalformedStorage(format!(
                    "Data file {} repeats contact id {}",
                    self.path.display(), contact.id()
                )));
            }
        }

        info!("Loaded {} contacts from {}", contacts.len(), self.path.display());
        Ok(contacts)
    }

    /// Same as `load`, but any failure is logged and yields an empty collection.
    pub fn load_or_empty(&self) -> Vec<Contact> {
        self.load().unwrap_or_else(|e| {
            warn!("{e}, starting with an empty phonebook");
            Vec::new()
        })
    }

    /// Replaces the file content with `contacts`. The data goes to a sibling
    /// temporary file first and is renamed over the target when complete.
    pub fn save(&self, contacts: &[Contact]) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        contacts.serialize(&mut ser).map_err(|e| {
            Error::Argument(format!("Serializing contacts error: {e}"))
        })?;
        buf.push(b'\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e|
                    Error::Io(format!("Creating directory path {} error: {e}", parent.display()))
                )?;
            }
        }

        let tmp = self.tmp_path();
        let written = File::create(&tmp)
            .and_then(|mut fp| {
                fp.write_all(&buf)?;
                fp.sync_all()
            })
            .and_then(|_| fs::rename(&tmp, &self.path));

        if let Err(e) = written {
            _ = fs::remove_file(&tmp);
            return Err(Error::Io(format!(
                "Writing data file {} error: {e}", self.path.display()
            )));
        }

        info!("Saved {} contacts to {}", contacts.len(), self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name()
            .map(|v| v.to_os_string())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
