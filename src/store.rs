//! Ordered collections of entries persisted to flat CSV files.
//!
//! Every mutation loads the whole file, changes the collection in memory and
//! writes the whole collection back, so the file on disk always holds the
//! result of the last write.

use std::{
    fs::File,
    io,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::Error;

/// An entry that can be stored as one row of a CSV file.
pub trait CsvEntry: Sized + Clone + PartialEq {
    /// The row as it appears in the CSV file.
    type Record: Serialize + DeserializeOwned;

    /// The header row of the CSV file, in column order.
    const HEADERS: &'static [&'static str];

    /// Convert a row read from the CSV file into an entry.
    fn from_record(record: Self::Record) -> Result<Self, Error>;

    /// Convert the entry into a row for the CSV file.
    fn to_record(&self) -> Self::Record;

    /// The error to return when a delete does not match any entry.
    fn missing_entry_error() -> Error;
}

/// An ordered collection of entries stored in the CSV file at `path`.
///
/// Entries are identified by their position in the collection.
#[derive(Debug)]
pub struct CsvStore<E> {
    path: PathBuf,
    entry_type: PhantomData<fn() -> E>,
}

impl<E> Clone for CsvStore<E> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            entry_type: PhantomData,
        }
    }
}

impl<E: CsvEntry> CsvStore<E> {
    /// Create a store backed by the CSV file at `path`.
    ///
    /// The file does not need to exist, it is created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entry_type: PhantomData,
        }
    }

    /// The path to the CSV file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all entries in the order they were stored.
    ///
    /// Returns an empty collection if the file does not exist yet.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or a row cannot be parsed.
    pub fn load_all(&self) -> Result<Vec<E>, Error> {
        read_records::<E::Record>(&self.path)?
            .into_iter()
            .map(E::from_record)
            .collect()
    }

    /// Add `entry` to the end of the collection and persist the collection.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or written.
    pub fn append(&self, entry: E) -> Result<(), Error> {
        let mut entries = self.load_all()?;
        entries.push(entry);
        self.save_all(&entries)
    }

    /// Remove the entry at `index` and persist the remaining entries in order.
    ///
    /// Returns the removed entry.
    ///
    /// # Errors
    /// Returns [CsvEntry::missing_entry_error] if `index` is out of range, or
    /// an error if the file cannot be read or written.
    pub fn delete_at(&self, index: usize) -> Result<E, Error> {
        let mut entries = self.load_all()?;

        if index >= entries.len() {
            tracing::error!(
                "tried to delete entry {index} from {} which has {} entries",
                self.path.display(),
                entries.len()
            );
            return Err(E::missing_entry_error());
        }

        let removed = entries.remove(index);
        self.save_all(&entries)?;

        Ok(removed)
    }

    /// Remove the entry at `index` only if it is equal to `expected`.
    ///
    /// Use this to delete the entry a user was shown: if the file changed since
    /// the entries were displayed, the entry at `index` may be a different one.
    ///
    /// # Errors
    /// Returns [CsvEntry::missing_entry_error] if `index` is out of range or
    /// the entry at `index` is not `expected`, or an error if the file cannot
    /// be read or written.
    pub fn delete_matching(&self, index: usize, expected: &E) -> Result<(), Error> {
        let mut entries = self.load_all()?;

        match entries.get(index) {
            Some(entry) if entry == expected => {}
            _ => {
                tracing::warn!(
                    "entry {index} in {} does not match the entry to delete",
                    self.path.display()
                );
                return Err(E::missing_entry_error());
            }
        }

        entries.remove(index);
        self.save_all(&entries)
    }

    /// Replace the contents of the file with `entries`.
    ///
    /// The header row is always written, even if `entries` is empty.
    pub(crate) fn save_all(&self, entries: &[E]) -> Result<(), Error> {
        let records: Vec<E::Record> = entries.iter().map(E::to_record).collect();
        write_records(&self.path, E::HEADERS, &records)
    }
}

/// Read every row of the CSV file at `path`.
///
/// Returns an empty vector if the file does not exist.
pub(crate) fn read_records<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>, Error> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("{} does not exist yet, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(error) => return Err(error.into()),
    };

    let records = csv::Reader::from_reader(file)
        .deserialize()
        .collect::<Result<Vec<R>, csv::Error>>()?;

    tracing::debug!("read {} rows from {}", records.len(), path.display());

    Ok(records)
}

/// Write `headers` followed by one row per record to the CSV file at `path`,
/// replacing its contents.
pub(crate) fn write_records<R: Serialize>(
    path: &Path,
    headers: &[&str],
    records: &[R],
) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(headers)?;

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;

    tracing::debug!("wrote {} rows to {}", records.len(), path.display());

    Ok(())
}
