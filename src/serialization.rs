//! JSON record files.
//!
//! Each converted input file becomes a JSON array of objects, one per
//! decoded record, keys in layout order, indented by four spaces. Non-ASCII
//! characters are written as UTF-8, not escaped.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::SerializationError;
use crate::extraction::DecodedRecord;

/// Extension of converted record files.
pub const JSON_EXTENSION: &str = "json";

/// A record read back from JSON. A `null` value reads as `None`.
pub type LoadedRecord = IndexMap<String, Option<String>>;

/// Path of the JSON file written for `source`: same directory and stem.
pub fn output_path_for(source: &Path) -> PathBuf {
    source.with_extension(JSON_EXTENSION)
}

/// Serialize records as an indented JSON array.
pub fn write_records<W: Write>(writer: W, records: &[DecodedRecord]) -> Result<(), SerializationError> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    records.serialize(&mut serializer)?;
    Ok(())
}

/// Write records to `path`, replacing any existing file.
pub fn write_records_file(path: &Path, records: &[DecodedRecord]) -> Result<(), SerializationError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_records(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Read a JSON record file.
pub fn read_records_file(path: &Path) -> Result<Vec<LoadedRecord>, SerializationError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
