//! # rfbjson: fixed-width .rfb records to JSON and SQLite
//!
//! Legacy tax-filing files (`.rfb`) hold fixed-width records identified by a
//! leading tag such as `R10`. This crate finds those tag lines, decodes each
//! record through a positional field layout, writes the records as JSON, and
//! loads JSON record files into a SQLite table.
//!
//! ## Pipeline
//!
//! 1. [`source`] reads a directory of Latin-1 files into lines.
//! 2. [`locate`] returns the indices of the tag lines.
//! 3. [`FieldExtractor`] applies a [`Layout`] at each index.
//! 4. [`serialization`] writes `<stem>.json` next to each input.
//! 5. [`db::RecordStore`] imports the JSON files; [`view`] prints the table.
//!
//! ## Example layout
//!
//! ```yaml
//! name: R10
//! fields:
//!   - { name: Tipo, line: 0, start: 0, width: 3, kind: plain_text }
//!   - { name: CNPJ, line: 0, start: 3, width: 14, kind: registration_id }
//!   - { name: Dia, line: 0, start: 47, width: 2, kind: numeric, rule: blank_when_all_zeros }
//! ```

// Core modules
pub mod error;
pub mod layout;
pub mod locator;
pub mod rules;
pub mod extraction;

// Input, output and storage around the core
pub mod source;
pub mod serialization;
pub mod convert;
pub mod db;
pub mod view;

// Re-export key types
pub use error::{LayoutError, SerializationError, SourceError, StoreError};
pub use layout::{FieldKind, FieldRule, FieldSpec, Layout};
pub use locator::locate;
pub use extraction::{DecodedRecord, FieldExtractor};
pub use convert::{convert_directory, ConversionOptions, ConversionReport, FileStatus};
pub use db::{RecordStore, StoredRecord};
