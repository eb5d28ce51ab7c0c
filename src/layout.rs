//! Positional field layouts.
//!
//! A layout is the ordered list of fixed-width fields decoded for each tag
//! occurrence. Layouts are YAML data so a new legacy record shape only needs
//! a new file:
//!
//! ```yaml
//! name: R10
//! fields:
//!   - { name: Tipo, line: 0, start: 0, width: 3, kind: plain_text }
//!   - { name: Dia, line: 0, start: 47, width: 2, kind: numeric, rule: blank_when_all_zeros }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Reference layout for R10 debit records, embedded at build time.
pub const R10_LAYOUT_YAML: &str = include_str!("../config/layouts/r10.yaml");

/// How a field's trimmed slice is turned into its output value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[serde(alias = "X")]
    PlainText,
    #[serde(alias = "N")]
    Numeric,
    #[serde(alias = "DATA2")]
    Date,
    #[serde(alias = "R+")]
    Currency,
    /// CNPJ, normally formatted `NN.NNN.NNN/NNNN-NN`.
    #[serde(alias = "CNPJ")]
    RegistrationId,
}

/// Business rule attached to one field by name in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRule {
    /// A value made only of `'0'` means "day not applicable" and becomes `""`.
    BlankWhenAllZeros,
}

/// One fixed-width field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,

    /// Line relative to the tag line; 0 is the tag line itself.
    #[serde(default, rename = "line")]
    pub line_offset: usize,

    /// 0-based character column.
    pub start: usize,

    pub width: usize,

    pub kind: FieldKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<FieldRule>,
}

impl FieldSpec {
    pub fn new(
        name: impl Into<String>,
        line_offset: usize,
        start: usize,
        width: usize,
        kind: FieldKind,
    ) -> Self {
        Self {
            name: name.into(),
            line_offset,
            start,
            width,
            kind,
            rule: None,
        }
    }

    pub fn with_rule(mut self, rule: FieldRule) -> Self {
        self.rule = Some(rule);
        self
    }
}

#[derive(Debug, Deserialize)]
struct LayoutFile {
    name: String,
    fields: Vec<FieldSpec>,
}

/// Validated, immutable field layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    name: String,
    fields: Vec<FieldSpec>,
}

impl Layout {
    /// Build a layout, rejecting empty layouts, unnamed or duplicate fields,
    /// and zero-width fields.
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Result<Self, LayoutError> {
        let name = name.into();
        if fields.is_empty() {
            return Err(LayoutError::Empty(name));
        }

        let mut seen = HashSet::new();
        for (position, field) in fields.iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(LayoutError::UnnamedField(position));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(LayoutError::DuplicateField(field.name.clone()));
            }
            if field.width == 0 {
                return Err(LayoutError::ZeroWidth(field.name.clone()));
            }
        }

        Ok(Self { name, fields })
    }

    /// Parse and validate a layout from YAML text.
    pub fn from_yaml(contents: &str) -> Result<Self, LayoutError> {
        let file: LayoutFile = serde_yaml::from_str(contents)?;
        Self::new(file.name, file.fields)
    }

    /// Load a layout from a YAML file.
    ///
    /// # Example
    /// ```ignore
    /// let layout = Layout::load_from_file("config/layouts/r10.yaml")?;
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    /// The embedded R10 debit record layout.
    pub fn r10() -> Result<Self, LayoutError> {
        Self::from_yaml(R10_LAYOUT_YAML)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in decode order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}
