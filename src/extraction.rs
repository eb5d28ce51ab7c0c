//! Fixed-width field extraction.
//!
//! Applies a [`Layout`] at each located tag line and produces one
//! [`DecodedRecord`] per occurrence. Extraction never fails on data: a field
//! whose line lies past the end of the input is left out of the record, and a
//! line shorter than the field yields whatever characters it has.

use indexmap::IndexMap;
use tracing::debug;

use crate::layout::Layout;
use crate::rules;

/// Field name to normalized value, in layout order.
pub type DecodedRecord = IndexMap<String, String>;

/// Decodes tagged records with a fixed layout.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    layout: Layout,
}

impl FieldExtractor {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Decode one record per tag index, in the order given.
    ///
    /// # Example
    /// ```ignore
    /// let extractor = FieldExtractor::new(Layout::r10()?);
    /// let indices = locate(&lines, "R10");
    /// let records = extractor.extract(&lines, &indices);
    /// ```
    pub fn extract<S: AsRef<str>>(&self, lines: &[S], tag_indices: &[usize]) -> Vec<DecodedRecord> {
        let records: Vec<_> = tag_indices
            .iter()
            .map(|&idx| self.extract_at(lines, idx))
            .collect();

        debug!(
            layout = self.layout.name(),
            records = records.len(),
            "decoded tagged records"
        );
        records
    }

    /// Decode the record whose tag line is `lines[tag_index]`.
    pub fn extract_at<S: AsRef<str>>(&self, lines: &[S], tag_index: usize) -> DecodedRecord {
        let mut record = DecodedRecord::with_capacity(self.layout.fields().len());

        for field in self.layout.fields() {
            let line = match tag_index
                .checked_add(field.line_offset)
                .and_then(|target| lines.get(target))
            {
                Some(line) => line.as_ref(),
                None => continue,
            };

            let trimmed = column_slice(line, field.start, field.width).trim();
            record.insert(field.name.clone(), rules::normalize(field, trimmed));
        }

        record
    }
}

/// Characters `[start, start + width)` of `line`, clipped to its length.
fn column_slice(line: &str, start: usize, width: usize) -> &str {
    let mut offsets = line
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(line.len()));

    let begin = match offsets.nth(start) {
        Some(offset) => offset,
        None => return "",
    };
    let end = match width {
        0 => begin,
        _ => offsets.nth(width - 1).unwrap_or(line.len()),
    };

    &line[begin..end]
}
