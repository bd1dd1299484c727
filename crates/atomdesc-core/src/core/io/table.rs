use crate::core::models::record::{AtomRecord, MoleculeRecord};
use crate::core::utils::format::{format_decimal, render_or};
use std::io::{self, Write};
use thiserror::Error;

/// Columns that precede the descriptor columns in every atom table.
pub const FIXED_COLUMNS: [&str; 8] = [
    "Title",
    "Index",
    "Symbol",
    "AtomType",
    "longestMaxTopDistInMolecule",
    "highestMaxTopDistInMatrixRow",
    "diffSPAN3",
    "relSPAN4",
];

/// Quoting policy for table fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableQuoting {
    /// Fields are written as-is, even when they contain delimiters.
    #[default]
    Never,
    /// Fields are quoted only when they contain a delimiter, quote or newline.
    Necessary,
}

impl From<TableQuoting> for csv::QuoteStyle {
    fn from(quoting: TableQuoting) -> Self {
        match quoting {
            TableQuoting::Never => csv::QuoteStyle::Never,
            TableQuoting::Necessary => csv::QuoteStyle::Necessary,
        }
    }
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("CSV error")]
    Csv(#[from] csv::Error),
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error(
        "Row for atom {index} of '{title}' has {found} descriptor values, expected {expected}"
    )]
    ColumnMismatch {
        title: String,
        index: usize,
        found: usize,
        expected: usize,
    },
}

/// Writes one row per non-hydrogen atom record.
///
/// The header is written on construction, so a table with no rows still
/// carries its full header.
pub struct AtomTableWriter<W: Write> {
    inner: csv::Writer<W>,
    descriptor_count: usize,
    na_marker: String,
    rows: usize,
}

impl<W: Write> AtomTableWriter<W> {
    pub fn new<S: AsRef<str>>(
        writer: W,
        descriptor_names: &[S],
        quoting: TableQuoting,
        na_marker: impl Into<String>,
    ) -> Result<Self, TableError> {
        let mut inner = csv::WriterBuilder::new()
            .quote_style(quoting.into())
            .from_writer(writer);
        inner.write_record(header(descriptor_names))?;
        Ok(Self {
            inner,
            descriptor_count: descriptor_names.len(),
            na_marker: na_marker.into(),
            rows: 0,
        })
    }

    /// Writes a single atom row. Hydrogen records are skipped.
    pub fn write_atom(&mut self, atom: &AtomRecord) -> Result<bool, TableError> {
        if atom.is_hydrogen() {
            return Ok(false);
        }
        if atom.descriptors.len() != self.descriptor_count {
            return Err(TableError::ColumnMismatch {
                title: atom.title.clone(),
                index: atom.index,
                found: atom.descriptors.len(),
                expected: self.descriptor_count,
            });
        }

        let marker = self.na_marker.as_str();
        let mut row: Vec<String> = Vec::with_capacity(FIXED_COLUMNS.len() + self.descriptor_count);
        row.push(atom.title.clone());
        row.push(atom.index.to_string());
        row.push(atom.symbol.clone());
        row.push(atom.atom_type.clone().unwrap_or_default());
        row.push(render_or(atom.longest_max_top_dist_in_molecule, marker));
        row.push(render_or(atom.highest_max_top_dist_in_matrix_row, marker));
        row.push(render_or(atom.diff_span3(), marker));
        row.push(render_or(atom.rel_span4().map(format_decimal), marker));
        row.extend(atom.descriptors.iter().map(|(_, value)| value.clone()));

        self.inner.write_record(&row)?;
        self.rows += 1;
        Ok(true)
    }

    /// Writes the rows of every non-hydrogen atom of a molecule and returns
    /// how many were written.
    pub fn write_molecule(&mut self, record: &MoleculeRecord) -> Result<usize, TableError> {
        let mut written = 0;
        for atom in record.heavy_atoms() {
            if self.write_atom(atom)? {
                written += 1;
            }
        }
        Ok(written)
    }

    /// Number of data rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes the table and returns the underlying writer.
    pub fn finish(mut self) -> Result<W, TableError> {
        self.inner.flush()?;
        self.inner
            .into_inner()
            .map_err(|e| TableError::Io(e.into_error()))
    }
}

/// Full header: fixed columns followed by descriptor names in catalog order.
pub fn header<S: AsRef<str>>(descriptor_names: &[S]) -> Vec<String> {
    FIXED_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .chain(descriptor_names.iter().map(|n| n.as_ref().to_string()))
        .collect()
}
