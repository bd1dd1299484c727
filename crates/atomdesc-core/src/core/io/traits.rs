use crate::core::models::molecule::Molecule;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing multi-record molecular file formats.
///
/// Readers are streaming: each call to [`read_next`](MolecularFile::read_next)
/// consumes exactly one record from the underlying reader, so a whole file is
/// never held in memory. Implementors handle format-specific parsing and
/// serialization.
pub trait MolecularFile {
    /// The type of per-record metadata needed to write a record back faithfully.
    type Metadata;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads the next record from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    /// * `line_no` - Running count of lines consumed so far; updated in place
    ///   so that parse errors can report absolute line numbers.
    ///
    /// # Return
    ///
    /// Returns `Ok(None)` once the input is exhausted, otherwise the parsed
    /// molecule and its metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_next(
        reader: &mut impl BufRead,
        line_no: &mut usize,
    ) -> Result<Option<(Molecule, Self::Metadata)>, Self::Error>;

    /// Writes one molecule record to a writer.
    ///
    /// # Arguments
    ///
    /// * `molecule` - The molecule to write, including its current properties.
    /// * `metadata` - Metadata captured when the record was read, if any.
    /// * `writer` - The writer to output to.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(
        molecule: &Molecule,
        metadata: Option<&Self::Metadata>,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Returns a lazy iterator over all records of a reader.
    fn records<R: BufRead>(reader: R) -> Records<Self, R>
    where
        Self: Sized,
    {
        Records::new(reader)
    }

    /// Opens a file and returns a lazy iterator over its records.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    fn open_path<P: AsRef<Path>>(path: P) -> Result<Records<Self, BufReader<File>>, Self::Error>
    where
        Self: Sized,
    {
        let file = File::open(path)?;
        Ok(Self::records(BufReader::new(file)))
    }

    /// Reads every record of a file into memory.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered while opening or parsing.
    fn read_all_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<(Molecule, Self::Metadata)>, Self::Error>
    where
        Self: Sized,
    {
        Self::open_path(path)?.collect()
    }

    /// Writes a sequence of records to a file path, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_all_to_path<'a, P, I>(records: I, path: P) -> Result<(), Self::Error>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = (&'a Molecule, Option<&'a Self::Metadata>)>,
        Self::Metadata: 'a,
    {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for (molecule, metadata) in records {
            Self::write_to(molecule, metadata, &mut writer)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Lazy, finite iterator over the records of a [`MolecularFile`].
///
/// The iterator is fused after the first error: a malformed record ends the
/// stream, there is no resynchronisation to the next record.
pub struct Records<F: MolecularFile, R> {
    reader: R,
    line_no: usize,
    finished: bool,
    _format: std::marker::PhantomData<F>,
}

impl<F: MolecularFile, R: BufRead> Records<F, R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            finished: false,
            _format: std::marker::PhantomData,
        }
    }
}

impl<F: MolecularFile, R: BufRead> Iterator for Records<F, R> {
    type Item = Result<(Molecule, F::Metadata), F::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match F::read_next(&mut self.reader, &mut self.line_no) {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<F: MolecularFile, R: BufRead> std::iter::FusedIterator for Records<F, R> {}
