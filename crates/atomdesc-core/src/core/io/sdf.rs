use crate::core::io::traits::MolecularFile;
use crate::core::models::atom::Atom;
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::BondOrder;
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

const RECORD_TERMINATOR: &str = "$$$$";
const PROPERTY_BLOCK_END: &str = "M  END";
const CHARGE_PROPERTY: &str = "M  CHG";
const MAX_CHARGE_ENTRIES_PER_LINE: usize = 8;
const PROGRAM_LINE: &str = "  atomdesc";

/// Raw connection-table lines of one SD record, header through `M  END`.
///
/// Writing a record with its metadata re-emits these lines verbatim, so the
/// structure part of an annotated output is byte-identical to the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SdfMetadata {
    pub ctab: Vec<String>,
    /// 1-based line number of the record's first header line.
    pub first_line: usize,
}

#[derive(Debug, Error)]
pub enum SdfError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: SdfParseErrorKind },
    #[error("Unsupported content on line {line}: {detail}")]
    Unsupported { line: usize, detail: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SdfParseErrorKind {
    #[error("record ended before the connection table was complete")]
    TruncatedRecord,
    #[error("invalid {field} count (value: '{value}')")]
    InvalidCount { field: &'static str, value: String },
    #[error("invalid {axis} coordinate (value: '{value}')")]
    InvalidCoordinate { axis: char, value: String },
    #[error("atom line has no element symbol")]
    MissingSymbol,
    #[error("invalid charge code '{value}'")]
    InvalidChargeCode { value: String },
    #[error("invalid atom reference '{value}'")]
    InvalidAtomReference { value: String },
    #[error("atom reference {index} is outside the declared range 1..={atom_count}")]
    AtomReferenceOutOfRange { index: usize, atom_count: usize },
    #[error("bond connects atom {index} to itself")]
    SelfBond { index: usize },
    #[error("unsupported bond type code '{value}'")]
    UnsupportedBondOrder { value: String },
    #[error("malformed charge property line")]
    MalformedChargeLine,
    #[error("data item header has no <NAME> field")]
    MalformedDataHeader,
}

fn parse_error(line: usize, kind: SdfParseErrorKind) -> SdfError {
    SdfError::Parse { line, kind }
}

fn column(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    line.get(start..end).unwrap_or("").trim()
}

fn next_line(reader: &mut impl BufRead, line_no: &mut usize) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    *line_no += 1;
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(Some(buf))
}

fn require_line(reader: &mut impl BufRead, line_no: &mut usize) -> Result<String, SdfError> {
    next_line(reader, line_no)?
        .ok_or_else(|| parse_error(*line_no, SdfParseErrorKind::TruncatedRecord))
}

fn charge_from_code(code: u8) -> Option<i8> {
    match code {
        0 | 4 => Some(0),
        1 => Some(3),
        2 => Some(2),
        3 => Some(1),
        5 => Some(-1),
        6 => Some(-2),
        7 => Some(-3),
        _ => None,
    }
}

fn charge_to_code(charge: i8) -> u8 {
    match charge {
        3 => 1,
        2 => 2,
        1 => 3,
        -1 => 5,
        -2 => 6,
        -3 => 7,
        _ => 0,
    }
}

fn parse_counts(line: &str, line_no: usize) -> Result<(usize, usize), SdfError> {
    let fixed = (
        column(line, 0, 3).parse::<usize>(),
        column(line, 3, 6).parse::<usize>(),
    );
    if let (Ok(atoms), Ok(bonds)) = fixed {
        return Ok((atoms, bonds));
    }

    let mut tokens = line.split_whitespace();
    let mut count = |field: &'static str| {
        let value = tokens.next().unwrap_or("");
        value.parse::<usize>().map_err(|_| {
            parse_error(
                line_no,
                SdfParseErrorKind::InvalidCount {
                    field,
                    value: value.to_string(),
                },
            )
        })
    };
    let atoms = count("atom")?;
    let bonds = count("bond")?;
    Ok((atoms, bonds))
}

fn parse_coordinate(value: &str, axis: char, line_no: usize) -> Result<f64, SdfError> {
    value.parse::<f64>().map_err(|_| {
        parse_error(
            line_no,
            SdfParseErrorKind::InvalidCoordinate {
                axis,
                value: value.to_string(),
            },
        )
    })
}

fn parse_atom(line: &str, line_no: usize) -> Result<Atom, SdfError> {
    let fixed = (
        column(line, 0, 10).parse::<f64>(),
        column(line, 10, 20).parse::<f64>(),
        column(line, 20, 30).parse::<f64>(),
    );
    let (position, symbol, charge_field) = match fixed {
        (Ok(x), Ok(y), Ok(z)) if !column(line, 31, 34).is_empty() => (
            Point3::new(x, y, z),
            column(line, 31, 34),
            column(line, 36, 39),
        ),
        _ => {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let field = |i: usize| tokens.get(i).copied().unwrap_or("");
            let x = parse_coordinate(field(0), 'x', line_no)?;
            let y = parse_coordinate(field(1), 'y', line_no)?;
            let z = parse_coordinate(field(2), 'z', line_no)?;
            (Point3::new(x, y, z), field(3), field(5))
        }
    };

    if symbol.is_empty() {
        return Err(parse_error(line_no, SdfParseErrorKind::MissingSymbol));
    }

    let charge = if charge_field.is_empty() {
        0
    } else {
        charge_field
            .parse::<u8>()
            .ok()
            .and_then(charge_from_code)
            .ok_or_else(|| {
                parse_error(
                    line_no,
                    SdfParseErrorKind::InvalidChargeCode {
                        value: charge_field.to_string(),
                    },
                )
            })?
    };

    Ok(Atom::from_symbol(symbol, position).with_formal_charge(charge))
}

fn parse_atom_reference(value: &str, atom_count: usize, line_no: usize) -> Result<usize, SdfError> {
    let index = value.parse::<usize>().map_err(|_| {
        parse_error(
            line_no,
            SdfParseErrorKind::InvalidAtomReference {
                value: value.to_string(),
            },
        )
    })?;
    if index == 0 || index > atom_count {
        return Err(parse_error(
            line_no,
            SdfParseErrorKind::AtomReferenceOutOfRange { index, atom_count },
        ));
    }
    Ok(index - 1)
}

fn parse_bond(line: &str, molecule: &mut Molecule, line_no: usize) -> Result<(), SdfError> {
    let fixed = [column(line, 0, 3), column(line, 3, 6), column(line, 6, 9)];
    let fields: [&str; 3] = if fixed.iter().all(|f| f.parse::<usize>().is_ok()) {
        fixed
    } else {
        let mut tokens = line.split_whitespace();
        [
            tokens.next().unwrap_or(""),
            tokens.next().unwrap_or(""),
            tokens.next().unwrap_or(""),
        ]
    };

    let atom_count = molecule.atom_count();
    let a = parse_atom_reference(fields[0], atom_count, line_no)?;
    let b = parse_atom_reference(fields[1], atom_count, line_no)?;
    let order = fields[2]
        .parse::<u8>()
        .ok()
        .and_then(BondOrder::from_ctfile_code)
        .ok_or_else(|| {
            parse_error(
                line_no,
                SdfParseErrorKind::UnsupportedBondOrder {
                    value: fields[2].to_string(),
                },
            )
        })?;

    molecule
        .add_bond(a, b, order)
        .ok_or_else(|| parse_error(line_no, SdfParseErrorKind::SelfBond { index: a + 1 }))
}

/// Applies one `M  CHG` line. The first such line of a record clears all
/// charges read from the atom block.
fn apply_charge_line(
    line: &str,
    molecule: &mut Molecule,
    reset: &mut bool,
    line_no: usize,
) -> Result<(), SdfError> {
    let malformed = || parse_error(line_no, SdfParseErrorKind::MalformedChargeLine);
    let tokens: Vec<&str> = line.split_whitespace().skip(2).collect();
    let count = tokens
        .first()
        .and_then(|t| t.parse::<usize>().ok())
        .ok_or_else(malformed)?;
    if tokens.len() < 1 + 2 * count {
        return Err(malformed());
    }

    if !*reset {
        for index in 0..molecule.atom_count() {
            molecule.set_formal_charge(index, 0);
        }
        *reset = true;
    }

    for pair in tokens[1..1 + 2 * count].chunks(2) {
        let atom = parse_atom_reference(pair[0], molecule.atom_count(), line_no)?;
        let charge = pair[1].parse::<i8>().map_err(|_| malformed())?;
        molecule.set_formal_charge(atom, charge);
    }
    Ok(())
}

fn data_item_name(line: &str) -> Option<&str> {
    let start = line.find('<')? + 1;
    let end = start + line[start..].find('>')?;
    Some(&line[start..end])
}

/// Where the connection table ended.
enum CtabEnd {
    PropertyBlock,
    DataHeader(String),
    Record,
}

pub struct SdfFile;

impl SdfFile {
    fn read_ctab(
        reader: &mut impl BufRead,
        line_no: &mut usize,
        header: Vec<String>,
        metadata: &mut SdfMetadata,
    ) -> Result<(Molecule, CtabEnd), SdfError> {
        let counts_line_no = *line_no;
        let counts_line = &header[3];
        if counts_line.contains("V3000") {
            return Err(SdfError::Unsupported {
                line: counts_line_no,
                detail: "V3000 connection tables are not supported".to_string(),
            });
        }
        let (atom_count, bond_count) = parse_counts(counts_line, counts_line_no)?;

        let mut molecule = Molecule::new(header[0].trim());
        metadata.ctab.extend(header);

        for _ in 0..atom_count {
            let line = require_line(reader, line_no)?;
            molecule.add_atom(parse_atom(&line, *line_no)?);
            metadata.ctab.push(line);
        }

        for _ in 0..bond_count {
            let line = require_line(reader, line_no)?;
            parse_bond(&line, &mut molecule, *line_no)?;
            metadata.ctab.push(line);
        }

        let mut charges_reset = false;
        let end = loop {
            let Some(line) = next_line(reader, line_no)? else {
                break CtabEnd::Record;
            };
            if line.starts_with(PROPERTY_BLOCK_END) {
                metadata.ctab.push(line);
                return Ok((molecule, CtabEnd::PropertyBlock));
            }
            if line.trim() == RECORD_TERMINATOR {
                break CtabEnd::Record;
            }
            if line.starts_with('>') {
                break CtabEnd::DataHeader(line);
            }
            if line.starts_with(CHARGE_PROPERTY) {
                apply_charge_line(&line, &mut molecule, &mut charges_reset, *line_no)?;
            }
            metadata.ctab.push(line);
        };

        metadata.ctab.push(PROPERTY_BLOCK_END.to_string());
        Ok((molecule, end))
    }

    /// Reads data items until the record terminator or end of input.
    fn read_data_items(
        reader: &mut impl BufRead,
        line_no: &mut usize,
        molecule: &mut Molecule,
        mut pending: Option<String>,
    ) -> Result<(), SdfError> {
        loop {
            let line = match pending.take() {
                Some(line) => line,
                None => match next_line(reader, line_no)? {
                    Some(line) => line,
                    None => return Ok(()),
                },
            };
            let trimmed = line.trim();
            if trimmed == RECORD_TERMINATOR {
                return Ok(());
            }
            if !line.starts_with('>') {
                continue;
            }

            let name = data_item_name(&line)
                .ok_or_else(|| parse_error(*line_no, SdfParseErrorKind::MalformedDataHeader))?
                .to_string();
            let mut values = Vec::new();
            let mut record_done = false;
            while let Some(value) = next_line(reader, line_no)? {
                if value.trim().is_empty() {
                    break;
                }
                if value.trim() == RECORD_TERMINATOR {
                    record_done = true;
                    break;
                }
                if value.starts_with('>') && data_item_name(&value).is_some() {
                    pending = Some(value);
                    break;
                }
                values.push(value);
            }
            molecule.set_property(name, values.join("\n"));
            if record_done {
                return Ok(());
            }
        }
    }

    fn write_ctab(molecule: &Molecule, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "{}", molecule.title)?;
        writeln!(writer, "{}", PROGRAM_LINE)?;
        writeln!(writer)?;
        writeln!(
            writer,
            "{:>3}{:>3}  0  0  0  0  0  0  0  0999 V2000",
            molecule.atom_count(),
            molecule.bond_count()
        )?;

        for atom in molecule.atoms() {
            writeln!(
                writer,
                "{:>10.4}{:>10.4}{:>10.4} {:<3} 0{:>3}  0  0  0  0  0  0  0  0  0  0",
                atom.position.x,
                atom.position.y,
                atom.position.z,
                atom.symbol,
                charge_to_code(atom.formal_charge)
            )?;
        }

        for bond in molecule.bonds() {
            writeln!(
                writer,
                "{:>3}{:>3}{:>3}  0",
                bond.i + 1,
                bond.j + 1,
                bond.order.ctfile_code()
            )?;
        }

        let charged: Vec<(usize, i8)> = molecule
            .atoms()
            .iter()
            .enumerate()
            .filter(|(_, a)| a.formal_charge != 0)
            .map(|(i, a)| (i + 1, a.formal_charge))
            .collect();
        for chunk in charged.chunks(MAX_CHARGE_ENTRIES_PER_LINE) {
            write!(writer, "{}{:>3}", CHARGE_PROPERTY, chunk.len())?;
            for (index, charge) in chunk {
                write!(writer, " {:>3} {:>3}", index, charge)?;
            }
            writeln!(writer)?;
        }

        writeln!(writer, "{}", PROPERTY_BLOCK_END)
    }
}

impl MolecularFile for SdfFile {
    type Metadata = SdfMetadata;
    type Error = SdfError;

    fn read_next(
        reader: &mut impl BufRead,
        line_no: &mut usize,
    ) -> Result<Option<(Molecule, Self::Metadata)>, Self::Error> {
        // A counts line is never blank, so a window of four blank lines is
        // padding: slide past it until real content or end of input.
        let mut header: Vec<String> = Vec::with_capacity(4);
        loop {
            match next_line(reader, line_no)? {
                Some(line) => header.push(line),
                None if header.iter().all(|l| l.trim().is_empty()) => return Ok(None),
                None => {
                    return Err(parse_error(*line_no, SdfParseErrorKind::TruncatedRecord));
                }
            }
            if header.len() < 4 {
                continue;
            }
            if header.iter().all(|l| l.trim().is_empty()) {
                header.remove(0);
                continue;
            }
            break;
        }

        let mut metadata = SdfMetadata {
            ctab: Vec::new(),
            first_line: *line_no - 3,
        };
        let (mut molecule, end) = Self::read_ctab(reader, line_no, header, &mut metadata)?;
        match end {
            CtabEnd::Record => {}
            CtabEnd::PropertyBlock => Self::read_data_items(reader, line_no, &mut molecule, None)?,
            CtabEnd::DataHeader(line) => {
                Self::read_data_items(reader, line_no, &mut molecule, Some(line))?
            }
        }

        Ok(Some((molecule, metadata)))
    }

    fn write_to(
        molecule: &Molecule,
        metadata: Option<&Self::Metadata>,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        match metadata {
            Some(metadata) => {
                for line in &metadata.ctab {
                    writeln!(writer, "{}", line)?;
                }
            }
            None => Self::write_ctab(molecule, writer)?,
        }

        for (name, value) in molecule.properties().iter() {
            writeln!(writer, "> <{}>", name)?;
            writeln!(writer, "{}", value)?;
            writeln!(writer)?;
        }
        writeln!(writer, "{}", RECORD_TERMINATOR)?;
        Ok(())
    }
}

/// Streaming SD file writer; records are appended one at a time.
pub struct SdfWriter<W: Write> {
    inner: W,
    written: usize,
}

impl SdfWriter<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, SdfError> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> SdfWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    pub fn write(
        &mut self,
        molecule: &Molecule,
        metadata: Option<&SdfMetadata>,
    ) -> Result<(), SdfError> {
        SdfFile::write_to(molecule, metadata, &mut self.inner)?;
        self.written += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes buffered output and returns the underlying writer.
    pub fn finish(mut self) -> Result<W, SdfError> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
