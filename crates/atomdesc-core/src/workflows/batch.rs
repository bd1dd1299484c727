use crate::core::io::sdf::{SdfFile, SdfWriter};
use crate::core::io::table::AtomTableWriter;
use crate::core::io::traits::MolecularFile;
use crate::core::typing::AtomTypeMatcher;
use crate::core::typing::sybyl::SybylTypeMatcher;
use crate::engine::annotate::MoleculeAnnotator;
use crate::engine::config::PipelineConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info, instrument, warn};

/// Input and output locations of one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPaths {
    pub input: PathBuf,
    pub output_sdf: PathBuf,
    pub output_csv: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub molecules: usize,
    pub atoms: usize,
    /// Data rows written to the atom table (non-hydrogen atoms).
    pub rows: usize,
}

/// Runs the batch workflow with the default Sybyl atom typer.
pub fn run(
    paths: &BatchPaths,
    config: &PipelineConfig,
    reporter: &ProgressReporter,
) -> Result<BatchSummary, EngineError> {
    run_with_matcher(paths, config, &SybylTypeMatcher::new(), reporter)
}

/// Runs the batch workflow.
///
/// Molecules are read, annotated and written one at a time. The annotated SD
/// file is written in place as records are processed; the atom table is
/// staged next to its destination and only moved into place once the SD
/// output has been flushed. On error the staged table is discarded and the
/// destination table is left untouched.
///
/// # Errors
///
/// Returns the first I/O, parse or configuration error encountered; no
/// further records are processed after it.
#[instrument(skip_all, name = "batch_workflow")]
pub fn run_with_matcher(
    paths: &BatchPaths,
    config: &PipelineConfig,
    matcher: &dyn AtomTypeMatcher,
    reporter: &ProgressReporter,
) -> Result<BatchSummary, EngineError> {
    // === Phase 0: Preparation ===
    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    let catalog = config.catalog()?;
    info!(
        descriptors = catalog.len(),
        matcher = matcher.name(),
        "Prepared descriptor catalog."
    );

    let input = File::open(&paths.input).map_err(|source| EngineError::Io {
        path: paths.input.clone(),
        source,
    })?;
    let records = SdfFile::records(BufReader::new(input));

    let staging_dir = staging_dir(&paths.output_csv);
    let staged = stage_table(staging_dir).map_err(|source| EngineError::Io {
        path: staging_dir.to_path_buf(),
        source,
    })?;
    let table_error = |source| EngineError::Table {
        path: paths.output_csv.clone(),
        source,
    };
    let mut table = AtomTableWriter::new(
        BufWriter::new(staged),
        &catalog.names(),
        config.quoting,
        config.na_marker.as_str(),
    )
    .map_err(table_error)?;

    let write_error = |source| EngineError::Write {
        path: paths.output_sdf.clone(),
        source,
    };
    let mut sdf = SdfWriter::create(&paths.output_sdf).map_err(write_error)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 1: Stream molecules ===
    reporter.report(Progress::PhaseStart {
        name: "Annotating molecules",
    });
    let annotator = MoleculeAnnotator::new(
        &catalog,
        matcher,
        config.peoe_iterations,
        config.na_marker.as_str(),
    );
    let mut summary = BatchSummary::default();

    for (index, record) in records.enumerate() {
        let (mut molecule, metadata) = record.map_err(|source| EngineError::Read {
            path: paths.input.clone(),
            source,
        })?;

        let result = annotator.annotate(&mut molecule);
        let untyped = result
            .heavy_atoms()
            .filter(|a| a.atom_type.is_none())
            .count();
        if untyped > 0 {
            debug!(
                title = %molecule.title,
                untyped,
                "Some atoms matched no atom type."
            );
        }

        sdf.write(&molecule, Some(&metadata)).map_err(write_error)?;
        let rows = table.write_molecule(&result).map_err(table_error)?;

        summary.molecules += 1;
        summary.atoms += molecule.atom_count();
        summary.rows += rows;
        debug!(
            index,
            line = metadata.first_line,
            title = %molecule.title,
            atoms = molecule.atom_count(),
            rows,
            "Processed molecule."
        );
        reporter.report(Progress::MoleculeProcessed {
            index,
            title: molecule.title.clone(),
            atoms: molecule.atom_count(),
        });
    }
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Finalize outputs ===
    reporter.report(Progress::PhaseStart {
        name: "Finalizing outputs",
    });
    debug!(records = sdf.written(), path = %paths.output_sdf.display(), "Flushing annotated SD file.");
    sdf.finish().map_err(write_error)?;

    let staged = table
        .finish()
        .map_err(table_error)?
        .into_inner()
        .map_err(|e| EngineError::Io {
            path: paths.output_csv.clone(),
            source: e.into_error(),
        })?;
    staged
        .persist(&paths.output_csv)
        .map_err(|e| EngineError::Persist {
            path: paths.output_csv.clone(),
            source: e.error,
        })?;
    reporter.report(Progress::PhaseFinish);

    if summary.molecules == 0 {
        warn!(input = %paths.input.display(), "Input contained no molecules.");
    }
    info!(
        molecules = summary.molecules,
        atoms = summary.atoms,
        rows = summary.rows,
        "Batch run completed."
    );

    Ok(summary)
}

/// Creates the staging file for the atom table.
///
/// On Unix the file is opened with mode `0o666` so that, after the process
/// umask, the persisted table gets the same permissions as the SD output.
fn stage_table(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".atomdesc-").suffix(".csv.tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

fn staging_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
