use crate::cli::Cli;
use crate::config::PartialPipelineConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use atomdesc::engine::progress::ProgressReporter;
use atomdesc::workflows::batch::{self, BatchPaths};
use tracing::{info, warn};

pub fn run(args: &Cli) -> Result<()> {
    let partial_config = PartialPipelineConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(args)?;
    info!(
        descriptors = config.descriptors.len(),
        na_marker = %config.na_marker,
        "Resolved pipeline configuration."
    );

    let paths = BatchPaths {
        input: args.input.clone(),
        output_sdf: args.output_sdf.clone(),
        output_csv: args.output_csv.clone(),
    };
    if paths.output_sdf == paths.input || paths.output_csv == paths.input {
        return Err(CliError::Argument(format!(
            "output paths must differ from the input file '{}'",
            paths.input.display()
        )));
    }
    if paths.output_sdf == paths.output_csv {
        return Err(CliError::Argument(
            "the SD and CSV outputs must be written to different files".to_string(),
        ));
    }

    let progress_handler = if args.quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the batch descriptor workflow...");
    let summary = batch::run(&paths, &config, &reporter)?;

    if summary.molecules == 0 {
        warn!("Workflow completed but the input held no molecules.");
    }
    if !args.quiet {
        println!(
            "Processed {} molecule(s), {} atom(s); wrote {} row(s).",
            summary.molecules, summary.atoms, summary.rows
        );
        println!("  Annotated SD file: {}", paths.output_sdf.display());
        println!("  Atom table:        {}", paths.output_csv.display());
    }

    Ok(())
}
