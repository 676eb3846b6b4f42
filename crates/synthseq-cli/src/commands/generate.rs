use crate::cli::GenerateArgs;
use crate::config::builder::build_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use synthseq::core::io::dataset::write_dataset;
use synthseq::core::models::record::GeneratedRecord;
use synthseq::engine::progress::ProgressReporter;
use synthseq::workflows;
use tracing::{info, warn};

pub const CONSOLE_HEADER: &str = "idx, f_positive, f_negative, f_neutral, sequence";

pub fn run(args: GenerateArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = build_config(&args)?;

    if app_config.core_config.seed.is_none() {
        info!("No seed given; this dataset will not be reproducible.");
    }

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("{}", CONSOLE_HEADER);
    info!("Invoking the generation workflow...");
    let dataset = workflows::generate::run(&app_config.core_config, &reporter)?;

    if args.echo {
        for record in &dataset {
            println!("{}", format_record(record));
        }
    }

    if dataset.is_empty() {
        warn!("Workflow completed but produced no records.");
    }

    info!(
        "Writing {} record(s) to {:?}",
        dataset.len(),
        &app_config.output_path
    );
    write_dataset(&dataset, &app_config.output_path)?;
    println!(
        "✓ {} sequence(s) written to: {}",
        dataset.len(),
        app_config.output_path.display()
    );

    Ok(())
}

fn format_record(record: &GeneratedRecord) -> String {
    format!(
        "{}, {}, {}, {}, {}",
        record.idx,
        record.f_positive,
        record.f_negative,
        record.f_neutral(),
        record.sequence
    )
}
