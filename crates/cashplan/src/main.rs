use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;

use cashplan::{init_logging, report, seed};

#[derive(Parser, Debug)]
#[command(name = "cashplan")]
#[command(about = "Projects a personal financial plan across future years")]
struct Args {
    /// Path to the seed plan JSON document
    plan: PathBuf,

    /// Year index to project to
    #[arg(short, long, default_value_t = 30)]
    years: u32,

    /// Where to write the CSV report (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let plan = seed::load_plan(&args.plan)?;
    tracing::info!(target_year = args.years, "projecting plan");
    let projected = plan.run_years(args.years)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            report::write_csv(&projected, BufWriter::new(file))?;
            tracing::info!("report written to {}", path.display());
        }
        None => report::write_csv(&projected, std::io::stdout().lock())?,
    }

    Ok(())
}
