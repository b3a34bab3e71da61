use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use nbstitch::app::assemble::{assemble, timestamped_output};
use nbstitch::domain::model::AssemblyRequest;
use nbstitch::infra::config::Config;

#[derive(Parser)]
#[command(
    name = "nbstitch",
    version,
    about = "Stitch source files and requirements into an executable Jupyter notebook"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a notebook from source files and requirements lists
    Assemble {
        /// Source files included as cells, in order
        #[arg(required = true)]
        sources: Vec<PathBuf>,
        /// Destination notebook path (must end in .ipynb)
        #[arg(short, long)]
        output: PathBuf,
        /// Requirements files consolidated into the install cell
        #[arg(short, long = "requirements", required = true)]
        requirements: Vec<PathBuf>,
        /// Insert a UTC timestamp before the output extension
        #[arg(long)]
        timestamp: bool,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

fn main() -> Result<()> {
    nbstitch::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Assemble {
            sources,
            output,
            requirements,
            timestamp,
        } => {
            let config = Config::load()?;
            let output = if timestamp {
                timestamped_output(&output)?
            } else {
                output
            };
            let request = AssemblyRequest {
                sources,
                requirements,
                output,
            };
            let report = assemble(&request, &config)?;
            println!(
                "wrote {} ({} cells, {} requirements)",
                report.output.display(),
                report.cell_count,
                report.requirement_count
            );
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "nbstitch", &mut io::stdout());
        }
    }

    Ok(())
}
