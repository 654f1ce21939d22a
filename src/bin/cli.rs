use clap::Parser;
use clap_num::si_number;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use colortable::*;

#[path = "cli/error.rs"]
mod error;
use error::CliError;

#[derive(Parser)]
#[command(name = "colortable", author, version, about)]
struct Cli {
    /// Path to output image (file extension must be JPEG or PNG).
    output: Option<PathBuf>,
    /// Name of a predefined color table (see --list).
    #[arg(short, long, conflicts_with = "input")]
    preset: Option<String>,
    /// Path to a color table file (.json, .ron, .yaml or .yml).
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Dimensions (in pixels) of the output colorbar.
    #[arg(short, long, number_of_values = 2, default_values_t = [512, 32])]
    #[arg(value_names = ["WIDTH", "HEIGHT"])]
    dims: Vec<usize>,
    /// Number of discrete colors the table is sampled into (accepts SI postfixes).
    #[arg(short, long, default_value = "256", value_parser = si_number::<usize>)]
    steps: usize,
    /// Draw the colorbar from bottom to top instead of left to right.
    #[arg(long)]
    vertical: bool,
    /// Reverse the color table.
    #[arg(short, long)]
    reverse: bool,
    /// List the predefined color tables and exit.
    #[arg(short, long)]
    list: bool,
    /// Log table construction details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.dims[0],
            height: self.dims[1],
            steps: self.steps,
            vertical: self.vertical,
        }
    }

    fn load_table(&self) -> Result<ColorTable, CliError> {
        let table = match (&self.preset, &self.input) {
            (Some(name), _) => Preset::from_name(name)
                .ok_or_else(|| TableError::UnknownPreset(name.clone()))?
                .table()
                .map_err(TableError::from)?,
            (None, Some(path)) => ColorTable::from_file(path)?,
            (None, None) => return Err(CliError::MissingTable),
        };

        Ok(if self.reverse { table.reversed() } else { table })
    }
}

fn init_logging(verbose: bool) -> Result<(), CliError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    if cli.list {
        for preset in Preset::ALL {
            println!("{}", preset.name());
        }
        return Ok(());
    }

    let table = cli.load_table()?;
    let output = cli.output.as_ref().ok_or(CliError::MissingOutput)?;
    let name = table.name().unwrap_or("unnamed").to_owned();

    info!(%name, anchors = table.len(), "rendering colorbar");

    table.save_colorbar(output, cli.render_config())?;

    println!(
        "Colorbar for '{}' written to '{}'",
        name,
        output.display()
    );

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
