use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tripsheet::{ColorMap, Generator, Itinerary, Margins, PageLayout, PageSize, PipelineError, sample_itinerary};

/// Render travel itineraries into printable PDF documents.
#[derive(Parser, Debug)]
#[command(name = "tripsheet", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an itinerary JSON file.
    Render {
        /// Itinerary in JSON form.
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        /// JSON object of kind -> "#rrggbb" header colors. The key
        /// "default" sets the color for unknown kinds.
        #[arg(long, value_name = "FILE")]
        colors: Option<PathBuf>,
    },
    /// Render the built-in sample trip.
    Sample {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Where to write the PDF.
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// letter, a4 or legal.
    #[arg(long, default_value = "letter")]
    page_size: PageSize,

    /// Page margins, e.g. "54", "0.75in" or "1in 0.75in".
    #[arg(long, value_name = "LENGTH")]
    margin: Option<Margins>,
}

impl OutputArgs {
    fn page_layout(&self) -> PageLayout {
        let mut layout = PageLayout {
            size: self.page_size,
            ..PageLayout::default()
        };
        if let Some(margins) = self.margin {
            layout.margins = margins;
        }
        layout
    }
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render { input, output, colors } => {
            let itinerary = Itinerary::from_json_str(&read(&input)?).map_err(PipelineError::from)?;
            let colors = match colors {
                Some(path) => ColorMap::from_json_str(&read(&path)?).map_err(PipelineError::from)?,
                None => ColorMap::default(),
            };
            Generator::new()
                .with_colors(colors)
                .with_page_layout(output.page_layout())
                .render_to_file(&itinerary, &output.output)?;
            println!("Generated {}", output.output.display());
        }
        Command::Sample { output } => {
            Generator::new()
                .with_page_layout(output.page_layout())
                .render_to_file(&sample_itinerary(), &output.output)?;
            println!("Generated {}", output.output.display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("tripsheet=info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
