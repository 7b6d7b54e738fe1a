use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

use crate::error::CliError;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render the weather dataset into an HTML report of SVG charts.
    Render(RenderArgs),
    /// Fetch a weather dataset over HTTP and store it locally.
    Fetch(FetchArgs),
}

#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Specify the path from where to read the weather dataset.
    /// The path must exist and it must point to a JSON file.
    #[arg(short, long, value_parser(parse_file_path))]
    pub(crate) path: PathBuf,

    /// Specify the path where the generated report will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_dir_path))]
    pub(crate) output_path: Option<PathBuf>,

    /// Specify which charts to render.
    #[arg(short, long, value_enum, default_value_t = ChartKind::All)]
    pub(crate) charts: ChartKind,

    /// Keep only the records on or after this date.
    #[arg(short, long)]
    pub(crate) start_date: Option<NaiveDate>,

    /// Keep only the records on or before this date.
    #[arg(short, long)]
    pub(crate) end_date: Option<NaiveDate>,
}

#[derive(Args)]
pub(crate) struct FetchArgs {
    /// Specify the URL from where to fetch the weather dataset.
    #[arg(short, long)]
    pub(crate) url: String,

    /// Specify the path where the dataset will be stored.
    /// If the path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_dir_path))]
    pub(crate) path: Option<PathBuf>,

    /// Specify the file name of the stored dataset.
    #[arg(short, long, default_value = "weather.json")]
    pub(crate) file_name: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum ChartKind {
    /// The pointer hover demo squares.
    Hover,
    /// The daily humidity bar chart.
    Bar,
    /// The weather wheel month grid only.
    RadialGrid,
    /// The full weather wheel.
    Radial,
    /// Every chart, in order.
    All,
}

fn parse_file_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_file() {
        return Err(format!(
            "The `{}` path must point to a file.",
            path.display()
        ));
    }

    Ok(path)
}

fn parse_dir_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}
