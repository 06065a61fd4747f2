use std::env;
use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

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
    /// Fetch the quarterly GDP dataset and render it as a bar chart.
    Gdp {
        /// Specify the path where the chart document will be created.
        /// If the output path is not specified then the current working
        /// directory is used.
        #[arg(short, long, value_parser(parse_path))]
        output_path: Option<PathBuf>,
    },
    /// Fetch the cycling race dataset and render it as a scatterplot.
    Cycling {
        /// Specify the path where the chart document will be created.
        /// If the output path is not specified then the current working
        /// directory is used.
        #[arg(short, long, value_parser(parse_path))]
        output_path: Option<PathBuf>,
    },
}

fn parse_path(path: &str) -> Result<PathBuf, String> {
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
