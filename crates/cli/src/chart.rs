use std::path::PathBuf;

use dataplot_chart::OutputFile;
use dataplot_chart::Page;
use dataplot_chart::Render;

use crate::cli::PathExt;
use crate::error::CliError;
use crate::fetch::client::CYCLING_URL;
use crate::fetch::client::DatasetClient;
use crate::fetch::client::GDP_URL;

const GDP_FILE_NAME: &str = "gdp.html";
const CYCLING_FILE_NAME: &str = "cycling.html";

pub(crate) fn gdp(output_path: Option<PathBuf>) -> Result<(), CliError> {
    let output_path = output_path.or_current_dir()?;

    println!(
        "dataplot fetches the GDP dataset and renders the bar chart in: `{}`",
        output_path.display()
    );

    let client = DatasetClient::new();
    let body = client.fetch(GDP_URL)?;
    let observations = dataplot_dataset::gdp::parse(&body)?;

    let scene = dataplot_chart::gdp::chart(&observations);
    let page = Page::new(&scene);

    let mut output = OutputFile::new(&output_path, GDP_FILE_NAME)?;
    page.render(&mut output)?;

    Ok(())
}

pub(crate) fn cycling(output_path: Option<PathBuf>) -> Result<(), CliError> {
    let output_path = output_path.or_current_dir()?;

    println!(
        "dataplot fetches the cycling race dataset and renders the scatterplot in: `{}`",
        output_path.display()
    );

    let client = DatasetClient::new();
    let body = client.fetch(CYCLING_URL)?;
    let results = dataplot_dataset::cycling::parse(&body)?;

    let scene = dataplot_chart::cycling::chart(&results);
    let page = Page::new(&scene);

    let mut output = OutputFile::new(&output_path, CYCLING_FILE_NAME)?;
    page.render(&mut output)?;

    Ok(())
}
