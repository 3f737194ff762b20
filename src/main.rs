use anyhow::Context;
use canvas_demo::{Config, demo, render_scene, viewer};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "canvas-demo")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CANVAS_DEMO_GIT_HASH"), ")"),
    about = "Draws a line of text onto a blank canvas and opens it in your image viewer"
)]
struct Cli {
    /// Also write the image as PNG (to PATH, or to the configured save directory)
    #[arg(long, short = 's', value_name = "PATH", num_args = 0..=1)]
    save: Option<Option<PathBuf>>,

    /// Don't open the image viewer
    #[arg(long, action = ArgAction::SetTrue)]
    no_show: bool,

    /// Read configuration from PATH instead of ~/.config/canvas-demo/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the example config file and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["save", "no_show", "config"])]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote example config to {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let raster = render_scene(&config.canvas_spec())?;

    if let Some(target) = &cli.save {
        let png = raster.to_png()?;
        let path = match target {
            Some(path) => viewer::save_png(&png, path),
            None => viewer::save_to_directory(&png, &config.file_save_config()),
        }
        .context("Failed to save image")?;
        println!("Saved {}", path.display());
    }

    if cli.no_show {
        log::info!("Viewer disabled, exiting");
        return Ok(());
    }

    demo::show(&raster, &config.system_viewer())?;
    Ok(())
}
