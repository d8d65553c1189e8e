mod config;
mod error;
mod glyph;
mod io;
mod layout;
mod logging;
mod package;
mod render;
mod report;

use clap::Parser;
use config::Config;
use error::Result;
use package::handlers;
use package::PackageContext;
use render::Rasterizer;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "rikuest-icons", version)]
#[command(about = "Generate the Rikuest app icon for macOS, Windows and Linux")]
struct Cli {
    /// Read configuration from this file instead of the user config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output root directory
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Space around the glyph, in viewbox units
    #[arg(short, long)]
    padding: Option<f32>,

    /// Only generate the main app icon
    #[arg(long)]
    icon_only: bool,

    /// Draw the app icon with the polyline renderer
    #[arg(long)]
    fallback: bool,

    /// Write the default config file if it doesn't exist, then exit
    #[arg(long)]
    init_config: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.out_dir {
            config.output.dir = dir.clone();
        }
        if let Some(padding) = self.padding {
            config.glyph.padding = padding;
        }
        if self.fallback {
            config.app_icon.renderer = "polyline".to_string();
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    if cli.init_config {
        match Config::create_default()? {
            Some(path) => println!("Wrote default configuration to {}", path.display()),
            None => println!("Configuration file already exists"),
        }
        return Ok(true);
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    let rule = "=".repeat(report::RULE_WIDTH);
    println!("{}", rule);
    println!("🎨 Multi-platform icon generator");
    println!("{}", rule);

    if !Rasterizer::vector_available() {
        println!("\n⚠ WARNING: built without the SVG renderer");
        println!("   The app icon falls back to the polyline renderer and");
        println!("   platform icons will be skipped. Rebuild with the `svg` feature.");
    }

    let rasterizer = Rasterizer::new(config.glyph.padding);
    log::info!(
        "Output root {}, padding {}",
        config.output.dir.display(),
        rasterizer.padding()
    );

    let registry = handlers::registry(&config, cli.icon_only);
    let ctx = PackageContext {
        out_dir: &config.output.dir,
        rasterizer: &rasterizer,
    };
    let summary = registry.run(&ctx)?;

    print!("{}", summary.render(&registry.locations(&config.output.dir)));
    Ok(summary.all_succeeded())
}

/// Exit status for a rejected command line. Help and version requests are
/// not failures; anything else maps to 1 like every other error.
fn parse_error_status(kind: clap::error::ErrorKind) -> u8 {
    use clap::error::ErrorKind;
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_error_status(e.kind()));
        }
    };
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("✗ Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
