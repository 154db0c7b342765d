use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use wifiscan::{
    config::{self, Config, OutputFormat},
    display, Platform,
};

#[derive(Parser)]
#[command(name = "wifiscan")]
#[command(about = "Parse captured WiFi scan output into a list of access points")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse captured scan output from a file or stdin
    Parse {
        /// File holding the scan tool's output (reads stdin if omitted)
        file: Option<PathBuf>,

        /// Platform that produced the output: windows, darwin or linux
        /// (defaults to the saved default, then the host OS)
        #[arg(short, long)]
        os: Option<String>,

        /// Print JSON instead of a table
        #[arg(short, long)]
        json: bool,

        /// Sort by signal strength, strongest first
        #[arg(short, long)]
        sort: bool,
    },

    /// List the supported platforms and their scan commands
    Platforms,

    /// Show saved configuration
    ShowConfig,

    /// Save default parse settings to the config file
    SetDefault {
        /// Default platform: windows, darwin or linux
        #[arg(short, long)]
        os: Option<String>,

        /// Default output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Sort by signal strength by default
        #[arg(short, long)]
        sort: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    match cli.command {
        Commands::Parse {
            file,
            os,
            json,
            sort,
        } => cmd_parse(file.as_deref(), os.as_deref(), json, sort),
        Commands::Platforms => cmd_platforms(),
        Commands::ShowConfig => cmd_show_config(),
        Commands::SetDefault { os, format, sort } => cmd_set_default(os.as_deref(), format, sort),
    }
}

fn cmd_parse(file: Option<&Path>, os: Option<&str>, json: bool, sort: bool) -> Result<()> {
    let cfg = Config::load()?;
    let platform = cfg.select_platform(os)?;

    let output = read_input(file)?;
    let format = if json { OutputFormat::Json } else { cfg.format };
    let sort = sort || cfg.sort_by_signal;

    let result = wifiscan::parse_platform(&output, platform);
    let (text, error) = display::render_outcome(result, format, sort)?;
    print!("{}", text);

    match error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read scan output: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read scan output from stdin")?;
            Ok(buf)
        }
    }
}

fn cmd_platforms() -> Result<()> {
    let host = Platform::host();

    println!("{:<10} {}", "OS", "SCAN COMMAND");
    println!("{}", "-".repeat(60));

    for platform in Platform::ALL {
        let marker = if host == Some(platform) { " (host)" } else { "" };
        println!(
            "{:<10} {}{}",
            platform.as_str(),
            platform.scan_command(),
            marker
        );
    }

    Ok(())
}

fn cmd_show_config() -> Result<()> {
    let path = config::config_path()?;
    println!("Config file: {}", path.display());
    println!();

    let cfg = Config::load()?;

    let platform = match cfg.default_platform {
        Some(platform) => platform.to_string(),
        None => match Platform::host() {
            Some(host) => format!("- (host: {})", host),
            None => "-".to_string(),
        },
    };
    let format = match cfg.format {
        OutputFormat::Table => "table",
        OutputFormat::Json => "json",
    };

    println!("{:<18} {}", "default_platform", platform);
    println!("{:<18} {}", "format", format);
    println!("{:<18} {}", "sort_by_signal", cfg.sort_by_signal);

    Ok(())
}

fn cmd_set_default(os: Option<&str>, format: Option<OutputFormat>, sort: bool) -> Result<()> {
    if os.is_none() && format.is_none() && !sort {
        bail!("Nothing to save; pass --os, --format or --sort");
    }

    let platform = os.map(str::parse::<Platform>).transpose()?;
    let path = config::config_path()?;

    Config::update_at(&path, |cfg| {
        if platform.is_some() {
            cfg.default_platform = platform;
        }
        if let Some(format) = format {
            cfg.format = format;
        }
        if sort {
            cfg.sort_by_signal = true;
        }
    })?;

    println!("Saved defaults to {}", path.display());

    Ok(())
}
