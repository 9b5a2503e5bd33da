use clap::Parser;
use std::path::PathBuf;

use lenext_cli::config::ConfigManager;
use lenext_cli::error::CliResult;
use lenext_cli::orchestrators::forge_orchestrator::{ForgeOptions, run_forge};
use lenext_cli::output::{OutputFormat, create_formatter};
use lenext_cli::terminal;

#[derive(Parser)]
#[command(name = "lenext")]
#[command(author, version, about = "MD5 length-extension forger for secret-prefix MACs", long_about = None)]
struct Cli {
    /// Known MAC, the hex MD5 digest of secret || msg
    #[arg(long, value_name = "HEX")]
    mac: String,

    /// Original message the MAC was computed over
    #[arg(long, value_name = "TEXT")]
    msg: String,

    /// Length of the unknown secret in bytes
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    keylen: i64,

    /// Text to append to the original message
    #[arg(long, value_name = "TEXT")]
    ext: String,

    /// File to write the raw forged message to
    #[arg(long, value_name = "PATH")]
    out: PathBuf,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("lenext_core", log::LevelFilter::Debug)
            .filter_module("lenext_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let debug = cli.debug;
    if let Err(err) = run(cli) {
        if !terminal::stderr_is_terminal() {
            colored::control::set_override(false);
        }
        eprint!("{}", err.format_for_user(debug));
        std::process::exit(err.exit_code() as i32);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let manager = match cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };
    let mut config = manager.load()?;
    config.apply_cli_overrides(cli.format, cli.no_color);

    if !config.output.color_enabled {
        colored::control::set_override(false);
    }

    let report = run_forge(&ForgeOptions {
        mac: cli.mac,
        msg: cli.msg,
        keylen: cli.keylen,
        ext: cli.ext,
        out: cli.out,
    })?;

    let use_color = config.output.color_enabled && terminal::supports_ansi();
    let formatter = create_formatter(config.output.format, use_color);
    println!("{}", formatter.format(&report)?);

    Ok(())
}
