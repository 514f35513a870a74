#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
mod modules;

include_modules!();

use clap::Parser;
use log::info;
use crate::model::Config;
use crate::processing::processor::playlist;
use crate::utils::{init_logger, read_config, resolve_env_var, set_sanitize_sensitive_info, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "chanplay")]
#[command(version)]
#[command(about = "Categorized M3U playlist generator for IPTV channel lists", long_about = None)]
struct Args {
    /// The config file, `config.yml` in the working directory is used when present
    #[arg(short = 'c', long = "config")]
    config_file: Option<String>,

    /// Channel list url or file, overrides the config
    #[arg(short = 's', long = "source")]
    source: Option<String>,

    /// Playlist output file, overrides the config
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// log level
    #[arg(short = 'l', long = "log-level", num_args = 0..=1, default_missing_value = "info")]
    log_level: Option<String>,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn get_config_file(args: &Args) -> Option<String> {
    match args.config_file.as_ref() {
        Some(config_file) => Some(resolve_env_var(config_file)),
        None => std::path::Path::new(CONFIG_FILE).is_file().then(|| CONFIG_FILE.to_string()),
    }
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(source) = args.source.as_ref() {
        config.source.url = resolve_env_var(source);
    }
    if let Some(output) = args.output.as_ref() {
        config.output.filename = resolve_env_var(output);
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config_file = get_config_file(&args);

    init_logger(args.log_level.as_ref(), config_file.as_deref());

    info!("Version: {VERSION}");
    info!("Current time: {}", chrono::offset::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("Config file: {}", config_file.as_deref().unwrap_or("not used"));

    let mut config = read_config(config_file.as_deref()).unwrap_or_else(|err| exit!("{}", err));
    apply_overrides(&mut config, &args);
    if let Err(err) = config.prepare() {
        exit!("{}", err);
    }
    set_sanitize_sensitive_info(config.log.sanitize_sensitive_info);

    match playlist::exec_processing(&config).await {
        Ok(stats) => info!("Stats: {stats}"),
        Err(err) => exit!("{}", err),
    }
}
