use std::process::ExitCode;

use clap::Parser;
use mimalloc::MiMalloc;
use net::FetchConfig;
use runtime_analyze::{NetSource, analyze_url};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const USAGE: &str = "Usage: deepest-text <URL>";

/// Print the most deeply nested text line of a line-oriented HTML document.
#[derive(Parser)]
#[command(name = "deepest-text", version)]
struct Cli {
    /// Document to analyze (http, https or file URL)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Anything after the URL is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

fn main() -> ExitCode {
    // stdout carries only the result line; diagnostics go to stderr.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let Some(url) = cli.url else {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    };

    let config = FetchConfig::from_env();
    log::debug!("fetch config: {config:?}");

    let report = analyze_url(&NetSource::new(config), &url);
    if let Some(line) = report.render() {
        println!("{line}");
    }
    ExitCode::SUCCESS
}
