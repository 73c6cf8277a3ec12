// crates/medal_cli/src/main.rs
//
// Wires up: exit codes, typed error mapping, CLI parsing, source selection,
// and the fetch → rank → render path.

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    /// Bad arguments or rejected payload shape.
    pub const VALIDATION: i32 = 2;
    /// Transport / filesystem failures.
    pub const IO: i32 = 4;
}

use std::fs;
use std::io::Write;
use std::process::ExitCode;

use args::{parse_and_validate as parse_cli, Args};

use medal_io::FileSource;
use medal_pipeline::{run_once, PipelineError};
use medal_report as report;

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Bad args / rejected payload.
    Validation(String),
    /// Transport, filesystem, or output-write failures.
    Io(String),
}

fn map_error(e: &MainError) -> i32 {
    match e {
        MainError::Validation(_) => exitcodes::VALIDATION,
        MainError::Io(_) => exitcodes::IO,
    }
}

impl From<PipelineError> for MainError {
    fn from(e: PipelineError) -> Self {
        match &e {
            PipelineError::Fetch(_) => MainError::Io(e.to_string()),
            PipelineError::Malformed(_) => MainError::Validation(e.to_string()),
        }
    }
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("medals: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };

    if !args.quiet {
        init_logging();
    }

    let rc = match run(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            let msg = match &e {
                MainError::Validation(m) | MainError::Io(m) => m,
            };
            eprintln!("medals: error: {msg}");
            map_error(&e)
        }
    };
    ExitCode::from(rc as u8)
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), MainError> {
    let config = args.sort_config();

    if args.echo_query {
        // Shareable representation: merge into the provided bag so unrelated
        // parameters survive.
        let mut params = args.params();
        config.write_to(&mut params);
        println!("{}", params.to_query_string());
    }

    let ranked = match (&args.input, &args.url) {
        (Some(path), _) => run_once(&FileSource::new(path), config)?,
        (None, Some(url)) => fetch_remote(url, config)?,
        (None, None) => unreachable!("args validated: input xor url"),
    };

    let rendered = match args.render.as_str() {
        "json" => report::render_json(&ranked)
            .map_err(|e| MainError::Validation(e.to_string()))?,
        "csv" => report::render_csv(&ranked),
        _ => report::render_text(&ranked),
    };

    match &args.out {
        Some(path) => fs::write(path, rendered).map_err(|e| MainError::Io(e.to_string()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .map_err(|e| MainError::Io(e.to_string()))?;
        }
    }
    Ok(())
}

#[cfg(feature = "http")]
fn fetch_remote(
    url: &str,
    config: medal_core::SortConfig,
) -> Result<Vec<medal_core::MedalRecord>, MainError> {
    use medal_io::{HttpSource, SourceConfig};
    let source_config =
        SourceConfig::from_medals_url(url).map_err(|e| MainError::Validation(e.to_string()))?;
    let source = HttpSource::new(source_config).map_err(|e| MainError::Io(e.to_string()))?;
    Ok(run_once(&source, config)?)
}

#[cfg(not(feature = "http"))]
fn fetch_remote(
    _url: &str,
    _config: medal_core::SortConfig,
) -> Result<Vec<medal_core::MedalRecord>, MainError> {
    Err(MainError::Validation(
        "built without http support; use --input".to_string(),
    ))
}
