//! Command implementations for hxa.

use std::fmt::{Debug, Display};
use std::path::Path;

use attrs::{
    parse_attr, AttrKind, CheckReport, Config, Manifest, OutputFormat, ParseError, Parsed,
};
use serde::Serialize;

/// Load config, letting `--format` override the configured output format.
fn load_config(format: Option<&str>) -> attrs::Result<Config> {
    let mut config = Config::load()?;
    if let Some(format) = format {
        config.format = format.parse()?;
    }
    tracing::debug!(root = %config.root.display(), format = %config.format, "loaded config");
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> attrs::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a parsed value in the requested format.
fn emit<T: Serialize + Debug>(value: &T, pretty: impl Display, format: OutputFormat) -> attrs::Result<()> {
    match format {
        OutputFormat::Json => print_json(value)?,
        OutputFormat::Debug => println!("{:#?}", value),
        OutputFormat::Pretty => println!("{}", pretty),
    }
    Ok(())
}

fn report_parse_error(err: &ParseError, input: &str) {
    eprintln!("hxa: {}", err.render(input));
}

/// Parse one attribute value and print it. Returns false if it did not parse.
pub fn parse(kind: AttrKind, input: &str, format: Option<&str>) -> attrs::Result<bool> {
    let config = load_config(format)?;

    let parsed = match parse_attr(kind, input, &config) {
        Ok(parsed) => parsed,
        Err(err) => {
            report_parse_error(&err, input);
            return Ok(false);
        }
    };

    match &parsed {
        Parsed::Trigger(defs) => {
            let lines: Vec<String> = defs.iter().map(|d| d.to_string()).collect();
            emit(defs, lines.join("\n"), config.format)?;
        }
        Parsed::Swap(opts) => emit(opts, opts, config.format)?,
        Parsed::Sync(strategy) => emit(strategy, strategy, config.format)?,
    }
    Ok(true)
}

#[derive(Serialize)]
struct ReportJson<'a> {
    name: &'a str,
    value: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parsed: Option<&'a Parsed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorJson>,
}

#[derive(Serialize)]
struct ErrorJson {
    message: String,
    position: attrs::Position,
}

impl<'a> From<&'a CheckReport> for ReportJson<'a> {
    fn from(report: &'a CheckReport) -> Self {
        Self {
            name: &report.name,
            value: &report.value,
            parsed: report.outcome.as_ref().ok(),
            error: report.outcome.as_ref().err().map(|e| ErrorJson {
                message: e.to_string(),
                position: e.position(),
            }),
        }
    }
}

/// Validate every attribute in a manifest file. Returns false if any failed.
pub fn check(file: &str, format: Option<&str>) -> attrs::Result<bool> {
    let config = load_config(format)?;
    let manifest = Manifest::load(Path::new(file))?;
    let reports = manifest.check(&config);
    let failed = reports.iter().filter(|r| !r.is_ok()).count();

    match config.format {
        OutputFormat::Json => {
            let json: Vec<ReportJson<'_>> = reports.iter().map(ReportJson::from).collect();
            print_json(&json)?;
        }
        OutputFormat::Debug => println!("{:#?}", reports),
        OutputFormat::Pretty => {
            for report in &reports {
                match &report.outcome {
                    Ok(_) => println!("ok    {}=\"{}\"", report.name, report.value),
                    Err(err) => {
                        println!("FAIL  {}=\"{}\"", report.name, report.value);
                        for line in err.render(&report.value).lines() {
                            println!("      {}", line);
                        }
                    }
                }
            }
            println!("\n{} checked, {} failed", reports.len(), failed);
        }
    }

    Ok(failed == 0)
}

/// Write a default config file.
pub fn init(force: bool) -> attrs::Result<bool> {
    let config = Config::default_location()?;
    let path = config.config_path();

    if path.exists() && !force {
        println!("Config already exists at {}", path.display());
        println!("Use --force to overwrite");
        return Ok(true);
    }

    config.save()?;
    println!("Config written to {}", path.display());
    Ok(true)
}
