//! Small-Spot Laser Safety CLI
//!
//! Evaluates one laser exposure and prints the hazard report to stdout.
//! Magnitudes accept metric prefixes, e.g. `--power 5u --time 100m`.

use clap::Parser;
use smallspot_safety::{
    parse_value, render, Error, ExposureInput, FileConfig, HazardEvaluator, ReportFormat,
    WavelengthPolicy,
};
use std::path::PathBuf;
use tracing::{debug, info};

/// Small-spot ocular laser hazard evaluation (400–500 nm).
#[derive(Debug, Parser)]
#[command(name = "smallspot-safety", version, about)]
struct Cli {
    /// Wavelength in nm.
    #[arg(short, long)]
    wavelength: f64,

    /// Power at the pupil in W, with optional metric prefix (e.g. 5u).
    #[arg(short, long)]
    power: String,

    /// Exposure duration in s, with optional metric prefix (e.g. 100m).
    #[arg(short, long)]
    time: String,

    /// Pulse repetition rate in Hz (e.g. 59M). Overrides the config file.
    #[arg(long)]
    rep_rate: Option<String>,

    /// Pulse duration in s (e.g. 6p). Overrides the config file.
    #[arg(long)]
    pulse_duration: Option<String>,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format. Overrides the config file.
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Reject wavelengths outside 400–500 nm instead of clamping.
    #[arg(long)]
    strict_wavelength: bool,
}

fn main() {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, Error> {
    let config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            FileConfig::from_file(path)?
        }
        None => FileConfig::default(),
    };

    let power = parse_value(&cli.power).map_err(Error::parse("power"))?;
    let dwell = parse_value(&cli.time).map_err(Error::parse("exposure time"))?;
    let rep_rate = match &cli.rep_rate {
        Some(text) => parse_value(text).map_err(Error::parse("repetition rate"))?,
        None => config.laser.rep_rate_hz,
    };
    let pulse_duration = match &cli.pulse_duration {
        Some(text) => parse_value(text).map_err(Error::parse("pulse duration"))?,
        None => config.laser.pulse_duration_s,
    };

    let input = ExposureInput::new(cli.wavelength, power, dwell)
        .with_rep_rate(rep_rate)
        .with_pulse_duration(pulse_duration);
    debug!(?input, "Parsed exposure");

    let policy = if cli.strict_wavelength {
        WavelengthPolicy::Reject
    } else {
        config.evaluation.wavelength_policy
    };
    input.validate(policy)?;

    let result = HazardEvaluator::default().evaluate(&input);
    info!(
        governing = %result.governing,
        within_limits = result.is_within_limits(),
        "Evaluation finished"
    );

    let format = cli.format.unwrap_or(config.output.format);
    Ok(render(&result, format)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["smallspot-safety"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_text_report() {
        let report = run(&cli(&["-w", "430", "-p", "5u", "-t", "100m"])).unwrap();
        assert!(report.contains("Governing hazard:          Photochemical"));
    }

    #[test]
    fn test_json_report_with_overrides() {
        let report = run(&cli(&[
            "-w", "450", "-p", "1u", "-t", "1", "--rep-rate", "80M", "--pulse-duration", "100f",
            "-f", "json",
        ]))
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["result"]["input"]["rep_rate_hz"], 80e6);
        assert_eq!(value["result"]["resolved_nm"], 450);
    }

    #[test]
    fn test_bad_power_reported_with_field() {
        let err = run(&cli(&["-w", "430", "-p", "five", "-t", "1"])).unwrap_err();
        assert!(matches!(err, Error::Parse { field: "power", .. }));
    }

    #[test]
    fn test_strict_wavelength() {
        let err = run(&cli(&["-w", "532", "-p", "1u", "-t", "1", "--strict-wavelength"]))
            .unwrap_err();
        assert!(matches!(err, Error::Input(_)));
        assert!(run(&cli(&["-w", "532", "-p", "1u", "-t", "1"])).is_ok());
    }
}
