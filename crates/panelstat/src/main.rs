mod cmd;
mod exit;
mod logging;
mod output;
mod screen;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "panelstat", version, about = "System stats on the front-panel LCD")]
struct Cli {
    /// Output format for reports.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.log_json);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_subcommand() {
        let cli = Cli::try_parse_from([
            "panelstat",
            "run",
            "--device",
            "/dev/hidraw3",
            "--interval",
            "2",
            "--orientation",
            "portrait",
        ])
        .expect("run args should parse");

        assert!(matches!(cli.command, Command::Run(_)));
    }

    #[test]
    fn parses_splash_with_out_file() {
        let cli = Cli::try_parse_from([
            "panelstat",
            "splash",
            "--out",
            "/tmp/capture.bin",
            "--color",
            "FF8800",
            "--text",
            "HELLO",
        ])
        .expect("splash args should parse");

        assert!(matches!(cli.command, Command::Splash(_)));
    }

    #[test]
    fn rejects_splash_with_both_device_and_out() {
        let err = Cli::try_parse_from([
            "panelstat",
            "splash",
            "--device",
            "/dev/hidraw3",
            "--out",
            "/tmp/capture.bin",
        ])
        .expect_err("conflicting sinks should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["panelstat", "doctor", "--log-level", "debug"])
            .expect("doctor args should parse");
        assert!(matches!(cli.command, Command::Doctor(_)));
    }
}
