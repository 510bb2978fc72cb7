use crate::config::{DisplayConfig, OutputFormat, UtcOffset};
use crate::data_model::settings::{AppSettings, Command, WatchSettings};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_SVG_WIDTH: u32 = 216;

#[derive(Parser, Debug)]
#[command(name = "berlinuhr")]
#[command(about = "Berlin Uhr lamp clock for the terminal", long_about = None)]
pub struct CliArgs {
    /// Write logs to this file (level from RUST_LOG)
    #[arg(long, value_name = "FILE", global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Show a live clock (default)
    Watch(WatchArgs),
    /// Print the lamp state for a time
    Convert {
        /// Time as HH:MM:SS
        time: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Render the lamp state for a time as SVG
    Svg {
        /// Time as HH:MM:SS
        time: String,

        /// Image width in pixels
        #[arg(short, long, default_value_t = DEFAULT_SVG_WIDTH)]
        width: u32,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
struct WatchArgs {
    /// UI refresh rate (Hz)
    #[arg(long)]
    refresh_hz: Option<u16>,

    /// UTC offset: local|utc|+HH:MM|-HH:MM
    #[arg(long, value_name = "OFFSET", allow_hyphen_values = true)]
    utc_offset: Option<String>,

    /// Hide the HH:MM:SS line under the lamps
    #[arg(long)]
    no_text: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("ui refresh rate must be greater than zero (got {value})")]
    InvalidRefreshHz { value: u16 },
    #[error("invalid utc offset {value:?} (expected local, utc or ±HH:MM)")]
    InvalidUtcOffset { value: String },
    #[error("svg width must be greater than zero")]
    InvalidSvgWidth,
}

pub fn load_from_cli() -> Result<AppSettings, SettingsError> {
    let args = CliArgs::parse();
    from_args(args)
}

pub fn from_args(args: CliArgs) -> Result<AppSettings, SettingsError> {
    let command = match args.command {
        None => Command::Watch(WatchSettings::default()),
        Some(CliCommand::Watch(watch)) => Command::Watch(watch_settings(watch)?),
        Some(CliCommand::Convert { time, format }) => Command::Convert { time, format },
        Some(CliCommand::Svg {
            time,
            width,
            output,
        }) => {
            if width == 0 {
                return Err(SettingsError::InvalidSvgWidth);
            }
            Command::Svg {
                time,
                width,
                output,
            }
        }
    };

    Ok(AppSettings {
        command,
        log_file: args.log_file,
    })
}

fn watch_settings(args: WatchArgs) -> Result<WatchSettings, SettingsError> {
    if let Some(value) = args.refresh_hz
        && value == 0
    {
        return Err(SettingsError::InvalidRefreshHz { value });
    }

    let utc_offset = match args.utc_offset {
        Some(raw) => Some(
            UtcOffset::parse_cli(&raw).ok_or(SettingsError::InvalidUtcOffset { value: raw })?,
        ),
        None => None,
    };

    Ok(WatchSettings {
        refresh_hz: args.refresh_hz,
        utc_offset,
        show_text_clock: args.no_text.then_some(false),
    })
}

pub fn apply_display(settings: &WatchSettings, display: &mut DisplayConfig) {
    if let Some(refresh_hz) = settings.refresh_hz {
        display.refresh_hz = refresh_hz;
    }
    if let Some(offset) = settings.utc_offset {
        display.utc_offset = offset;
    }
    if let Some(show) = settings.show_text_clock {
        display.show_text_clock = show;
    }
}

#[cfg(test)]
mod tests {
    use super::{CliArgs, DEFAULT_SVG_WIDTH, SettingsError, apply_display, from_args};
    use crate::config::{DisplayConfig, OutputFormat, UtcOffset};
    use crate::data_model::settings::{Command, WatchSettings};
    use clap::Parser;
    use std::path::PathBuf;

    fn parse(argv: &[&str]) -> Result<crate::data_model::settings::AppSettings, SettingsError> {
        let args = CliArgs::try_parse_from(argv).expect("clap parse");
        from_args(args)
    }

    #[test]
    fn from_args_defaults_to_watch() {
        let settings = parse(&["berlinuhr"]).expect("settings");
        assert_eq!(settings.command, Command::Watch(WatchSettings::default()));
        assert_eq!(settings.log_file, None);
    }

    #[test]
    fn from_args_parses_watch_overrides() {
        let settings = parse(&[
            "berlinuhr",
            "watch",
            "--refresh-hz",
            "4",
            "--utc-offset",
            "-02:00",
            "--no-text",
        ])
        .expect("settings");

        assert_eq!(
            settings.command,
            Command::Watch(WatchSettings {
                refresh_hz: Some(4),
                utc_offset: Some(UtcOffset::Fixed { minutes: -120 }),
                show_text_clock: Some(false),
            })
        );
    }

    #[test]
    fn from_args_rejects_zero_refresh_hz() {
        let err = parse(&["berlinuhr", "watch", "--refresh-hz", "0"]).expect_err("should error");
        assert_eq!(err, SettingsError::InvalidRefreshHz { value: 0 });
    }

    #[test]
    fn from_args_rejects_bad_offset() {
        let err =
            parse(&["berlinuhr", "watch", "--utc-offset", "mars"]).expect_err("should error");
        assert_eq!(
            err,
            SettingsError::InvalidUtcOffset {
                value: "mars".to_string()
            }
        );
    }

    #[test]
    fn from_args_parses_convert_and_svg() {
        let settings =
            parse(&["berlinuhr", "convert", "17:49:21", "--format", "json"]).expect("settings");
        assert_eq!(
            settings.command,
            Command::Convert {
                time: "17:49:21".to_string(),
                format: OutputFormat::Json,
            }
        );

        let settings = parse(&[
            "berlinuhr",
            "--log-file",
            "clock.log",
            "svg",
            "08:15:00",
            "-o",
            "clock.svg",
        ])
        .expect("settings");
        assert_eq!(settings.log_file, Some(PathBuf::from("clock.log")));
        assert_eq!(
            settings.command,
            Command::Svg {
                time: "08:15:00".to_string(),
                width: DEFAULT_SVG_WIDTH,
                output: Some(PathBuf::from("clock.svg")),
            }
        );
    }

    #[test]
    fn from_args_rejects_zero_svg_width() {
        let err = parse(&["berlinuhr", "svg", "00:00:00", "--width", "0"]).expect_err("error");
        assert_eq!(err, SettingsError::InvalidSvgWidth);
    }

    #[test]
    fn apply_display_only_overrides_given_values() {
        let mut display = DisplayConfig::default();
        apply_display(
            &WatchSettings {
                refresh_hz: Some(2),
                ..WatchSettings::default()
            },
            &mut display,
        );
        assert_eq!(display.refresh_hz, 2);
        assert_eq!(display.utc_offset, UtcOffset::Local);
        assert!(display.show_text_clock);
    }
}
