use crate::clock::{ClockError, convert};
use crate::config::OutputFormat;
use crate::svg;
use crate::text::{render_json, render_text};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Clock(#[from] ClockError),
    #[error("failed to encode lamp state: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

pub fn run_convert(
    time: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let state = convert(time)?;
    tracing::debug!(time, ?format, "converted time");
    match format {
        OutputFormat::Text => out.write_all(render_text(&state).as_bytes())?,
        OutputFormat::Json => writeln!(out, "{}", render_json(&state)?)?,
    }
    Ok(())
}

pub fn run_svg(
    time: &str,
    width: u32,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let state = convert(time)?;
    let document = svg::render(&state, width);
    match output {
        Some(path) => {
            fs::write(path, document)?;
            tracing::info!(path = %path.display(), width, "wrote svg");
        }
        None => out.write_all(document.as_bytes())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_convert_prints_json() {
        let mut out = Vec::new();
        run_convert("05:00:00", OutputFormat::Json, &mut out).expect("convert");
        let text = String::from_utf8(out).unwrap();
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["fiveHours"], serde_json::json!([1, 0, 0, 0]));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn run_convert_surfaces_clock_errors() {
        let mut out = Vec::new();
        let err = run_convert("24:00:00", OutputFormat::Text, &mut out).expect_err("out of range");
        assert!(matches!(
            err,
            CommandError::Clock(ClockError::OutOfRangeComponent { .. })
        ));
        assert_eq!(err.to_string(), "hour 24 is out of range (0-23)");
        assert!(out.is_empty());
    }

    #[test]
    fn run_svg_writes_to_stdout_or_file() {
        let mut out = Vec::new();
        run_svg("12:00:00", 108, None, &mut out).expect("svg");
        assert!(String::from_utf8(out).unwrap().starts_with("<svg"));

        let path = std::env::temp_dir().join(format!("berlinuhr-{}.svg", std::process::id()));
        let mut unused = Vec::new();
        run_svg("12:00:00", 108, Some(&path), &mut unused).expect("svg file");
        assert!(unused.is_empty());
        assert!(fs::read_to_string(&path).unwrap().contains("</svg>"));
        let _ = fs::remove_file(&path);
    }
}
