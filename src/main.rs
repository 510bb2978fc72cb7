use berlinuhr::app::AppState;
use berlinuhr::commands::{run_convert, run_svg};
use berlinuhr::data_model::settings::Command;
use berlinuhr::runtime::spawn_ticker;
use berlinuhr::settings::{apply_display, load_from_cli};
use berlinuhr::storage;
use berlinuhr::time_source::SystemClock;
use berlinuhr::ui::run_ui;
use std::io;

fn main() -> io::Result<()> {
    let settings = load_from_cli()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;

    // The live view owns the terminal, so it only logs when given a file.
    let is_watch = matches!(settings.command, Command::Watch(_));
    if settings.log_file.is_some() || !is_watch {
        berlinuhr::logging::init(settings.log_file.as_deref())?;
    }

    match settings.command {
        Command::Convert { time, format } => run_convert(&time, format, &mut io::stdout().lock())
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string())),
        Command::Svg {
            time,
            width,
            output,
        } => run_svg(&time, width, output.as_deref(), &mut io::stdout().lock())
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string())),
        Command::Watch(overrides) => {
            let mut persisted = storage::load();
            apply_display(&overrides, &mut persisted.display);
            tracing::info!(display = ?persisted.display, "starting live clock");

            let (tick_tx, tick_rx) = crossbeam_channel::unbounded();
            let ticker = spawn_ticker(
                SystemClock,
                persisted.display.tick_interval(),
                persisted.display.utc_offset,
                tick_tx,
            );

            let mut app = AppState::new(persisted.display.clone());
            run_ui(&mut app, tick_rx, ticker)?;

            persisted.display = app.display;
            if let Err(err) = storage::save(&persisted) {
                tracing::warn!(%err, "could not save display settings");
            }
            Ok(())
        }
    }
}
