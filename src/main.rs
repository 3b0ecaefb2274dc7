//! `segclock`: the clock on the real terminal.
//!
//! Draws until interrupted. Exit status is 1 after a fault-class signal or
//! a fatal error, 0 otherwise.

use crossbeam_channel::bounded;
use segclock::actor::NOTIFICATION_CAPACITY;
use segclock::{ClockConfig, ClockLoop, ExitCause, LocalClock, SignalActor, StdTerminal};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run() {
        Ok(cause) => ExitCode::from(cause.exit_code()),
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> segclock::Result<ExitCause> {
    let config = ClockConfig::default();
    let (tx, rx) = bounded(NOTIFICATION_CAPACITY);
    let signals = SignalActor::spawn(tx)?;

    let terminal = StdTerminal::new(config.clear_screen, config.hide_cursor)?;
    let mut clock = ClockLoop::new(config, terminal, LocalClock, rx)?;
    let result = clock.run();

    // Releases the buffer and shows the cursor before anything is logged.
    drop(clock);
    signals.join();
    result
}
