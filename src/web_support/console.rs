// Routes the `log` facade to the browser console.

use anyhow::{Result, anyhow};
use log::{Level, LevelFilter, Log, Metadata, Record};
use web_sys::{console, wasm_bindgen::JsValue};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format!("{}: {}", record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug => console::debug_1(&line),
            Level::Trace => console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger. Fails if another logger is already set.
pub fn init_console_logging(max_level: LevelFilter) -> Result<()> {
    log::set_logger(&LOGGER).map_err(|err| anyhow!("{err}"))?;
    log::set_max_level(max_level);
    Ok(())
}
