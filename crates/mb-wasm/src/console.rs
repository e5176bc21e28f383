//! `log` backend writing to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        passes(metadata.target(), metadata.level(), log::max_level())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&record.args().to_string());
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::log_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger (first call only) and make sure records at
/// `level` get through.
///
/// `level` is process-wide, but only `mb_*` targets are let through below
/// `Warn`; other crates linked into the page stay at warnings and errors.
pub fn init(level: LevelFilter) {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = log::set_logger(&LOGGER);
    }
    if level > log::max_level() {
        log::set_max_level(level);
    }
}

/// Our own crates log down to `max`; everything else is capped at `Warn`.
pub(crate) fn passes(target: &str, level: Level, max: LevelFilter) -> bool {
    let ceiling = if target.starts_with("mb_") {
        max
    } else {
        max.min(LevelFilter::Warn)
    };
    level <= ceiling
}

/// Filter needed for an adapter's sync line, never quieter than warnings.
pub(crate) fn filter_for(level: Option<Level>) -> LevelFilter {
    level
        .map_or(LevelFilter::Warn, |l| l.to_level_filter())
        .max(LevelFilter::Warn)
}
