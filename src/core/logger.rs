use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use once_cell::sync::Lazy;
use log::{
    LevelFilter,
    Metadata,
    Record
};

use crate::{
    Error,
    error::Result,
};

static MY_LOGGER: Lazy<MyLogger> = Lazy::new(|| MyLogger {
    console : AtomicBool::new(true),
    file    : Mutex::new(None),
});

struct MyLogger {
    console : AtomicBool,
    file    : Mutex<Option<File>>,
}

impl log::Log for MyLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{}] {}",
            record.target(),
            record.level(),
            record.args()
        );

        if self.console.load(Ordering::Relaxed) {
            eprintln!("{}", line);
        }

        if let Ok(mut guard) = self.file.lock() {
            if let Some(fp) = guard.as_mut() {
                _ = writeln!(fp, "{}", line);
            }
        }
    }

    fn flush(&self) {
        _ = io::stderr().flush();
        if let Ok(mut guard) = self.file.lock() {
            if let Some(fp) = guard.as_mut() {
                _ = fp.flush();
            }
        }
    }
}

/// Installs the crate logger at `level`, appending to `file` as well when
/// one is given. Safe to call more than once; the latest call wins.
pub fn setup(level: LevelFilter, file: Option<&str>) -> Result<()> {
    let fp = match file {
        Some(path) => Some(OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::Io(format!("Opening log file {} error: {e}", path)))?
        ),
        None => None,
    };

    if let Ok(mut guard) = MY_LOGGER.file.lock() {
        *guard = fp;
    }
    MY_LOGGER.console.store(true, Ordering::Relaxed);

    _ = log::set_logger(&*MY_LOGGER);
    log::set_max_level(level);
    Ok(())
}

/// Stops echoing records to the console; the log file, if any, keeps receiving them.
pub fn revert_console_output() {
    MY_LOGGER.console.store(false, Ordering::Relaxed);
}

pub fn teardown() {
    log::logger().flush();
    log::set_max_level(LevelFilter::Off);
    if let Ok(mut guard) = MY_LOGGER.file.lock() {
        *guard = None;
    }
}
