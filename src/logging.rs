use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use chrono::Local;

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

static STDERR_ECHO: AtomicBool = AtomicBool::new(true);

pub fn init_logging() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("github-issue-grid")
        .join("logs");

    init_logging_at(&log_dir)
}

/// Start logging into a fresh timestamped file under `log_dir`.
pub fn init_logging_at(log_dir: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    create_dir_all(log_dir)?;

    let log_file = log_dir.join(format!("issue-grid-{}.log", Local::now().format("%Y%m%d-%H%M%S")));

    match LOG_FILE.lock() {
        Ok(mut guard) => *guard = Some(log_file.clone()),
        Err(poisoned) => *poisoned.into_inner() = Some(log_file.clone()),
    }

    log_info(&format!("Logging initialized to: {}", log_file.display()));

    Ok(log_file)
}

/// Mirror log lines to stderr. On by default since the server has no TUI to protect.
pub fn set_stderr_echo(enabled: bool) {
    STDERR_ECHO.store(enabled, Ordering::Relaxed);
}

pub fn log_error(message: &str) {
    log_with_level("ERROR", message);
}

pub fn log_info(message: &str) {
    log_with_level("INFO", message);
}

pub fn log_debug(message: &str) {
    log_with_level("DEBUG", message);
}

pub fn log_panic_info(info: &std::panic::PanicInfo) {
    let mut message = String::from("PANIC: ");

    if let Some(location) = info.location() {
        message.push_str(&format!("at {}:{}:{} - ",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    if let Some(s) = info.payload().downcast_ref::<&str>() {
        message.push_str(s);
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        message.push_str(s);
    } else {
        message.push_str("Unknown panic payload");
    }

    log_error(&message);

    let backtrace = std::backtrace::Backtrace::capture();
    log_debug(&format!("Backtrace:\n{}", backtrace));
}

pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log_panic_info(info);
        default_hook(info);
    }));
}

fn format_line(level: &str, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!("[{}] {} - {}", timestamp, level, message)
}

fn log_with_level(level: &str, message: &str) {
    let line = format_line(level, message);

    if let Some(log_file) = get_log_file_path() {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
        {
            let _ = writeln!(file, "{}", line);
        }
    }

    if STDERR_ECHO.load(Ordering::Relaxed) {
        eprintln!("{}", line);
    }
}

pub fn get_log_file_path() -> Option<PathBuf> {
    match LOG_FILE.lock() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}
