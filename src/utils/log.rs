//! Logging utilities with colored module prefixes.
//!
//! Provides the `log!` macro for formatted terminal output. Each message
//! carries a `[module]` prefix colored by module kind, and is truncated
//! to the terminal width so long paths never wrap mid-line.
//!
//! # Example
//!
//! ```ignore
//! log!("build"; "rendering {} articles", count);
//! log!("error"; "{}: {:#}", path.display(), err);
//! ```

use colored::{ColoredString, Colorize};
use crossterm::terminal::size;
use std::{
    io::{Write, stdout},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Get terminal width, cached after first call.
/// Falls back to 120 columns if detection fails.
fn terminal_width() -> usize {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120)) as usize
}

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::utils::log::log($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored module prefix.
///
/// Messages longer than the terminal width are truncated at a valid
/// UTF-8 boundary.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);

    // "[module] " occupies module.len() + 3 columns
    let max_msg_len = terminal_width().saturating_sub(module.len() + 3);
    let message = truncate_str(message, max_msg_len);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type.
fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module {
        "serve" => prefix.bright_blue().bold(),
        "watch" => prefix.bright_green().bold(),
        "error" | "warn" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to fit within `max_len` bytes.
///
/// The cut lands on the nearest character boundary so the result stays
/// valid UTF-8.
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
