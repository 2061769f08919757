//! Nicely formatted output for the `hydrogen-output` logger.

use std::fmt;

use log;

const BANNER_LENGTH: usize = 79;

/// Logs an error to both the default and the `hydrogen-output` loggers.
macro_rules! hydrogen_error {
    ($fmt:expr $(, $($arg:tt)*)?) => {
        log::error!($fmt, $($($arg)*)?);
        log::error!(target: "hydrogen-output", $fmt, $($($arg)*)?);
    }
}

/// Logs a warning to the `hydrogen-output` logger.
macro_rules! hydrogen_warn {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::warn!(target: "hydrogen-output", $fmt, $($($arg)*)?); }
}

/// Logs a main output line to the `hydrogen-output` logger.
macro_rules! hydrogen_output {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::info!(target: "hydrogen-output", $fmt, $($($arg)*)?); }
}

pub(crate) use {hydrogen_error, hydrogen_output, hydrogen_warn};

/// Logs a nicely formatted section title to the `hydrogen-output` logger.
pub(crate) fn log_title(title: &str) {
    let length = title.chars().count().max(BANNER_LENGTH - 6);
    let bar = "─".repeat(length);
    hydrogen_output!("┌──{bar}──┐");
    hydrogen_output!("│§ {title:^length$} §│");
    hydrogen_output!("└──{bar}──┘");
}

/// Writes a nicely formatted subtitle.
pub(crate) fn write_subtitle(f: &mut fmt::Formatter<'_>, subtitle: &str) -> fmt::Result {
    let length = subtitle.chars().count();
    let bar = "═".repeat(length);
    writeln!(f, "{subtitle}")?;
    writeln!(f, "{bar}")?;
    Ok(())
}

/// Turns a boolean into a string of `yes` or `no`.
pub(crate) fn nice_bool(b: bool) -> String {
    if b {
        "yes".to_string()
    } else {
        "no".to_string()
    }
}

/// A trait for logging outputs nicely, line by line.
pub(crate) trait HydrogenOutput: fmt::Display {
    /// Logs display output nicely.
    fn log_output_display(&self) {
        let lines = self.to_string();
        lines.lines().for_each(|line| {
            hydrogen_output!("{line}");
        })
    }
}

// Blanket implementation
impl<T> HydrogenOutput for T where T: fmt::Display {}

#[cfg(test)]
mod format_tests {
    use std::fmt;

    use super::{nice_bool, write_subtitle};

    struct Summary(&'static str);

    impl fmt::Display for Summary {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_subtitle(f, self.0)?;
            writeln!(f, "body")
        }
    }

    #[test]
    fn test_format_subtitle() {
        let out = Summary("Radial ψ").to_string();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines, ["Radial ψ", "════════", "body"]);
        assert_eq!(nice_bool(true), "yes");
        assert_eq!(nice_bool(false), "no");
    }
}
