use colored::Colorize;
use std::error::Error as _;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Input scanning
// =============================================================================

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("expected an integer on input, found end of input")]
    Empty,

    #[error("invalid integer '{token}': {reason}")]
    Invalid { token: String, reason: String },

    #[error("failed to read input")]
    Io(#[from] io::Error),
}

impl ScanError {
    pub fn invalid(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            token: token.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Record configuration
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// =============================================================================
// Top level
// =============================================================================

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write output")]
    Io(#[from] io::Error),
}

/// Colour only when stderr is a terminal and `NO_COLOR` is unset.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal()
}

/// Renders an error and its source chain as `error: outer: inner: ...`.
pub fn report(error: &AppError, color: bool) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    let prefix = if color {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    };
    format!("{prefix} {message}")
}

/// Process status for a finished run: 0, or 1 after writing the report.
pub fn exit_status<T>(result: Result<T, AppError>, mut stderr: impl Write, color: bool) -> u8 {
    match result {
        Ok(_) => 0,
        Err(err) => {
            // nowhere left to report a failing stderr
            let _ = writeln!(stderr, "{}", report(&err, color));
            1
        }
    }
}
