//! Output macros for user-facing messages.
//!
//! Every macro routes through one switch: in debug mode the text goes to
//! `tracing` at the matching level, otherwise it is printed plainly (errors
//! to stderr). Debug mode is on when `TASKMIRROR_DEBUG` or `RUST_LOG` is set;
//! the check runs once and is cached.
//!
//! | macro           | prefix | level  | plain output |
//! |-----------------|--------|--------|--------------|
//! | `msg_print!`    |        | info   | stdout       |
//! | `msg_success!`  | ✅     | info   | stdout       |
//! | `msg_info!`     | ℹ️     | info   | stdout       |
//! | `msg_warning!`  | ⚠️     | warn   | stdout       |
//! | `msg_error!`    | ❌     | error  | stderr       |
//! | `msg_debug!`    | 🔍     | debug  | suppressed   |
//!
//! Passing `true` as a second argument surrounds the text with blank lines.
//!
//! ```rust
//! use taskmirror::{msg_success, msg_error_anyhow};
//! use taskmirror::libs::messages::Message;
//!
//! msg_success!(Message::TaskCreated("Buy milk".to_string()));
//! let err = msg_error_anyhow!(Message::TaskNotFound(7));
//! assert!(err.to_string().contains("#7"));
//! ```

use std::sync::OnceLock;

pub const DEBUG_ENV: &str = "TASKMIRROR_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[doc(hidden)]
#[macro_export]
macro_rules! __msg_route {
    ($level:ident, $print:ident, $prefix:expr, $msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("{}{}", $prefix, $msg);
        } else {
            $print!("{}{}", $prefix, $msg);
        }
    };
    ($level:ident, $print:ident, $prefix:expr, $msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("\n{}{}\n", $prefix, $msg);
        } else {
            $print!("\n{}{}\n", $prefix, $msg);
        }
    };
}

/// Prints a message without prefix.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "✅ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "✅ ", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "ℹ️ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "ℹ️ ", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_route!(warn, println, "⚠️ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(warn, println, "⚠️ ", $msg, true)
    };
}

/// Errors go to stderr outside debug mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_route!(error, eprintln, "❌ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(error, eprintln, "❌ ", $msg, true)
    };
}

/// Only emitted in debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
