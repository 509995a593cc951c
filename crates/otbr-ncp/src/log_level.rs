//! Host-to-stack logging severity translation.
//!
//! The embedded stack's ladder is coarser than the host's, so several host
//! levels collapse onto one stack level.  The mapping never fails and never
//! yields [`StackLogLevel::None`]; raw host values outside the known range
//! land in the most verbose bucket.
//!
//! | Host | Stack |
//! |---|---|
//! | `Emerg`, `Alert`, `Crit` | `Crit` |
//! | `Error`, `Warning` | `Warn` |
//! | `Notice` | `Note` |
//! | `Info` | `Info` |
//! | `Debug`, unrecognised | `Debg` |

use otbr_types::{LogLevel, StackLogLevel};

/// Translate a host severity into the stack severity to install.
pub fn to_stack_log_level(level: LogLevel) -> StackLogLevel {
    match level {
        LogLevel::Emerg | LogLevel::Alert | LogLevel::Crit => StackLogLevel::Crit,
        LogLevel::Error | LogLevel::Warning => StackLogLevel::Warn,
        LogLevel::Notice => StackLogLevel::Note,
        LogLevel::Info => StackLogLevel::Info,
        LogLevel::Debug => StackLogLevel::Debg,
    }
}

/// Translate a raw syslog-numbered host severity.  Unknown values map to
/// [`StackLogLevel::Debg`].
pub fn raw_to_stack_log_level(raw: i32) -> StackLogLevel {
    LogLevel::from_raw(raw).map_or(StackLogLevel::Debg, to_stack_log_level)
}
