//! Process-wide logging severities for the host process and the embedded
//! mesh stack.
//!
//! The host level is set once by the agent from its configuration and read
//! back by [`SystemPlatform`][crate::platform::SystemPlatform] when the
//! bootstrap core needs it.  The stack level is what the embedded stack
//! filters its own output against; [`stack_log`] applies that filter and
//! forwards surviving lines to `tracing` under the `otbr::stack` target.

use std::sync::atomic::{AtomicBool, AtomicI32, AtomicU8, Ordering};

use otbr_types::{BrError, LogLevel, StackLogLevel};
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info, warn};

static HOST_LOG_LEVEL: AtomicI32 = AtomicI32::new(LogLevel::Info as i32);
static STACK_LOG_LEVEL: AtomicU8 = AtomicU8::new(StackLogLevel::Info as u8);
static STACK_LOG_LEVEL_LOCKED: AtomicBool = AtomicBool::new(false);

/// Serialises tests that touch the process-wide levels.
#[cfg(test)]
pub(crate) static TEST_GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Set the host process's logging severity.
pub fn set_host_log_level(level: LogLevel) {
    HOST_LOG_LEVEL.store(level.as_raw(), Ordering::SeqCst);
}

/// Current host process logging severity.
pub fn host_log_level() -> LogLevel {
    LogLevel::from_raw(HOST_LOG_LEVEL.load(Ordering::SeqCst)).unwrap_or(LogLevel::Info)
}

/// Install `level` as the embedded stack's logging severity.
///
/// # Errors
///
/// Returns [`BrError::InvalidState`] once [`lock_stack_log_level`] has been
/// called; the stack then keeps whatever level it was built with.
pub fn set_stack_log_level(level: StackLogLevel) -> Result<(), BrError> {
    if STACK_LOG_LEVEL_LOCKED.load(Ordering::SeqCst) {
        return Err(BrError::InvalidState(
            "stack log level is fixed and cannot be changed at runtime".to_string(),
        ));
    }
    STACK_LOG_LEVEL.store(level.as_raw(), Ordering::SeqCst);
    Ok(())
}

/// Current embedded stack logging severity.
pub fn stack_log_level() -> StackLogLevel {
    StackLogLevel::from_raw(STACK_LOG_LEVEL.load(Ordering::SeqCst)).unwrap_or(StackLogLevel::Info)
}

/// Freeze the stack level, for builds where the stack's level is a
/// compile-time constant.
pub fn lock_stack_log_level() {
    STACK_LOG_LEVEL_LOCKED.store(true, Ordering::SeqCst);
}

#[cfg(test)]
fn unlock_stack_log_level() {
    STACK_LOG_LEVEL_LOCKED.store(false, Ordering::SeqCst);
}

/// `tracing` filter equivalent of a host level.
pub fn host_level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Emerg | LogLevel::Alert | LogLevel::Crit | LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warning => LevelFilter::WARN,
        LogLevel::Notice | LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
    }
}

/// Whether a stack line at `level` passes the installed stack level.
pub fn stack_log_enabled(level: StackLogLevel) -> bool {
    level != StackLogLevel::None && level <= stack_log_level()
}

/// Emit one log line on behalf of the embedded stack.
///
/// Lines below the installed stack level are dropped here, before `tracing`
/// sees them.
pub fn stack_log(level: StackLogLevel, region: &str, message: &str) {
    if !stack_log_enabled(level) {
        return;
    }
    match level {
        StackLogLevel::None => {}
        StackLogLevel::Crit => error!(target: "otbr::stack", region, "{message}"),
        StackLogLevel::Warn => warn!(target: "otbr::stack", region, "{message}"),
        StackLogLevel::Note | StackLogLevel::Info => {
            info!(target: "otbr::stack", region, "{message}")
        }
        StackLogLevel::Debg => debug!(target: "otbr::stack", region, "{message}"),
    }
}
