//! `otbr-ncp` – co-processor bootstrap for the border-router agent.
//!
//! # Modules
//!
//! - [`controller`] – [`ThreadController`][controller::ThreadController]:
//!   validates radio URLs, installs the stack log level, discovers the
//!   attached co-processor and builds the matching host.
//! - [`log_level`] – total mapping from host severities to stack severities.
//! - [`fatal`] – [`FatalError`][fatal::FatalError] and
//!   [`die_now`][fatal::die_now], the startup-only abort path.

pub mod controller;
pub mod fatal;
pub mod log_level;

pub use controller::ThreadController;
pub use fatal::{FatalError, FatalKind, die_now};
pub use log_level::{raw_to_stack_log_level, to_stack_log_level};
