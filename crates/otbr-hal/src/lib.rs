//! `otbr-hal` – co-processor and platform abstraction for the border router.
//!
//! The bootstrap core in `otbr-ncp` never touches hardware directly.  It
//! talks to the traits defined here, so platform drivers can be swapped
//! without touching dispatch logic.
//!
//! # Modules
//!
//! - [`platform`] – [`Platform`][platform::Platform]: host severity query,
//!   stack severity install and co-processor discovery, plus the
//!   production [`SystemPlatform`][platform::SystemPlatform].
//! - [`host`] – [`ThreadHost`][host::ThreadHost]: the polymorphic host handle
//!   returned to the agent, and the [`HostSettings`][host::HostSettings]
//!   forwarded to every host variant.
//! - [`rcp_host`] – [`RcpHost`][rcp_host::RcpHost]: the host variant for a
//!   radio co-processor.
//! - [`logging`] – process-wide host and stack severities, and the bridge
//!   that forwards stack log lines into `tracing`.
//! - [`sim`] – in-process doubles for CI pipelines without a co-processor.

pub mod host;
pub mod logging;
pub mod platform;
pub mod rcp_host;
pub mod sim;

pub use host::{HostSettings, ThreadHost};
pub use platform::{ConfiguredProbe, CoprocessorProbe, Platform, SystemPlatform};
pub use rcp_host::RcpHost;
