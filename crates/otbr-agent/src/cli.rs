//! Command-line flags.  Flags override the config file and `OTBR_*`
//! environment variables.

use std::path::PathBuf;

use clap::Parser;
use otbr_types::LogLevel;

use crate::config::Config;

/// Border router agent for a mesh radio co-processor.
#[derive(Debug, Parser)]
#[command(name = "otbr-agent", version)]
#[command(about = "Border router agent for a low-power mesh radio co-processor")]
pub struct Cli {
    /// Mesh network interface name.
    #[arg(short = 'I', long = "thread-ifname", value_name = "IFNAME")]
    pub interface_name: Option<String>,

    /// Backbone (infrastructure) interface name.
    #[arg(short = 'B', long = "backbone-ifname", value_name = "IFNAME")]
    pub backbone_interface: Option<String>,

    /// Log level, syslog numbering (0 = emerg … 7 = debug).
    #[arg(short = 'd', long = "debug-level", value_parser = clap::value_parser!(i32).range(0..=7))]
    pub debug_level: Option<i32>,

    /// Log everything (same as `-d 7`).
    #[arg(short, long)]
    pub verbose: bool,

    /// Validate configuration and discover the co-processor, then exit.
    #[arg(long)]
    pub dry_run: bool,

    /// Attach to a previously commissioned network on startup.
    #[arg(long, value_name = "BOOL")]
    pub auto_attach: Option<bool>,

    /// Config file path (default: /etc/otbr/agent.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Radio URLs, e.g. `spinel+hdlc+uart:///dev/ttyUSB0`.
    #[arg(value_name = "RADIO_URL")]
    pub radio_urls: Vec<String>,
}

impl Cli {
    /// Overlay the flags that were given onto `cfg`.
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(name) = &self.interface_name {
            cfg.interface_name = name.clone();
        }
        if let Some(name) = &self.backbone_interface {
            cfg.backbone_interface = Some(name.clone());
        }
        if let Some(level) = self.debug_level.and_then(LogLevel::from_raw) {
            cfg.log_level = level;
        }
        if self.verbose {
            cfg.log_level = LogLevel::Debug;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if let Some(auto_attach) = self.auto_attach {
            cfg.auto_attach = auto_attach;
        }
        if !self.radio_urls.is_empty() {
            cfg.radio_urls = self.radio_urls.clone();
        }
    }
}
