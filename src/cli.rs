//! Command-line parsing for the renderer binary.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::adapter::ReceiverConfig;

pub const USAGE: &str = "usage: osc-wireframe <objfile.obj> [--host HOST] [--port PORT] [--log PATH]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mesh_path: PathBuf,
    /// `None` when the receiver is disabled.
    pub receiver: Option<ReceiverConfig>,
    pub log_path: Option<PathBuf>,
}

/// Parse arguments (without the program name) on top of environment defaults.
pub fn parse_args(args: &[String]) -> Result<Config> {
    let receiver = if ReceiverConfig::is_disabled() {
        None
    } else {
        Some(ReceiverConfig::from_env())
    };
    let log_path = std::env::var("OSC_WIREFRAME_LOG")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);
    parse_args_with(args, receiver, log_path)
}

/// Parse arguments over explicit defaults (no environment access).
pub fn parse_args_with(
    args: &[String],
    mut receiver: Option<ReceiverConfig>,
    mut log_path: Option<PathBuf>,
) -> Result<Config> {
    let mut mesh_path: Option<PathBuf> = None;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--host" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --host\n{USAGE}"))?;
                if let Some(rx) = receiver.as_mut() {
                    rx.host = v.clone();
                }
            }
            "--port" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --port\n{USAGE}"))?;
                let port = v
                    .parse::<u16>()
                    .map_err(|_| anyhow!("invalid --port value: {}", v))?;
                if let Some(rx) = receiver.as_mut() {
                    rx.port = port;
                }
            }
            "--log" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log\n{USAGE}"))?;
                log_path = Some(PathBuf::from(v));
            }
            other if other.starts_with("--") => {
                return Err(anyhow!("unknown argument: {}\n{USAGE}", other));
            }
            other => {
                if mesh_path.is_some() {
                    return Err(anyhow!("unexpected extra argument: {}\n{USAGE}", other));
                }
                mesh_path = Some(PathBuf::from(other));
            }
        }
        i += 1;
    }

    let mesh_path = mesh_path.ok_or_else(|| anyhow!("{USAGE}"))?;
    Ok(Config {
        mesh_path,
        receiver,
        log_path,
    })
}
