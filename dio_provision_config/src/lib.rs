//! This sub-crate contains the configuration consumed by the provisioning
//! sequencer: which flash tool to run and how, which part it targets, the
//! serial line settings of the reset handshake and the settle delays.
//!
//! Every field has a default matching the BB-400 digital I/O board, so an
//! empty configuration file (or none at all) is valid. Configurations are
//! stored as [RON](https://github.com/ron-rs/ron).

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod inputs;
pub mod target;
pub mod timing;
pub mod tool;

use inputs::Inputs;
use target::{SerialConfiguration, Target};
use timing::Timing;
use tool::FlashTool;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub tool: FlashTool,
    pub target: Target,
    pub serial: SerialConfiguration,
    pub timing: Timing,
    pub inputs: Inputs,
}

impl Configuration {
    /// Parses a configuration from RON source. Missing fields take their defaults.
    pub fn from_ron(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        ron::from_str(source).context("failed to parse configuration")
    }

    /// Reads and parses the configuration file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file {}", path.display()))?;
        Self::from_ron(&source)
            .with_context(|| format!("invalid configuration file {}", path.display()))
    }

    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, Default::default())
            .context("failed to serialize configuration")
    }
}
