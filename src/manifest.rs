//! Project manifest (chop.yaml) parsing.
//!
//! The manifest holds defaults for where sprites are written, which image
//! sits next to a stylesheet, and how grid offsets are computed. Every field
//! is optional; command-line flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ChopError, Result};
use crate::layout::AxisMode;

/// Manifest file looked up in the working directory when `--config` is absent.
pub const MANIFEST_NAME: &str = "chop.yaml";

/// Project manifest loaded from chop.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory for chopped sprites.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Spritesheet image expected next to a stylesheet.
    #[serde(default = "default_sheet_image")]
    pub sheet_image: String,

    /// How grid cell offsets are scaled.
    #[serde(default)]
    pub grid_axes: AxisMode,
}

fn default_output() -> PathBuf {
    PathBuf::from("images")
}

fn default_sheet_image() -> String {
    "pokesprite.png".to_string()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            sheet_image: default_sheet_image(),
            grid_axes: AxisMode::default(),
        }
    }
}

impl Manifest {
    /// Load manifest from a chop.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ChopError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| ChopError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check chop.yaml syntax".to_string()),
        })
    }

    /// Resolve the manifest for a run.
    ///
    /// An explicit path must exist. Without one, `chop.yaml` in `dir` is used
    /// when present, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let implicit = dir.join(MANIFEST_NAME);
        if implicit.is_file() {
            Self::load(&implicit)
        } else {
            Ok(Self::default())
        }
    }
}
