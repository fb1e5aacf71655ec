//! Session scripts
//!
//! A session script is a JSON document describing the grid and the ordered
//! list of user commands to perform on it:
//!
//! ```json
//! {
//!   "style": "add",
//!   "width": 5,
//!   "height": 5,
//!   "commands": [
//!     { "op": "paint", "x": 2, "y": 2, "layer": "red" },
//!     { "op": "special" },
//!     { "op": "undo" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Capacities;
use crate::error::{PaintError, Result};
use crate::stores::DrawStyle;

fn default_size() -> usize {
    5
}

/// One user command in a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum ScriptCommand {
    /// Paint a layer with the current brush
    Paint { x: usize, y: usize, layer: String },
    /// Erase with a layer using the current brush
    Erase { x: usize, y: usize, layer: String },
    /// Grid-wide special
    Special,
    Undo,
    Redo,
    /// Grow (positive) or shrink (negative) the brush
    Brush { delta: i32 },
}

/// A complete scripted session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub style: DrawStyle,

    #[serde(default = "default_size")]
    pub width: usize,

    #[serde(default = "default_size")]
    pub height: usize,

    /// Timestamp used when rendering the final grid
    #[serde(default)]
    pub timestamp: u64,

    #[serde(default)]
    pub capacities: Capacities,

    pub commands: Vec<ScriptCommand>,
}

impl Session {
    /// Parse and validate a session from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let session: Session = serde_json::from_str(json)?;
        session.validate()?;
        Ok(session)
    }

    /// Load and validate a session file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Check the grid has at least one cell
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PaintError::InvalidScript {
                reason: format!("grid must be non-empty, got {}x{}", self.width, self.height),
            });
        }
        Ok(())
    }
}
