use serde::{Deserialize, Serialize};

use crate::domain::ids::GridId;

use super::null_as_default;

/// A grid offered by the grid selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub id: GridId,
    #[serde(default)]
    pub grid_number: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
}

impl Grid {
    /// Number shown to users; falls back to the id for unnumbered grids.
    pub fn display_number(&self) -> i64 {
        self.grid_number.unwrap_or(self.id.into_inner())
    }

    pub fn label(&self) -> String {
        format!("Grid #{} - {}", self.display_number(), self.version)
    }
}
