use thiserror::Error;
use tracing::{info, warn};

use crate::domain::ids::GridId;
use crate::domain::source::StatisticsSource;
use crate::domain::statistics::Grid;

/// Leaderboard size shown by the dashboard (the API itself defaults to 100).
pub const DASHBOARD_LEADERBOARD_LIMIT: u32 = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("unknown grid: {0}")]
    UnknownGrid(GridId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Global,
    Grid,
    Temporal,
    Leaderboard,
}

impl Tab {
    /// Whether the tab shows data for the selected grid.
    pub fn needs_grid(self) -> bool {
        !matches!(self, Tab::Global)
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Global => "Global statistics",
            Tab::Grid => "Grid statistics",
            Tab::Temporal => "Temporal analysis",
            Tab::Leaderboard => "Leaderboard",
        }
    }
}

/// What a tab needs fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewRequest {
    Global,
    Grid(GridId),
    Temporal(GridId),
    Leaderboard {
        grid: GridId,
        grid_number: i64,
        limit: u32,
    },
}

/// Dashboard navigation: the grid list, the selected grid and the active tab.
#[derive(Debug, Clone)]
pub struct Shell {
    grids: Vec<Grid>,
    selected: Option<GridId>,
    tab: Tab,
    leaderboard_limit: u32,
    loaded: bool,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub fn new() -> Self {
        Self {
            grids: Vec::new(),
            selected: None,
            tab: Tab::default(),
            leaderboard_limit: DASHBOARD_LEADERBOARD_LIMIT,
            loaded: false,
        }
    }

    pub fn with_leaderboard_limit(mut self, limit: u32) -> Self {
        self.leaderboard_limit = limit;
        self
    }

    /// Fetch the grid list. Runs once; later calls are no-ops.
    ///
    /// A failed fetch is logged and leaves the list empty.
    pub async fn load(&mut self, source: &dyn StatisticsSource) {
        if self.loaded {
            return;
        }
        self.loaded = true;

        match source.list_grids().await {
            Ok(grids) => {
                info!(count = grids.len(), "loaded grid list");
                self.set_grids(grids);
            }
            Err(err) => warn!(error = %err, "failed to load grid list"),
        }
    }

    /// Replace the grid list, selecting the first grid when none is selected
    /// or the selected one disappeared.
    pub fn set_grids(&mut self, grids: Vec<Grid>) {
        self.grids = grids;
        let still_there = self
            .selected
            .is_some_and(|id| self.grids.iter().any(|g| g.id == id));
        if !still_there {
            self.selected = self.grids.first().map(|g| g.id);
        }
    }

    pub fn grids(&self) -> &[Grid] {
        &self.grids
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn select_grid(&mut self, id: GridId) -> Result<(), ShellError> {
        if !self.grids.iter().any(|g| g.id == id) {
            return Err(ShellError::UnknownGrid(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn selected_grid(&self) -> Option<&Grid> {
        let id = self.selected?;
        self.grids.iter().find(|g| g.id == id)
    }

    /// Request for the active tab, `None` when it needs a grid and none is selected.
    pub fn active_request(&self) -> Option<ViewRequest> {
        self.request_for(self.tab)
    }

    pub fn request_for(&self, tab: Tab) -> Option<ViewRequest> {
        if !tab.needs_grid() {
            return Some(ViewRequest::Global);
        }

        let grid = self.selected_grid()?;
        Some(match tab {
            Tab::Global => ViewRequest::Global,
            Tab::Grid => ViewRequest::Grid(grid.id),
            Tab::Temporal => ViewRequest::Temporal(grid.id),
            Tab::Leaderboard => ViewRequest::Leaderboard {
                grid: grid.id,
                grid_number: grid.display_number(),
                limit: self.leaderboard_limit,
            },
        })
    }
}
