//! Observation hooks for collapse and elimination events

/// Callback seam notified as the solver mutates the wave
///
/// Implementations must tolerate events arriving before the first collapse:
/// boundary bans eliminate candidates while the step counter is still zero.
pub trait SolveObserver {
    /// Called when a cell is committed to a single tile
    fn on_collapse(&mut self, cell: [usize; 2], tile: usize) {
        let _ = (cell, tile);
    }

    /// Called when a tile is removed from a cell's candidates
    fn on_elimination(&mut self, cell: [usize; 2], tile: usize) {
        let _ = (cell, tile);
    }
}

/// A single recorded solver mutation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveEvent {
    /// A cell was committed to one tile
    Collapsed {
        /// Grid position of the collapsed cell
        cell: [usize; 2],
        /// Tile id the cell was committed to
        tile: usize,
    },
    /// A candidate was removed from a cell
    Eliminated {
        /// Grid position of the affected cell
        cell: [usize; 2],
        /// Tile id removed from the candidates
        tile: usize,
    },
}

/// In-memory recorder of solver events in arrival order
#[derive(Clone, Debug)]
pub struct EventLog {
    events: Vec<SolveEvent>,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    /// Create an empty log
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Recorded events in arrival order
    pub fn events(&self) -> &[SolveEvent] {
        &self.events
    }

    /// Number of collapse events recorded
    pub fn collapse_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SolveEvent::Collapsed { .. }))
            .count()
    }

    /// Number of elimination events recorded
    pub fn elimination_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SolveEvent::Eliminated { .. }))
            .count()
    }
}

impl SolveObserver for EventLog {
    fn on_collapse(&mut self, cell: [usize; 2], tile: usize) {
        self.events.push(SolveEvent::Collapsed { cell, tile });
    }

    fn on_elimination(&mut self, cell: [usize; 2], tile: usize) {
        self.events.push(SolveEvent::Eliminated { cell, tile });
    }
}
