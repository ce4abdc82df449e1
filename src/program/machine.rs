use crate::config::Playlist;

use super::ProgramId;

/// Cyclic program selector
///
/// Tracks the active entry of the playlist and whether its entry action has
/// run since it became active. Advancing clears the entry flag, so coming
/// back to a program later runs its setup again.
#[derive(Debug, Clone)]
pub struct ProgramMachine {
    programs: Playlist,
    position: usize,
    entered: bool,
}

impl ProgramMachine {
    /// Create a machine positioned on the first program
    ///
    /// An empty playlist is replaced by every program in order.
    pub fn new(programs: Playlist) -> Self {
        let programs = if programs.is_empty() {
            ProgramId::ALL.iter().copied().collect()
        } else {
            programs
        };
        Self {
            programs,
            position: 0,
            entered: false,
        }
    }

    /// Program currently active
    pub fn current(&self) -> ProgramId {
        self.programs
            .get(self.position)
            .copied()
            .unwrap_or(ProgramId::Off)
    }

    /// Index of the active program in the playlist
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of programs in the playlist
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn programs(&self) -> &[ProgramId] {
        &self.programs
    }

    /// Check if the active program still has to run its entry action
    pub const fn needs_entry(&self) -> bool {
        !self.entered
    }

    pub fn mark_entered(&mut self) {
        self.entered = true;
    }

    /// Move to the next program
    ///
    /// Returns `true` if the playlist wrapped around to the first program.
    pub fn advance(&mut self) -> bool {
        self.entered = false;
        self.position += 1;
        if self.position >= self.programs.len() {
            self.position = 0;
            return true;
        }
        false
    }

    /// Jump to a program
    ///
    /// Returns `false` if the program is not in the playlist.
    pub fn select(&mut self, program: ProgramId) -> bool {
        let Some(position) = self.programs.iter().position(|p| *p == program) else {
            return false;
        };
        self.position = position;
        self.entered = false;
        true
    }
}
