use crate::types::GRID_SIZE;

/// Where a game stands, as far as the player is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    #[default]
    Playing,
    /// A 2048 tile was reached; the session stops accepting moves.
    Won,
    /// No direction changes the grid.
    Lost,
}

/// Copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cells: [[u32; GRID_SIZE]; GRID_SIZE],
    pub status: SessionStatus,
    pub max_tile: u32,
    pub moves: u32,
}

impl GameSnapshot {
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
            status: SessionStatus::Playing,
            max_tile: 0,
            moves: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_count_skips_empty_cells() {
        let mut snap = GameSnapshot::default();
        assert_eq!(snap.status, SessionStatus::Playing);
        assert_eq!(snap.tile_count(), 0);

        snap.cells[0] = [2, 0, 4, 0];
        snap.cells[3][3] = 2048;
        assert_eq!(snap.tile_count(), 3);
    }
}
