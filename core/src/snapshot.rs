use alloc::string::String;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub board: Array2<Option<Color>>,
    pub current_color: Color,
    pub score: u32,
    pub level: u32,
    pub lives: u8,
    pub power_up_cells: Vec<Coord2>,
    pub game_over: bool,
}

impl Snapshot {
    pub fn from_engine<R: RandomSource>(engine: &PaintEngine<R>) -> Self {
        let size = engine.size();
        let mut board = Array2::from_elem(size.to_nd_index(), None);

        let (x_end, y_end) = size;
        for x in 0..x_end {
            for y in 0..y_end {
                board[(x, y).to_nd_index()] = engine.cell_at((x, y));
            }
        }

        Self {
            size,
            board,
            current_color: engine.current_color(),
            score: engine.score(),
            level: engine.level(),
            lives: engine.lives(),
            power_up_cells: engine.power_up_cells().collect(),
            game_over: engine.is_game_over(),
        }
    }

    pub fn cell_at(&self, (x, y): Coord2) -> Option<Color> {
        self.board
            .get([usize::from(x), usize::from(y)])
            .copied()
            .flatten()
    }

    pub fn validate(&self) -> Result<()> {
        let expected = (usize::from(BOARD_SIZE.0), usize::from(BOARD_SIZE.1));
        if self.size != BOARD_SIZE || self.board.dim() != expected {
            return Err(GameError::InvalidSnapshot);
        }

        if self.level == 0 {
            return Err(GameError::InvalidSnapshot);
        }

        // power-ups only ever land on painted cells
        if self
            .power_up_cells
            .iter()
            .any(|&coords| validate_coords(coords).is_err() || self.cell_at(coords).is_none())
        {
            return Err(GameError::InvalidSnapshot);
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| {
            log::warn!("Failed to encode snapshot: {}", err);
            GameError::InvalidSnapshot
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json).map_err(|err| {
            log::warn!("Failed to decode snapshot: {}", err);
            GameError::InvalidSnapshot
        })?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}
