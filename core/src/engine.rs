use alloc::collections::BTreeSet;
use ndarray::Array2;
use rand::rngs::SmallRng;

use crate::*;

/// Owns the canvas, the score keeping and the brush's random source.
#[derive(Clone, Debug)]
pub struct PaintEngine<R = SmallRng> {
    config: PainterConfig,
    source: R,
    board: Array2<Option<Color>>,
    revealed_count: CellCount,
    current_color: Color,
    score: u32,
    level: u32,
    lives: u8,
    power_up_cells: BTreeSet<Coord2>,
    game_over: bool,
}

impl PaintEngine<SmallRng> {
    /// Engine with the default rules and a seeded fast generator.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(seeded_source(seed))
    }
}

impl<R: RandomSource> PaintEngine<R> {
    pub fn new(source: R) -> Self {
        Self::build(PainterConfig::default(), source)
    }

    pub fn with_config(config: PainterConfig, source: R) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, source))
    }

    fn build(config: PainterConfig, source: R) -> Self {
        let mut engine = Self {
            config,
            source,
            board: Array2::default(BOARD_SIZE.to_nd_index()),
            revealed_count: 0,
            current_color: Color::PALETTE[0],
            score: 0,
            level: 1,
            lives: config.starting_lives,
            power_up_cells: BTreeSet::new(),
            game_over: false,
        };
        engine.initialize();
        engine
    }

    pub fn config(&self) -> &PainterConfig {
        &self.config
    }

    pub fn size(&self) -> Coord2 {
        BOARD_SIZE
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Score at which the next level-up happens.
    pub fn next_level_threshold(&self) -> u32 {
        self.config.threshold_for(self.level)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn is_board_full(&self) -> bool {
        self.revealed_count == mult(BOARD_SIZE.0, BOARD_SIZE.1)
    }

    /// Color painted at `coords`, `None` when unrevealed or off the board.
    pub fn cell_at(&self, coords: Coord2) -> Option<Color> {
        self.board.get(coords.to_nd_index()).copied().flatten()
    }

    pub fn is_power_up_cell(&self, coords: Coord2) -> bool {
        self.power_up_cells.contains(&coords)
    }

    pub fn power_up_cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.power_up_cells.iter().copied()
    }

    /// Colors of the already revealed orthogonal neighbors of `coords`.
    pub fn adjacent_colors(&self, coords: Coord2) -> impl Iterator<Item = Color> + '_ {
        self.board
            .iter_neighbors(coords)
            .filter_map(|pos| self.board[pos.to_nd_index()])
    }

    /// Clears the canvas and all bookkeeping, then observes a fresh color.
    pub fn initialize(&mut self) {
        self.board.fill(None);
        self.revealed_count = 0;
        self.score = 0;
        self.level = 1;
        self.lives = self.config.starting_lives;
        self.power_up_cells.clear();
        self.game_over = false;
        self.roll_color();
    }

    pub fn restart(&mut self) {
        log::debug!("Restarting, discarding {} painted cells", self.revealed_count);
        self.initialize();
    }

    /// Observes the brush: draws a palette color and makes it current.
    pub fn roll_color(&mut self) -> Color {
        self.current_color = Color::from_index(self.source.draw_index(Color::PALETTE.len()));
        self.current_color
    }

    /// Stops accepting reveals until the next restart.
    pub fn end_game(&mut self) {
        if !self.game_over {
            log::debug!("Game ended at score {} level {}", self.score, self.level);
            self.game_over = true;
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = validate_coords(coords)?;
        self.check_not_finished()?;

        if self.board[coords.to_nd_index()].is_some() {
            return Ok(RevealOutcome::NoChange);
        }

        let color = self.roll_color();
        self.board[coords.to_nd_index()] = Some(color);
        self.revealed_count += 1;

        let points = self.score_reveal(coords, color);
        let power_up = self.check_power_up(coords);
        let leveled_up = self.check_level_up();

        log::debug!(
            "Painted {:?} {} for {} points, score {}",
            coords,
            color,
            points,
            self.score
        );

        Ok(RevealOutcome::Painted {
            color,
            points,
            power_up,
            leveled_up,
        })
    }

    fn score_reveal(&mut self, coords: Coord2, color: Color) -> u32 {
        let mut matched = false;
        let mut seen = 0u8;
        for adjacent in self.adjacent_colors(coords) {
            matched |= adjacent == color;
            seen |= 1 << adjacent.index();
        }

        let mut points = 0;
        if matched {
            points += 1;
        }
        if seen.count_ones() == 4 {
            points += 5;
        }
        self.score = self.score.saturating_add(points);
        points
    }

    fn check_power_up(&mut self, coords: Coord2) -> bool {
        let hit = self.source.draw_chance(self.config.power_up_chance);
        if hit {
            self.power_up_cells.insert(coords);
        }
        hit
    }

    /// At most one level per call, even if the score skipped several thresholds.
    fn check_level_up(&mut self) -> bool {
        if self.score < self.next_level_threshold() {
            return false;
        }

        self.level += 1;
        let color = self.roll_color();
        log::info!("Reached level {}, brush is now {}", self.level, color);
        true
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.game_over {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

pub fn validate_coords(coords: Coord2) -> Result<Coord2> {
    if coords.0 < BOARD_SIZE.0 && coords.1 < BOARD_SIZE.1 {
        Ok(coords)
    } else {
        Err(GameError::InvalidCoords)
    }
}
