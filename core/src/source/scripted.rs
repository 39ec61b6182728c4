use alloc::collections::VecDeque;

use super::*;
use crate::Color;

/// Replays a fixed sequence of colors and power-up decisions.
///
/// Once a queue runs dry the source falls back to the first palette color and
/// to "no power-up", so scenarios only need to script the draws they care
/// about.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedSource {
    colors: VecDeque<usize>,
    chances: VecDeque<bool>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_colors(colors: impl IntoIterator<Item = Color>) -> Self {
        let mut source = Self::new();
        source.extend_colors(colors);
        source
    }

    pub fn extend_colors(&mut self, colors: impl IntoIterator<Item = Color>) -> &mut Self {
        self.colors.extend(colors.into_iter().map(Color::index));
        self
    }

    pub fn push_chance(&mut self, hit: bool) -> &mut Self {
        self.chances.push_back(hit);
        self
    }

    pub fn remaining_colors(&self) -> usize {
        self.colors.len()
    }
}

impl RandomSource for ScriptedSource {
    fn draw_index(&mut self, len: usize) -> usize {
        self.colors.pop_front().unwrap_or(0) % len
    }

    /// Certain outcomes (`0.0` and `1.0`) still consume a scripted entry but
    /// ignore its value.
    fn draw_chance(&mut self, probability: f64) -> bool {
        let scripted = self.chances.pop_front().unwrap_or(false);
        if probability <= 0.0 {
            false
        } else if probability >= 1.0 {
            true
        } else {
            scripted
        }
    }
}
