use core::fmt;
use serde::{Deserialize, Serialize};

/// Paint the brush collapses into when observed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// Fixed palette, in draw order.
    pub const PALETTE: [Color; 4] = [Self::Red, Self::Blue, Self::Green, Self::Yellow];

    /// Palette entry for a draw index, wrapping out-of-range indices.
    pub const fn from_index(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Blue => 1,
            Self::Green => 2,
            Self::Yellow => 3,
        }
    }

    /// Lowercase name, usable directly as a CSS color.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_indices_are_consistent() {
        for (i, color) in Color::PALETTE.iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(Color::from_index(i), *color);
        }
        assert_eq!(Color::from_index(5), Color::Blue);
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&Color::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");
        assert_eq!(alloc::format!("{}", Color::Green), "green");
    }
}
