//! Players and their seat colors

use std::fmt;

/// Display tag for a player seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    Blue,
    Pink,
    Green,
    Orange,
    Purple,
}

impl PlayerColor {
    /// Seat colors in assignment order
    pub const PALETTE: [Self; 5] = [
        Self::Blue,
        Self::Pink,
        Self::Green,
        Self::Orange,
        Self::Purple,
    ];

    /// Color for the seat at `index`, wrapping around the palette
    #[must_use]
    pub const fn for_seat(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    /// RGB components
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Blue => (0x3b, 0x82, 0xf6),
            Self::Pink => (0xec, 0x48, 0x99),
            Self::Green => (0x22, 0xc5, 0x5e),
            Self::Orange => (0xf9, 0x73, 0x16),
            Self::Purple => (0xa8, 0x55, 0xf7),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Pink => "pink",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Purple => "purple",
        }
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.rgb();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// A participant in the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: u32,
    pub color: PlayerColor,
    /// Tournaments won
    pub trophies: u32,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            name: name.into(),
            score: 0,
            color,
            trophies: 0,
        }
    }

    /// Default name for the seat at `index` (zero-based)
    #[must_use]
    pub fn default_name(index: usize) -> String {
        format!("Player {}", index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_colors_follow_palette() {
        assert_eq!(PlayerColor::for_seat(0), PlayerColor::Blue);
        assert_eq!(PlayerColor::for_seat(4), PlayerColor::Purple);
        assert_eq!(PlayerColor::for_seat(5), PlayerColor::Blue);
    }

    #[test]
    fn color_display_is_hex() {
        assert_eq!(PlayerColor::Blue.to_string(), "#3b82f6");
        assert_eq!(PlayerColor::Orange.to_string(), "#f97316");
    }

    #[test]
    fn new_player_starts_empty() {
        let player = Player::new("Ana", PlayerColor::Pink);
        assert_eq!(player.score, 0);
        assert_eq!(player.trophies, 0);
        assert_eq!(Player::default_name(2), "Player 3");
    }
}
