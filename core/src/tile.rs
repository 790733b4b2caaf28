use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// The four selectable tiles of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Tile {
    pub const ALL: [Tile; 4] = [Tile::Red, Tile::Green, Tile::Blue, Tile::Yellow];

    pub const fn index(self) -> u8 {
        use Tile::*;
        match self {
            Red => 0,
            Green => 1,
            Blue => 2,
            Yellow => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        use Tile::*;
        match self {
            Red => "red",
            Green => "green",
            Blue => "blue",
            Yellow => "yellow",
        }
    }

    /// Resting color of the tile.
    pub const fn color(self) -> Rgb {
        use Tile::*;
        match self {
            Red => Rgb(155, 0, 0),
            Green => Rgb(0, 155, 0),
            Blue => Rgb(0, 0, 155),
            Yellow => Rgb(155, 155, 0),
        }
    }

    /// Color shown while the tile is highlighted.
    pub const fn flash_color(self) -> Rgb {
        use Tile::*;
        match self {
            Red => Rgb(255, 0, 0),
            Green => Rgb(0, 255, 0),
            Blue => Rgb(0, 0, 255),
            Yellow => Rgb(255, 255, 0),
        }
    }

    /// Path of the tone asset played with the highlight.
    pub const fn tone(self) -> &'static str {
        use Tile::*;
        match self {
            Red => "/beep1.ogg",
            Green => "/beep2.ogg",
            Blue => "/beep3.ogg",
            Yellow => "/beep4.ogg",
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tile {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Tile::ALL
            .into_iter()
            .find(|tile| tile.name() == s)
            .ok_or_else(|| GameError::UnknownTile(s.to_string()))
    }
}

impl TryFrom<u8> for Tile {
    type Error = GameError;

    fn try_from(index: u8) -> Result<Self> {
        Tile::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(GameError::InvalidTileIndex(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_indices() {
        assert_eq!("blue".parse::<Tile>(), Ok(Tile::Blue));
        assert_eq!(Tile::try_from(3), Ok(Tile::Yellow));
        for tile in Tile::ALL {
            assert_eq!(Tile::try_from(tile.index()), Ok(tile));
            assert_eq!(tile.name().parse::<Tile>(), Ok(tile));
        }
    }

    #[test]
    fn rejects_tiles_outside_the_board() {
        assert_eq!(
            "purple".parse::<Tile>(),
            Err(GameError::UnknownTile("purple".to_string()))
        );
        assert!("Red".parse::<Tile>().is_err());
        assert_eq!(Tile::try_from(4), Err(GameError::InvalidTileIndex(4)));
    }

    #[test]
    fn flash_is_brighter_than_resting_color() {
        for tile in Tile::ALL {
            let Rgb(r, g, b) = tile.color();
            let Rgb(fr, fg, fb) = tile.flash_color();
            assert!(fr >= r && fg >= g && fb >= b);
            assert_ne!(tile.color(), tile.flash_color());
        }
    }
}
