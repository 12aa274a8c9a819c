use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::MazeError;

/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Grid coordinates `(row, col)`.
pub type Position = (Coord, Coord);

/// Side length of the square maze grid.
pub const GRID_SIZE: Coord = 20;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// The four cardinal steps a runner can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Right, Self::Left, Self::Up, Self::Down];

    /// `(row, col)` delta of a single step.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Self::Right => (0, 1),
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
        }
    }

    /// Single-letter token used by the text protocol.
    pub const fn token(self) -> char {
        match self {
            Self::Right => 'R',
            Self::Left => 'L',
            Self::Up => 'U',
            Self::Down => 'D',
        }
    }

    /// Applies `distance` steps in this direction, returning a value only when
    /// the result stays inside the grid on both axes. Every movement query,
    /// pit probe, and jump landing goes through this one bounds rule.
    pub fn displace(self, (row, col): Position, distance: i8) -> Option<Position> {
        let (delta_row, delta_col) = self.offset();
        let next_row = row.checked_add_signed(delta_row.checked_mul(distance)?)?;
        let next_col = col.checked_add_signed(delta_col.checked_mul(distance)?)?;
        if next_row >= GRID_SIZE || next_col >= GRID_SIZE {
            return None;
        }
        Some((next_row, next_col))
    }
}

impl FromStr for Direction {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(Self::Right),
            "L" => Ok(Self::Left),
            "U" => Ok(Self::Up),
            "D" => Ok(Self::Down),
            _ => Err(MazeError::InvalidDirection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displace_rejects_both_bounds_on_both_axes() {
        assert_eq!(Direction::Up.displace((0, 5), 1), None);
        assert_eq!(Direction::Left.displace((5, 0), 1), None);
        assert_eq!(Direction::Down.displace((19, 5), 1), None);
        assert_eq!(Direction::Right.displace((5, 19), 1), None);
        assert_eq!(Direction::Right.displace((5, 18), 1), Some((5, 19)));
        assert_eq!(Direction::Up.displace((1, 0), 1), Some((0, 0)));
    }

    #[test]
    fn displace_doubles_for_jumps() {
        assert_eq!(Direction::Down.displace((5, 4), 2), Some((7, 4)));
        assert_eq!(Direction::Left.displace((5, 1), 2), None);
        assert_eq!(Direction::Right.displace((5, 18), 2), None);
    }

    #[test]
    fn direction_tokens_parse() {
        use alloc::string::ToString;

        assert_eq!("R".parse(), Ok(Direction::Right));
        assert_eq!("L".parse(), Ok(Direction::Left));
        assert_eq!("U".parse(), Ok(Direction::Up));
        assert_eq!("D".parse(), Ok(Direction::Down));
        for dir in Direction::ALL {
            assert_eq!(dir.token().to_string().parse(), Ok(dir));
        }
        assert_eq!("N".parse::<Direction>(), Err(MazeError::InvalidDirection));
        assert_eq!("right".parse::<Direction>(), Err(MazeError::InvalidDirection));
    }
}
