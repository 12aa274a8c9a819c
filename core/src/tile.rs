use serde::{Deserialize, Serialize};

/// Ground-truth cell kind, fixed once the layout is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Open,
    Wall,
    Pit,
}

impl CellKind {
    pub const fn is_enterable(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Open
    }
}

/// Runner-visible knowledge about one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewTile {
    Unknown,
    Current,
    Explored,
    Wall,
    Pit,
}

impl ViewTile {
    /// Character used by the text dump: `.` unknown, `x` current, `*` explored
    /// path, `-` wall, `0` pit.
    pub const fn glyph(self) -> char {
        match self {
            Self::Unknown => '.',
            Self::Current => 'x',
            Self::Explored => '*',
            Self::Wall => '-',
            Self::Pit => '0',
        }
    }

    pub const fn is_revealed(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl Default for ViewTile {
    fn default() -> Self {
        Self::Unknown
    }
}
