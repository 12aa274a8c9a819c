use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

pub use canonical::CANONICAL;

mod canonical;

/// Orientation of a [`Span`] of cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along a row, column varying.
    Horizontal,
    /// Extends along a column, row varying.
    Vertical,
}

/// A run of consecutive cells sharing one kind, anchored at `at`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub at: Position,
    pub len: Coord,
    pub orientation: Orientation,
    pub kind: CellKind,
}

impl Span {
    pub const fn wall(at: Position, len: Coord, orientation: Orientation) -> Self {
        Self {
            at,
            len,
            orientation,
            kind: CellKind::Wall,
        }
    }

    pub const fn open(at: Position, len: Coord, orientation: Orientation) -> Self {
        Self {
            at,
            len,
            orientation,
            kind: CellKind::Open,
        }
    }

    /// Cells covered by this span, front to back. Fails when any covered cell
    /// falls outside the grid, or when the span is empty.
    fn positions(self) -> Result<impl Iterator<Item = Position>> {
        let (row, col) = self.at;
        let reach = self.len.checked_sub(1).ok_or(MazeError::InvalidCoords)?;
        let end = match self.orientation {
            Orientation::Horizontal => {
                (row, col.checked_add(reach).ok_or(MazeError::InvalidCoords)?)
            }
            Orientation::Vertical => {
                (row.checked_add(reach).ok_or(MazeError::InvalidCoords)?, col)
            }
        };
        validate(self.at)?;
        validate(end)?;
        Ok((0..self.len).map(move |i| match self.orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        }))
    }
}

/// Declarative source data for a maze layout: ordered spans applied over a
/// default-Open grid (later spans override earlier ones, so a doorway can punch
/// through a wall run), then pit coordinates, plus the fixed endpoints.
#[derive(Copy, Clone, Debug)]
pub struct LayoutTable<'a> {
    pub start: Position,
    pub goal: Position,
    pub spans: &'a [Span],
    pub pits: &'a [Position],
}

/// Immutable ground truth of one maze: every cell's kind and the endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MazeLayout {
    cells: Array2<CellKind>,
    start: Position,
    goal: Position,
}

impl MazeLayout {
    pub fn from_table(table: &LayoutTable<'_>) -> Result<Self> {
        let mut cells: Array2<CellKind> = Array2::default([GRID_SIZE as usize; 2]);

        for span in table.spans {
            for pos in span.positions()? {
                cells[pos.to_nd_index()] = span.kind;
            }
        }
        for &pit in table.pits {
            cells[validate(pit)?.to_nd_index()] = CellKind::Pit;
        }

        let start = validate(table.start)?;
        let goal = validate(table.goal)?;
        if !cells[start.to_nd_index()].is_enterable() || !cells[goal.to_nd_index()].is_enterable() {
            return Err(MazeError::BlockedEndpoint);
        }

        Ok(Self { cells, start, goal })
    }

    /// The maze shipped with the crate. Its table is fixed data, so this cannot
    /// fail at runtime.
    pub fn canonical() -> Self {
        Self::from_table(&CANONICAL).expect("embedded layout table is valid")
    }

    pub fn kind_at(&self, pos: Position) -> CellKind {
        self.cells[pos.to_nd_index()]
    }

    pub const fn start(&self) -> Position {
        self.start
    }

    pub const fn goal(&self) -> Position {
        self.goal
    }
}

fn validate(pos: Position) -> Result<Position> {
    if pos.0 < GRID_SIZE && pos.1 < GRID_SIZE {
        Ok(pos)
    } else {
        Err(MazeError::InvalidCoords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_layout_loads() {
        let layout = MazeLayout::canonical();

        assert_eq!(layout.start(), (1, 0));
        assert_eq!(layout.goal(), (10, 19));
        assert_eq!(layout.kind_at(layout.start()), CellKind::Open);
        assert_eq!(layout.kind_at(layout.goal()), CellKind::Open);
        assert_eq!(layout.kind_at((0, 0)), CellKind::Wall);
        assert_eq!(layout.kind_at((1, 2)), CellKind::Pit);
        assert_eq!(layout.kind_at((19, 4)), CellKind::Wall);
        // doorway through the row-2 wall run
        assert_eq!(layout.kind_at((2, 0)), CellKind::Wall);
        assert_eq!(layout.kind_at((2, 4)), CellKind::Open);
        // corridor reopened over the col-5 wall run
        assert_eq!(layout.kind_at((12, 5)), CellKind::Wall);
        assert_eq!(layout.kind_at((13, 5)), CellKind::Open);
        assert_eq!(layout.kind_at((14, 5)), CellKind::Wall);
    }

    #[test]
    fn later_spans_override_earlier_ones() {
        let table = LayoutTable {
            start: (0, 0),
            goal: (0, 3),
            spans: &[
                Span::wall((0, 0), 4, Orientation::Horizontal),
                Span::open((0, 0), 1, Orientation::Horizontal),
                Span::open((0, 3), 1, Orientation::Horizontal),
            ],
            pits: &[],
        };
        let layout = MazeLayout::from_table(&table).unwrap();

        assert_eq!(layout.kind_at((0, 0)), CellKind::Open);
        assert_eq!(layout.kind_at((0, 1)), CellKind::Wall);
        assert_eq!(layout.kind_at((0, 2)), CellKind::Wall);
        assert_eq!(layout.kind_at((0, 3)), CellKind::Open);
    }

    #[test]
    fn out_of_range_span_is_rejected() {
        let table = LayoutTable {
            start: (0, 0),
            goal: (1, 1),
            spans: &[Span::wall((5, 15), 6, Orientation::Horizontal)],
            pits: &[],
        };

        assert_eq!(
            MazeLayout::from_table(&table).unwrap_err(),
            MazeError::InvalidCoords
        );
    }

    #[test]
    fn out_of_range_pit_is_rejected() {
        let table = LayoutTable {
            start: (0, 0),
            goal: (1, 1),
            spans: &[],
            pits: &[(20, 3)],
        };

        assert_eq!(
            MazeLayout::from_table(&table).unwrap_err(),
            MazeError::InvalidCoords
        );
    }

    #[test]
    fn blocked_endpoints_are_rejected() {
        let pit_on_start = LayoutTable {
            start: (0, 0),
            goal: (1, 1),
            spans: &[],
            pits: &[(0, 0)],
        };
        let wall_on_goal = LayoutTable {
            start: (0, 0),
            goal: (1, 1),
            spans: &[Span::wall((1, 1), 1, Orientation::Vertical)],
            pits: &[],
        };

        assert_eq!(
            MazeLayout::from_table(&pit_on_start).unwrap_err(),
            MazeError::BlockedEndpoint
        );
        assert_eq!(
            MazeLayout::from_table(&wall_on_goal).unwrap_err(),
            MazeError::BlockedEndpoint
        );
    }
}
