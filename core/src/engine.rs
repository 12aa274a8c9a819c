use alloc::string::String;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Where a traversal session stands. Derived from the current position rather
/// than stored, so an illegal call never wedges the engine in a dead state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MazeState {
    Exploring,
    Won,
}

impl MazeState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// The maze engine: immutable ground truth, the runner's partial view of it,
/// and the runner's position.
///
/// Queries (`can_move`, `is_pit`) may reveal cells into the view but never
/// move the runner. Mutations (`step`, `jump_over_pit`) refuse illegal targets
/// with [`MazeError::IllegalMove`]; a runner that gates every mutation behind
/// the matching query never sees that error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    layout: MazeLayout,
    view: Array2<ViewTile>,
    position: Position,
}

impl Maze {
    /// Starts a session on the embedded canonical layout.
    pub fn new() -> Self {
        Self::with_layout(MazeLayout::canonical())
    }

    /// Starts a session on any table-built layout.
    pub fn with_layout(layout: MazeLayout) -> Self {
        let mut view: Array2<ViewTile> = Array2::default([GRID_SIZE as usize; 2]);
        let position = layout.start();
        view[position.to_nd_index()] = ViewTile::Current;
        Self {
            layout,
            view,
            position,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn view_at(&self, pos: Position) -> ViewTile {
        self.view[pos.to_nd_index()]
    }

    pub fn state(&self) -> MazeState {
        if self.did_win() {
            MazeState::Won
        } else {
            MazeState::Exploring
        }
    }

    /// True iff the runner stands on the goal cell.
    pub fn did_win(&self) -> bool {
        self.position == self.layout.goal()
    }

    /// Whether a single step in `dir` is legal. Reveals the target cell as
    /// explored path, wall, or pit; an out-of-bounds target reveals nothing.
    pub fn can_move(&mut self, dir: Direction) -> bool {
        let Some(target) = dir.displace(self.position, 1) else {
            return false;
        };
        self.reveal_for_entry(target)
    }

    /// Whether the adjacent cell in `dir` is a pit. Reveals the pit when there
    /// is one; anything else stays hidden, a probe answers one question only.
    pub fn is_pit(&mut self, dir: Direction) -> bool {
        let Some(target) = dir.displace(self.position, 1) else {
            return false;
        };
        if self.layout.kind_at(target) == CellKind::Pit {
            self.view[target.to_nd_index()] = ViewTile::Pit;
            true
        } else {
            false
        }
    }

    /// Moves one cell in `dir`. Fails with [`MazeError::IllegalMove`] when the
    /// target is a wall, a pit, or out of bounds, leaving the position and the
    /// current marker untouched (the probed cell still gains its revealed
    /// marking).
    pub fn step(&mut self, dir: Direction) -> Result<()> {
        if !self.can_move(dir) {
            return Err(MazeError::IllegalMove);
        }
        // can_move only answers true for an in-bounds open cell
        let target = dir.displace(self.position, 1).ok_or(MazeError::IllegalMove)?;
        self.enter(target);
        Ok(())
    }

    pub fn move_right(&mut self) -> Result<()> {
        self.step(Direction::Right)
    }

    pub fn move_left(&mut self) -> Result<()> {
        self.step(Direction::Left)
    }

    pub fn move_up(&mut self) -> Result<()> {
        self.step(Direction::Up)
    }

    pub fn move_down(&mut self) -> Result<()> {
        self.step(Direction::Down)
    }

    /// Jumps the pit adjacent in `dir`, landing two cells away along the same
    /// axis. A successful no-op when no pit is there. Fails with
    /// [`MazeError::IllegalMove`] when the landing cell is a wall, a pit, or
    /// out of bounds.
    pub fn jump_over_pit(&mut self, dir: Direction) -> Result<()> {
        if !self.is_pit(dir) {
            return Ok(());
        }
        let landing = dir.displace(self.position, 2).ok_or(MazeError::IllegalMove)?;
        if !self.reveal_for_entry(landing) {
            return Err(MazeError::IllegalMove);
        }
        self.enter(landing);
        Ok(())
    }

    /// Text dump of the runner's view, one row per line, glyphs separated by a
    /// single space. Debugging aid only.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in self.view.rows() {
            for (i, tile) in row.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push(tile.glyph());
            }
            out.push('\n');
        }
        out
    }

    /// Reveals `target` by its ground-truth kind and reports whether the
    /// runner may stand there.
    fn reveal_for_entry(&mut self, target: Position) -> bool {
        let kind = self.layout.kind_at(target);
        let tile = match kind {
            CellKind::Open => ViewTile::Explored,
            CellKind::Wall => ViewTile::Wall,
            CellKind::Pit => ViewTile::Pit,
        };
        self.view[target.to_nd_index()] = tile;
        kind.is_enterable()
    }

    fn enter(&mut self, target: Position) {
        self.view[self.position.to_nd_index()] = ViewTile::Explored;
        self.position = target;
        self.view[target.to_nd_index()] = ViewTile::Current;
        if self.did_win() {
            log::info!("runner reached the goal at {:?}", target);
        } else {
            log::debug!("runner now at {:?}", target);
        }
    }
}

impl Default for Maze {
    fn default() -> Self {
        Self::new()
    }
}
