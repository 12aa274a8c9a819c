use super::Orientation::{Horizontal, Vertical};
use super::{LayoutTable, Span};

/// The 20×20 maze the crate ships with: a winding corridor system from the
/// start at `(1, 0)` to the goal pocket at `(10, 19)`. Spans apply in order,
/// so the open runs punched through earlier wall runs must stay after them.
pub const CANONICAL: LayoutTable<'static> = LayoutTable {
    start: (1, 0),
    goal: (10, 19),
    spans: &[
        Span::wall((0, 0), 6, Horizontal),
        Span::wall((19, 4), 1, Horizontal),
        Span::wall((1, 5), 2, Vertical),
        Span::wall((2, 0), 14, Horizontal),
        Span::open((2, 4), 1, Horizontal),
        Span::wall((3, 3), 17, Vertical),
        Span::wall((1, 14), 2, Vertical),
        Span::wall((0, 14), 3, Horizontal),
        Span::wall((1, 16), 6, Vertical),
        Span::wall((7, 14), 3, Horizontal),
        Span::wall((4, 5), 10, Horizontal),
        Span::wall((5, 14), 2, Vertical),
        Span::wall((5, 5), 15, Vertical),
        Span::wall((12, 5), 12, Horizontal),
        Span::open((13, 5), 12, Horizontal),
        Span::wall((14, 5), 12, Horizontal),
        Span::wall((10, 16), 2, Vertical),
        Span::wall((12, 18), 3, Vertical),
        Span::wall((11, 18), 2, Horizontal),
        Span::wall((9, 16), 4, Horizontal),
        Span::wall((14, 17), 1, Horizontal),
        Span::wall((8, 5), 8, Horizontal),
        Span::wall((10, 5), 8, Horizontal),
        Span::open((9, 5), 8, Horizontal),
        Span::wall((8, 13), 3, Vertical),
        Span::wall((17, 5), 14, Horizontal),
        Span::wall((19, 5), 14, Horizontal),
        Span::open((18, 5), 14, Horizontal),
        Span::wall((17, 19), 3, Vertical),
        Span::wall((14, 0), 4, Horizontal),
        Span::wall((16, 0), 4, Horizontal),
        Span::open((15, 0), 4, Horizontal),
        Span::wall((14, 0), 3, Vertical),
    ],
    pits: &[
        (1, 2),
        (3, 7),
        (3, 12),
        (6, 4),
        (15, 4),
        (9, 10),
        (13, 15),
        (18, 10),
    ],
};
