use ratatui::layout::{Position, Positions, Rect, Size};

/// The fixed-size playing field.  Row/column 0 and the last row/column are
/// solid walls; everything strictly inside them is the interior.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Grid {
    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// The playable sub-grid.  Empty if the grid is too small to have one.
    pub(crate) fn interior(self) -> Rect {
        let interior = Rect {
            x: 1,
            y: 1,
            width: self.width.saturating_sub(2),
            height: self.height.saturating_sub(2),
        };
        if interior.is_empty() {
            Rect::ZERO
        } else {
            interior
        }
    }

    pub(crate) fn in_interior(self, pos: Position) -> bool {
        self.interior().contains(pos)
    }

    /// Interior cells in row-major order
    pub(crate) fn interior_positions(self) -> Positions {
        self.interior().positions()
    }
}

impl From<Size> for Grid {
    fn from(size: Size) -> Grid {
        Grid {
            width: size.width,
            height: size.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Position::new(1, 1), true)]
    #[case(Position::new(38, 18), true)]
    #[case(Position::new(0, 10), false)]
    #[case(Position::new(10, 0), false)]
    #[case(Position::new(39, 10), false)]
    #[case(Position::new(10, 19), false)]
    #[case(Position::new(40, 10), false)]
    fn test_in_interior(#[case] pos: Position, #[case] inside: bool) {
        let grid = Grid::from(Size::new(40, 20));
        assert_eq!(grid.in_interior(pos), inside);
    }

    #[test]
    fn interior_positions_row_major() {
        let grid = Grid::from(Size::new(4, 4));
        let cells = grid.interior_positions().collect::<Vec<_>>();
        assert_eq!(
            cells,
            [
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(1, 2),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn degenerate_grid_has_no_interior() {
        let grid = Grid::from(Size::new(2, 9));
        assert_eq!(grid.interior(), Rect::ZERO);
        assert_eq!(grid.interior_positions().count(), 0);
    }
}
