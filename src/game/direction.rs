use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    #[cfg(test)]
    pub(crate) const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit `(dx, dy)` step for this direction.  `y` grows downwards.
    pub(crate) fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub(crate) fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// A snake heading in `self` may only turn onto the perpendicular axis.
    /// This rules out both reversing and "turning" onto the current heading.
    pub(crate) fn can_turn_to(self, other: Direction) -> bool {
        self.axis() != other.axis()
    }

    /// Step one cell from `pos`.  Returns `None` if the step would leave the
    /// coordinate space entirely; wall checks are the caller's business.
    pub(crate) fn advance(self, pos: Position) -> Option<Position> {
        let (dx, dy) = self.delta();
        Some(Position {
            x: pos.x.checked_add_signed(dx)?,
            y: pos.y.checked_add_signed(dy)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn deltas_are_unit_steps() {
        for d in Direction::ALL {
            let (dx, dy) = d.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{d:?} is not a unit step");
        }
    }

    #[rstest]
    #[case(Direction::Up, Position::new(2, 7), Some(Position::new(2, 6)))]
    #[case(Direction::Down, Position::new(2, 7), Some(Position::new(2, 8)))]
    #[case(Direction::Left, Position::new(2, 7), Some(Position::new(1, 7)))]
    #[case(Direction::Right, Position::new(2, 7), Some(Position::new(3, 7)))]
    #[case(Direction::Up, Position::new(2, 0), None)]
    #[case(Direction::Left, Position::new(0, 7), None)]
    #[case(Direction::Right, Position::new(u16::MAX, 7), None)]
    #[case(Direction::Down, Position::new(2, u16::MAX), None)]
    fn test_advance(#[case] d: Direction, #[case] pos: Position, #[case] r: Option<Position>) {
        assert_eq!(d.advance(pos), r);
    }

    #[rstest]
    #[case(Direction::Right, Direction::Left, false)]
    #[case(Direction::Right, Direction::Right, false)]
    #[case(Direction::Right, Direction::Up, true)]
    #[case(Direction::Right, Direction::Down, true)]
    #[case(Direction::Left, Direction::Right, false)]
    #[case(Direction::Left, Direction::Up, true)]
    #[case(Direction::Up, Direction::Down, false)]
    #[case(Direction::Up, Direction::Up, false)]
    #[case(Direction::Up, Direction::Left, true)]
    #[case(Direction::Down, Direction::Right, true)]
    fn test_can_turn_to(#[case] from: Direction, #[case] to: Direction, #[case] ok: bool) {
        assert_eq!(from.can_turn_to(to), ok);
    }
}
