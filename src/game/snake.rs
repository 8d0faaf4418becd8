use super::direction::Direction;
use super::grid::Grid;
use ratatui::layout::Position;
use std::collections::{HashSet, VecDeque};

/// The head is stored apart from the rest of the body so that a snake always
/// has at least one segment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of the remaining segments, nearest to the head first
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake is currently moving
    pub(super) direction: Direction,

    /// If set, the next [`Snake::advance()`] keeps the tail
    pub(super) growing: bool,

    /// Where the head goes on [`Snake::reset()`]
    start: Position,

    /// Segment count on [`Snake::reset()`]
    initial_len: usize,
}

/// What happened when the snake tried to move one cell
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MoveOutcome {
    Moved,
    /// The next cell is a wall.  The snake was left where it was.
    WallCollision,
    /// The snake moved and its head now overlaps another segment.
    SelfCollision,
}

impl Snake {
    /// Create a snake lying in a horizontal line with its head at `start` and
    /// its tail extending leftwards, moving rightwards.
    pub(super) fn new(start: Position, initial_len: usize) -> Snake {
        debug_assert!(initial_len > 0, "snake must have at least one segment");
        let body = std::iter::successors(Direction::Left.advance(start), |&p| {
            Direction::Left.advance(p)
        })
        .take(initial_len.saturating_sub(1))
        .collect::<VecDeque<_>>();
        debug_assert_eq!(
            body.len() + 1,
            initial_len,
            "initial snake does not fit left of {start:?}"
        );
        Snake {
            head: start,
            body,
            direction: Direction::Right,
            growing: false,
            start,
            initial_len,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.head
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// All segments, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub(crate) fn occupied_cells(&self) -> HashSet<Position> {
        self.segments().collect()
    }

    /// Turn towards `direction` if it lies across the current axis of
    /// movement.  Returns whether the turn was taken.
    pub(crate) fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction.can_turn_to(direction) {
            self.direction = direction;
            true
        } else {
            false
        }
    }

    /// Move the snake forwards one cell.  Collisions are reported, not
    /// resolved; the caller decides what dying means.
    pub(crate) fn advance(&mut self, grid: Grid) -> MoveOutcome {
        let Some(pos) = self
            .direction
            .advance(self.head)
            .filter(|&p| grid.in_interior(p))
        else {
            return MoveOutcome::WallCollision;
        };
        self.body.push_front(self.head);
        self.head = pos;
        if self.growing {
            self.growing = false;
        } else {
            let _ = self.body.pop_back();
        }
        if self.body.contains(&self.head) {
            MoveOutcome::SelfCollision
        } else {
            debug_assert!(self.is_contiguous(), "snake body came apart: {self:?}");
            MoveOutcome::Moved
        }
    }

    /// Keep the tail on the next move
    pub(crate) fn grow(&mut self) {
        self.growing = true;
    }

    pub(crate) fn reset(&mut self) {
        *self = Snake::new(self.start, self.initial_len);
    }

    /// Whether every segment is a single step from the one before it
    pub(super) fn is_contiguous(&self) -> bool {
        self.segments()
            .zip(self.segments().skip(1))
            .all(|(a, b)| a.x.abs_diff(b.x) + a.y.abs_diff(b.y) == 1)
    }
}

#[cfg(test)]
impl Snake {
    /// Build a snake from explicit segments, head first.  The reset state is
    /// the same segment count starting at the given head.
    pub(super) fn from_segments(segments: &[Position], direction: Direction) -> Snake {
        let (&head, rest) = segments
            .split_first()
            .expect("snake needs at least one segment");
        Snake {
            head,
            body: rest.iter().copied().collect(),
            direction,
            growing: false,
            start: head,
            initial_len: segments.len(),
        }
    }

    pub(super) fn initial_len(&self) -> usize {
        self.initial_len
    }
}
