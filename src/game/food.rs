use super::grid::Grid;
use crate::consts;
use log::{debug, warn};
use rand::Rng;
use ratatui::layout::Position;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    pub(super) position: Position,
}

impl Food {
    /// Place a new piece of food in the interior of `grid`, avoiding
    /// `forbidden`.  If there is nowhere to put it, it starts in the first
    /// interior cell.
    pub(super) fn spawn<R: Rng>(
        grid: Grid,
        forbidden: &HashSet<Position>,
        rng: &mut R,
    ) -> Food {
        let mut food = Food {
            position: Position::new(1, 1),
        };
        let _ = food.respawn(grid, forbidden, rng);
        food
    }

    pub(crate) fn position(&self) -> Position {
        self.position
    }

    /// Move the food to a uniformly random interior cell not in `forbidden`.
    ///
    /// Random sampling gives up after
    /// [`FOOD_SPAWN_ATTEMPTS`][consts::FOOD_SPAWN_ATTEMPTS] tries, after which
    /// the first free cell in row-major order is used.  Returns `false` and
    /// leaves the food where it is if every interior cell is forbidden.
    pub(super) fn respawn<R: Rng>(
        &mut self,
        grid: Grid,
        forbidden: &HashSet<Position>,
        rng: &mut R,
    ) -> bool {
        let interior = grid.interior();
        if interior.is_empty() {
            warn!("Grid {grid:?} has no interior; food stays at {:?}", self.position);
            return false;
        }
        for _ in 0..consts::FOOD_SPAWN_ATTEMPTS {
            let pos = Position {
                x: rng.random_range(interior.left()..interior.right()),
                y: rng.random_range(interior.top()..interior.bottom()),
            };
            if !forbidden.contains(&pos) {
                self.position = pos;
                return true;
            }
        }
        if let Some(pos) = grid.interior_positions().find(|p| !forbidden.contains(p)) {
            debug!("Random food placement kept missing; using first free cell {pos:?}");
            self.position = pos;
            true
        } else {
            warn!("No free cell for food; it stays at {:?}", self.position);
            false
        }
    }
}
