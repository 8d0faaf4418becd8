use super::direction::Direction;
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
};

/// Immutable copy of a session's state, taken for drawing a single frame
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot {
    /// Snake segments, head first
    pub(crate) body: Vec<Position>,
    /// Direction the head is facing
    pub(crate) direction: Direction,
    pub(crate) food: Position,
    pub(crate) score: u32,
    pub(crate) best: u32,
    /// Grid dimensions, walls included
    pub(crate) grid: Size,
    pub(crate) paused: bool,
    pub(crate) ticks: u64,
}

impl Snapshot {
    fn score_line(&self) -> String {
        let mut line = format!(" Score: {}  Best: {}", self.score, self.best);
        if self.paused {
            line.push_str("  PAUSED");
        }
        line
    }
}

/// Return the glyph to use for drawing the snake's head
pub(crate) fn head_symbol(direction: Direction) -> char {
    match direction {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

/// Return the glyph for the body segment at `index` (counted from the head)
pub(crate) fn body_symbol(index: usize) -> char {
    if index % 2 == 0 {
        consts::SNAKE_BODY_EVEN_SYMBOL
    } else {
        consts::SNAKE_BODY_ODD_SYMBOL
    }
}

impl Widget for &Snapshot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = center_rect(
            area,
            Size {
                width: self.grid.width,
                height: self.grid.height.saturating_add(1),
            },
        );
        let [grid_area, score_area] =
            Layout::vertical([Constraint::Length(self.grid.height), Constraint::Length(1)])
                .areas(display);
        // The walls are the outermost grid cells, so the border goes on them
        Block::bordered().render(grid_area, buf);
        let mut canvas = Canvas {
            area: grid_area,
            buf,
        };
        canvas.draw_cell(self.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        for (i, &pos) in self.body.iter().enumerate().skip(1) {
            canvas.draw_cell(pos, body_symbol(i), consts::SNAKE_BODY_STYLE);
        }
        if let Some(&head) = self.body.first() {
            canvas.draw_cell(
                head,
                head_symbol(self.direction),
                consts::SNAKE_HEAD_STYLE,
            );
        }
        Line::styled(self.score_line(), consts::SCORE_BAR_STYLE).render(score_area, buf);
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        if pos.x >= self.area.width || pos.y >= self.area.height {
            return;
        }
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Snapshot {
        Snapshot {
            body: vec![Position::new(3, 2), Position::new(2, 2), Position::new(1, 2)],
            direction: Direction::Right,
            food: Position::new(5, 3),
            score: 2,
            best: 4,
            grid: Size::new(20, 5),
            paused: false,
            ticks: 7,
        }
    }

    #[rstest]
    #[case(Direction::Up, '^')]
    #[case(Direction::Down, 'v')]
    #[case(Direction::Left, '<')]
    #[case(Direction::Right, '>')]
    fn test_head_symbol(#[case] d: Direction, #[case] symbol: char) {
        assert_eq!(head_symbol(d), symbol);
    }

    #[test]
    fn body_symbols_alternate() {
        assert_eq!(body_symbol(1), '□');
        assert_eq!(body_symbol(2), '■');
        assert_eq!(body_symbol(3), '□');
    }

    #[test]
    fn draw_snapshot() {
        let snapshot = sample();
        let area = Rect::new(0, 0, 20, 6);
        let mut buffer = Buffer::empty(area);
        snapshot.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "┌──────────────────┐",
            "│                  │",
            "│■□>               │",
            "│    ★             │",
            "└──────────────────┘",
            " Score: 2  Best: 4",
        ]);
        expected.set_style(Rect::new(0, 5, 20, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(1, 2, 2, 1), consts::SNAKE_BODY_STYLE);
        expected.set_style(Rect::new(3, 2, 1, 1), consts::SNAKE_HEAD_STYLE);
        expected.set_style(Rect::new(5, 3, 1, 1), consts::FOOD_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn draw_paused_centered() {
        let mut snapshot = sample();
        snapshot.grid = Size::new(26, 5);
        snapshot.paused = true;
        snapshot.direction = Direction::Up;
        snapshot.body = vec![Position::new(3, 1), Position::new(3, 2), Position::new(2, 2)];
        let area = Rect::new(0, 0, 30, 8);
        let mut buffer = Buffer::empty(area);
        snapshot.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "                              ",
            "  ┌────────────────────────┐  ",
            "  │  ^                     │  ",
            "  │ ■□                     │  ",
            "  │    ★                   │  ",
            "  └────────────────────────┘  ",
            "   Score: 2  Best: 4  PAUSED  ",
            "                              ",
        ]);
        expected.set_style(Rect::new(2, 6, 26, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(4, 3, 2, 1), consts::SNAKE_BODY_STYLE);
        expected.set_style(Rect::new(5, 2, 1, 1), consts::SNAKE_HEAD_STYLE);
        expected.set_style(Rect::new(7, 4, 1, 1), consts::FOOD_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
