use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of the given size centered in `area`, shrunk to fit if
/// `area` is too small.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [centered] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(centered);
    centered
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(40, 20), Rect::new(20, 2, 40, 20))]
    #[case(Rect::new(0, 0, 40, 21), Size::new(40, 21), Rect::new(0, 0, 40, 21))]
    #[case(Rect::new(5, 7, 30, 8), Size::new(26, 6), Rect::new(7, 8, 26, 6))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] r: Rect) {
        assert_eq!(center_rect(area, size), r);
    }
}
