//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas shared by every page
pub struct ShellLayout {
    /// Brand and location bar
    pub nav: Rect,
    /// Area handed to the mounted page
    pub body: Rect,
    pub status: Option<Rect>,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Split the screen into navigation bar, page body, optional status line and help bar
pub fn calculate_shell_layout(area: Rect, has_status: bool) -> ShellLayout {
    let constraints = if has_status {
        vec![
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    if has_status {
        ShellLayout {
            nav: chunks[0],
            body: chunks[1],
            status: Some(chunks[2]),
            help: chunks[3],
        }
    } else {
        ShellLayout {
            nav: chunks[0],
            body: chunks[1],
            status: None,
            help: chunks[2],
        }
    }
}

/// Cells for `count` items laid out in a grid, row by row
///
/// Two columns when the area is wide enough, otherwise one. Rows that fall
/// past the bottom of `area` are omitted; `skip_rows` scrolls the grid.
pub fn card_grid(area: Rect, count: usize, card_height: u16, skip_rows: usize) -> Vec<(usize, Rect)> {
    let columns: usize = if area.width >= 80 { 2 } else { 1 };
    let gap: u16 = 2;
    let column_width = (area.width.saturating_sub(gap * (columns as u16 - 1))) / columns as u16;

    let mut cells = Vec::new();
    for index in 0..count {
        let row = index / columns;
        if row < skip_rows {
            continue;
        }
        let visible_row = (row - skip_rows) as u16;
        let y = area.y + visible_row * (card_height + 1);
        if y + card_height > area.y + area.height {
            break;
        }
        let column = (index % columns) as u16;
        let x = area.x + column * (column_width + gap);
        cells.push((index, Rect::new(x, y, column_width, card_height)));
    }
    cells
}

/// Number of grid rows needed for `count` items at this width
pub fn card_grid_rows(area: Rect, count: usize) -> usize {
    let columns = if area.width >= 80 { 2 } else { 1 };
    count.div_ceil(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let popup = centered_popup(area, 40, 5);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 5);
        assert_eq!(popup.y, 2);
    }

    #[test]
    fn test_shell_layout_without_status() {
        let layout = calculate_shell_layout(Rect::new(0, 0, 100, 40), false);
        assert_eq!(layout.nav.height, 3);
        assert_eq!(layout.help.height, 1);
        assert_eq!(layout.body.height, 36);
        assert!(layout.status.is_none());
    }

    #[test]
    fn test_card_grid_two_columns_in_order() {
        let cells = card_grid(Rect::new(0, 0, 100, 40), 4, 7, 0);
        let indices: Vec<usize> = cells.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(cells[0].1.y, cells[1].1.y);
        assert!(cells[1].1.x > cells[0].1.x);
        assert!(cells[2].1.y > cells[0].1.y);
    }

    #[test]
    fn test_card_grid_single_column_when_narrow() {
        let cells = card_grid(Rect::new(0, 0, 60, 40), 3, 7, 0);
        assert!(cells.iter().all(|(_, r)| r.x == 0));
    }

    #[test]
    fn test_card_grid_clips_and_scrolls() {
        let area = Rect::new(0, 0, 60, 16);
        let cells = card_grid(area, 4, 7, 0);
        assert_eq!(cells.len(), 2);

        let scrolled = card_grid(area, 4, 7, 2);
        let indices: Vec<usize> = scrolled.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![2, 3]);
        assert_eq!(card_grid_rows(area, 4), 4);
    }
}
