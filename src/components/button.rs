//! Button - stateless clickable control
//!
//! A button owns only its label and the handler supplied by the page that
//! built it. Activation calls the handler right away, once.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Minimum rendered width, borders included
const MIN_WIDTH: u16 = 12;

pub struct Button {
    label: String,
    on_click: Box<dyn FnMut()>,
}

impl Button {
    pub fn new(label: impl Into<String>, on_click: impl FnMut() + 'static) -> Self {
        Self {
            label: label.into(),
            on_click: Box::new(on_click),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Invoke the handler
    pub fn activate(&mut self) {
        (self.on_click)();
    }

    /// Width needed to show the whole label inside the border
    pub fn preferred_width(&self) -> u16 {
        let label_width = UnicodeWidthStr::width(self.label.as_str()) as u16;
        (label_width + 4).max(MIN_WIDTH)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let (border, text) = if focused {
            (
                Style::default().fg(Color::Yellow),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(Color::Blue),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )
        };

        Paragraph::new(self.label.as_str())
            .style(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border))
            .render(area, buf);
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button").field("label", &self.label).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_activate_calls_handler_once_per_activation() {
        for label in ["Sign Up", "", "  ", "🤚 Wave", "a very long label that will not fit"] {
            let calls = Rc::new(Cell::new(0));
            let counter = calls.clone();
            let mut button = Button::new(label, move || counter.set(counter.get() + 1));

            button.activate();
            assert_eq!(calls.get(), 1, "label {:?}", label);

            button.activate();
            assert_eq!(calls.get(), 2, "label {:?}", label);
        }
    }

    #[test]
    fn test_handler_runs_before_activate_returns() {
        let log = Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = log.clone();
        let mut button = Button::new("Sign In", move || sink.borrow_mut().push("clicked"));
        button.activate();
        log.borrow_mut().push("after");
        assert_eq!(*log.borrow(), vec!["clicked", "after"]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let button = Button::new("Sign Up", || {});
        let area = Rect::new(0, 0, 14, 3);

        let mut first = Buffer::empty(area);
        button.render(area, &mut first, false);
        let mut second = Buffer::empty(area);
        button.render(area, &mut second, false);

        assert_eq!(first, second);
        assert!(buffer_text(&first).contains("Sign Up"));
    }

    #[test]
    fn test_preferred_width() {
        assert_eq!(Button::new("Go", || {}).preferred_width(), MIN_WIDTH);
        assert_eq!(Button::new("Open Smart Board", || {}).preferred_width(), 20);
    }
}
