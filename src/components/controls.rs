//! Control set - the focus ring over a page's buttons and links
//!
//! Keeps the rects each control was last drawn in so mouse clicks can be
//! routed to the control under the pointer.

use crate::action::Action;
use crate::components::{Button, Hyperlink};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
};

/// Gap between controls laid out in a row
const GAP: u16 = 2;
/// Height of a bordered control
pub const CONTROL_HEIGHT: u16 = 3;

#[derive(Debug)]
pub enum Control {
    Button(Button),
    Link(Hyperlink),
}

impl Control {
    pub fn label(&self) -> &str {
        match self {
            Control::Button(button) => button.label(),
            Control::Link(link) => &link.label,
        }
    }

    fn preferred_width(&self) -> u16 {
        match self {
            Control::Button(button) => button.preferred_width(),
            Control::Link(link) => link.preferred_width(),
        }
    }

    /// Buttons run their handler; links produce an `OpenLink` action
    fn activate(&mut self) -> Option<Action> {
        match self {
            Control::Button(button) => {
                button.activate();
                None
            }
            Control::Link(link) => Some(link.activate()),
        }
    }

    fn render(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        match self {
            Control::Button(button) => button.render(area, buf, focused),
            Control::Link(link) => link.render(area, buf, focused),
        }
    }
}

impl From<Button> for Control {
    fn from(button: Button) -> Self {
        Control::Button(button)
    }
}

impl From<Hyperlink> for Control {
    fn from(link: Hyperlink) -> Self {
        Control::Link(link)
    }
}

#[derive(Debug, Default)]
pub struct ControlSet {
    controls: Vec<Control>,
    focused: usize,
    areas: Vec<Rect>,
}

impl ControlSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, control: impl Into<Control>) -> Self {
        self.push(control);
        self
    }

    pub fn push(&mut self, control: impl Into<Control>) {
        self.controls.push(control.into());
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    #[cfg(test)]
    pub fn labels(&self) -> Vec<&str> {
        self.controls.iter().map(Control::label).collect()
    }

    #[cfg(test)]
    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focus_next(&mut self) {
        if !self.controls.is_empty() {
            self.focused = (self.focused + 1) % self.controls.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.controls.is_empty() {
            self.focused = (self.focused + self.controls.len() - 1) % self.controls.len();
        }
    }

    pub fn activate_focused(&mut self) -> Option<Action> {
        self.activate(self.focused)
    }

    pub fn activate(&mut self, index: usize) -> Option<Action> {
        let control = self.controls.get_mut(index)?;
        tracing::debug!(label = control.label(), "control activated");
        control.activate()
    }

    /// Activate the first control carrying `label`
    #[cfg(test)]
    pub fn activate_by_label(&mut self, label: &str) -> Option<Action> {
        let index = self.controls.iter().position(|c| c.label() == label)?;
        self.focused = index;
        self.activate(index)
    }

    /// Focus and activate the control drawn at a cell, if any
    pub fn click(&mut self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);
        let index = self.areas.iter().position(|area| area.contains(position))?;
        self.focused = index;
        self.activate(index)
    }

    /// Total width of a single row of controls
    pub fn row_width(&self) -> u16 {
        let widths: u16 = self.controls.iter().map(Control::preferred_width).sum();
        widths + GAP * (self.controls.len() as u16).saturating_sub(1)
    }

    /// Lay the controls out left to right inside `area`
    pub fn render_row(&mut self, area: Rect, buf: &mut Buffer, alignment: Alignment) {
        let total = self.row_width().min(area.width);
        let mut x = match alignment {
            Alignment::Left => area.x,
            Alignment::Center => area.x + (area.width - total) / 2,
            Alignment::Right => area.x + area.width - total,
        };

        self.areas.clear();
        for (index, control) in self.controls.iter().enumerate() {
            let remaining = (area.x + area.width).saturating_sub(x);
            let width = control.preferred_width().min(remaining);
            let rect = Rect::new(x, area.y, width, CONTROL_HEIGHT.min(area.height));
            if width > 0 {
                control.render(rect, buf, index == self.focused);
            }
            self.areas.push(rect);
            x = x.saturating_add(width + GAP);
        }
    }
}
