//! Typed text - headline that types out and erases a list of phrases
//!
//! Advanced one step per tick: type a character, hold the full phrase for a
//! few ticks, erase a character, then move on to the next phrase.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding(u16),
    Erasing,
}

#[derive(Debug, Clone)]
pub struct TypedText {
    phrases: Vec<String>,
    current: usize,
    visible_chars: usize,
    phase: Phase,
    hold_ticks: u16,
}

impl TypedText {
    pub fn new(phrases: &[&str]) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            current: 0,
            visible_chars: 0,
            phase: Phase::Typing,
            hold_ticks: 12,
        }
    }

    #[cfg(test)]
    pub fn with_hold_ticks(mut self, hold_ticks: u16) -> Self {
        self.hold_ticks = hold_ticks;
        self
    }

    fn phrase_len(&self) -> usize {
        self.phrases
            .get(self.current)
            .map(|p| p.chars().count())
            .unwrap_or(0)
    }

    /// Advance the animation by one tick
    pub fn advance(&mut self) {
        if self.phrases.is_empty() {
            return;
        }

        self.phase = match self.phase {
            Phase::Typing if self.visible_chars < self.phrase_len() => {
                self.visible_chars += 1;
                if self.visible_chars == self.phrase_len() {
                    Phase::Holding(0)
                } else {
                    Phase::Typing
                }
            }
            Phase::Typing => Phase::Holding(0),
            Phase::Holding(n) if n + 1 < self.hold_ticks => Phase::Holding(n + 1),
            Phase::Holding(_) => Phase::Erasing,
            Phase::Erasing if self.visible_chars > 0 => {
                self.visible_chars -= 1;
                Phase::Erasing
            }
            Phase::Erasing => {
                self.current = (self.current + 1) % self.phrases.len();
                Phase::Typing
            }
        };
    }

    /// The part of the current phrase typed so far
    pub fn visible(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.current) else {
            return "";
        };
        match phrase.char_indices().nth(self.visible_chars) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(
                self.visible(),
                Style::default()
                    .fg(Color::Rgb(255, 140, 0))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("▌", Style::default().fg(Color::White)),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
