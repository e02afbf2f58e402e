//! Shell chrome drawn around every mounted page
//!
//! Brand and location bar on top, the page body, an optional status line
//! (errors and notices) and the key help bar at the bottom.

use crate::components::calculate_shell_layout;
use crate::pages::Page;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BRAND: Color = Color::Rgb(255, 140, 0);

/// Everything the chrome shows besides the page itself
pub struct ShellRenderContext<'a> {
    pub location: &'a str,
    pub mounted_at: Option<&'a str>,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

/// Draw the chrome and hand the body area to the mounted page
pub fn draw_shell(
    frame: &mut Frame,
    area: Rect,
    page: Option<&mut (dyn Page + 'static)>,
    ctx: &ShellRenderContext,
) -> Result<()> {
    let has_status = ctx.error.is_some() || ctx.status_message.is_some();
    let layout = calculate_shell_layout(area, has_status);

    render_nav_bar(frame, layout.nav, ctx);

    if let Some(page) = page {
        page.draw(frame, layout.body)?;
    }

    if let Some(status_area) = layout.status {
        render_status_bar(frame, status_area, ctx);
    }
    render_help_bar(frame, layout.help);

    Ok(())
}

fn render_nav_bar(frame: &mut Frame, area: Rect, ctx: &ShellRenderContext) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(18), Constraint::Min(0)])
        .split(inner);

    let brand = Line::from(vec![
        Span::styled(" ● ", Style::default().fg(BRAND)),
        Span::styled(
            "Gesture Flow",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(brand), chunks[0]);

    let mut location = vec![Span::styled(
        ctx.location.to_string(),
        Style::default().fg(Color::Cyan),
    )];
    if let Some(time) = ctx.mounted_at {
        location.push(Span::styled(
            format!("  mounted {} ", time),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(location)).alignment(Alignment::Right),
        chunks[1],
    );
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &ShellRenderContext) {
    let mut spans = vec![];

    if let Some(error) = ctx.error {
        spans.push(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Green),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let key = |k: &str, color: Color| {
        Span::styled(
            format!(" {} ", k),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    };

    let help_spans = vec![
        key("q", Color::Yellow),
        Span::raw("Quit "),
        key("Tab", Color::Cyan),
        Span::raw("Focus "),
        key("Enter", Color::Green),
        Span::raw("Activate "),
        key(":", Color::Cyan),
        Span::raw("Go to "),
        key("Esc", Color::Magenta),
        Span::raw("Back "),
        key("?", Color::White),
        Span::raw("Help"),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(help_spans)).alignment(Alignment::Left),
        area,
    );
}
