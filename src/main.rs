//! gesture-flow - the presentation shell of a gesture-controlled interface
//!
//! This is the main entry point. It loads the config and gesture catalog,
//! mounts the start page and runs the event loop over the Component
//! Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod pages;
mod router;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::{CatalogSource, Config};
use crate::model::{CatalogPreset, GestureCatalog};
use crate::services::UnconfiguredAuth;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::rc::Rc;
use std::time::Duration;

fn main() -> Result<()> {
    let config = Config::load()?;
    if let Err(e) = logging::init(&config) {
        eprintln!("Logging disabled: {:#}", e);
    }
    if !Config::exists() {
        if let Err(e) = config.save() {
            tracing::warn!(error = %e, "could not write default config");
        }
    }

    let (catalog, catalog_error) = load_catalog(&config.tutorial_catalog);

    let start_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.start_path.clone());

    // Create app state
    let mut app = App::new(&config, Rc::new(catalog), Rc::new(UnconfiguredAuth))?;
    app.error = catalog_error;
    app.start(&start_path);

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(config.tick_rate_ms));
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = ?err, "event loop failed");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Load the configured catalog; a broken file falls back to the board preset
fn load_catalog(source: &CatalogSource) -> (GestureCatalog, Option<String>) {
    match services::load_catalog(source) {
        Ok(catalog) => (catalog, None),
        Err(e) => {
            tracing::error!(error = %e, "gesture catalog rejected, using board preset");
            (
                GestureCatalog::preset(CatalogPreset::Board),
                Some(format!("Gesture catalog not loaded: {}", e)),
            )
        }
    }
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        let mut draw_error = None;
        tui.draw(|frame| {
            let area = frame.area();
            draw_error = app.draw(frame, area).err();
        })?;
        if let Some(e) = draw_error {
            app.record_draw_error(e);
        }

        // Check for a pending outbound link
        if let Some(url) = app.pending_link.take() {
            match services::open_external(&url) {
                Ok(()) => app.status_message = Some(format!("Opened {}", url)),
                Err(e) => {
                    tracing::warn!(error = %e, "could not open link");
                    app.error = Some(format!("{:#}", e));
                }
            }
            continue;
        }

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Process the action
            if let Some(action) = action {
                // Action might produce a follow-up action
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    current_action = app.update(a)?;
                }
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
