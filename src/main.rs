//! car-list-tui - A terminal car list editor
//!
//! This is the main entry point for the application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;

fn main() -> Result<()> {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Stdout belongs to the TUI, so logging goes to a file
    match logging::init(&config) {
        Ok(Some(path)) => tracing::info!(log = %path.display(), "logging started"),
        Ok(None) => {}
        Err(e) => eprintln!("Warning: logging disabled: {:#}", e),
    }
    if let Some(e) = config_error {
        let message = format!("{:#}", e);
        tracing::warn!(error = %message, "using default config");
    }

    // Setup terminal
    let mut tui = Tui::new()?
        .with_tick_rate(config.tick_rate())
        .with_mouse(config.mouse);
    tui.enter()?;

    let mut app = App::new(config);
    let result = app.init().and_then(|()| run_app(&mut tui, &mut app));

    // Cleanup terminal; a run error takes precedence over a restore error
    let restored = tui.exit();

    if let Err(err) = result {
        if let Err(restore_err) = restored {
            let message = format!("{:#}", restore_err);
            tracing::warn!(error = %message, "terminal restore failed");
        }
        let message = format!("{:#}", err);
        tracing::error!(error = %message, "exiting after error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    restored
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            let area = frame.area();
            if let Err(e) = app.draw(frame, area) {
                tracing::error!(error = %e, "draw failed");
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            if let Some(action) = action {
                app.dispatch(action)?;
            }
        } else {
            app.dispatch(Action::Tick)?;
        }
    }

    Ok(())
}
