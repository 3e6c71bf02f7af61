//! Event loop: draw, poll, update, dispatch

use std::path::Path;
use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use avtorend_api::{FleetBackend, FleetService};
use avtorend_app::config::Settings;
use avtorend_app::{process_message, AppState, Message};
use avtorend_core::capability_hints_from_env;
use avtorend_core::prelude::*;

use crate::{event, render, terminal};

/// Capacity of the channel background tasks report on
const MESSAGE_CAPACITY: usize = 256;

/// Run the storefront until the user quits.
pub async fn run_with_project<B>(
    project_path: &Path,
    settings: Settings,
    language: String,
    service: FleetService<B>,
) -> Result<()>
where
    B: FleetBackend + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::init();
    let mouse = settings.ui.mouse;
    if mouse {
        terminal::enable_mouse()?;
    }

    let result = run_loop(&mut term, project_path, settings, language, &service);

    if mouse {
        terminal::disable_mouse();
    }
    ratatui::restore();
    result
}

fn run_loop<B>(
    term: &mut DefaultTerminal,
    project_path: &Path,
    settings: Settings,
    language: String,
    service: &FleetService<B>,
) -> Result<()>
where
    B: FleetBackend + Send + Sync + 'static,
{
    let size = term.size()?;
    let tick = settings.ui.tick();
    let mut state = AppState::new(
        settings,
        project_path.to_path_buf(),
        language,
        capability_hints_from_env(),
        size.width,
        size.height,
    );
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(MESSAGE_CAPACITY);

    info!("Starting storefront ({}x{})", size.width, size.height);
    process_message(&mut state, Message::Startup, &msg_tx, service);

    while !state.is_quitting() {
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(&mut state, msg, &msg_tx, service);
        }

        term.draw(|frame| render::view(frame, &state))?;

        let size = term.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let timeout = state
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()).min(tick))
            .unwrap_or(tick);

        if let Some(msg) = event::poll(&state, area, timeout)? {
            process_message(&mut state, msg, &msg_tx, service);
        }

        // Busy input must not starve drawer and resize timers
        let now = Instant::now();
        if state.next_deadline().is_some_and(|deadline| deadline <= now) {
            process_message(&mut state, Message::Tick(now), &msg_tx, service);
        }
    }

    state.teardown();
    info!("Storefront closed");
    Ok(())
}
