//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use avtorend_core::prelude::*;

use crate::config::save_language;
use crate::drawer::{DrawerPhase, DrawerTrigger};
use crate::message::Message;
use crate::state::{AppPhase, AppState};
use crate::viewport::ViewportChange;

use super::{keys::handle_key, pointer::handle_pointer, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Pointer(event) => handle_pointer(state, event),

        Message::Resize { cols, rows } => {
            if let Some(change) = state.viewport.on_resize(cols, rows, Instant::now()) {
                apply_viewport_change(state, change);
            }
            UpdateResult::none()
        }

        Message::Tick(now) => {
            let effects = state.drawer.tick(now);
            apply_drawer_effects(state, effects);
            if let Some(change) = state.viewport.tick(now) {
                apply_viewport_change(state, change);
            }
            UpdateResult::none()
        }

        Message::Startup => {
            let code = state.locale.current().to_string();
            match state.locale.request(&code) {
                Ok(request) => UpdateResult::action_then(
                    UpdateAction::FetchLocale {
                        seq: request.seq,
                        code: request.code,
                    },
                    Message::CheckBackend,
                ),
                Err(e) => {
                    warn!("Not loading startup dictionary: {}", e);
                    UpdateResult::message(Message::CheckBackend)
                }
            }
        }

        // ─────────────────────────────────────────────────────────
        // Drawer
        // ─────────────────────────────────────────────────────────
        Message::Drawer(trigger) => {
            handle_drawer_trigger(state, trigger, Instant::now());
            UpdateResult::none()
        }

        Message::DrawerFocus { backwards } => {
            let effects = state.drawer.cycle_focus(backwards);
            state.apply_drawer_effects(effects);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Page scroll
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            state.scroll_by(-1);
            UpdateResult::none()
        }
        Message::ScrollDown => {
            state.scroll_by(1);
            UpdateResult::none()
        }
        Message::PageUp => {
            let page = i64::from(state.visible_rows().max(1));
            state.scroll_by(-page);
            UpdateResult::none()
        }
        Message::PageDown => {
            let page = i64::from(state.visible_rows().max(1));
            state.scroll_by(page);
            UpdateResult::none()
        }
        Message::ScrollToTop => {
            state.scroll_to(0);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Fleet
        // ─────────────────────────────────────────────────────────
        Message::CheckBackend => {
            UpdateResult::action_then(UpdateAction::CheckHealth, Message::LoadCategories)
        }

        Message::BackendHealth(health) => {
            state.backend = health.into();
            UpdateResult::none()
        }

        Message::LoadCategories => {
            UpdateResult::action_then(UpdateAction::FetchCategories, Message::RefreshVehicles)
        }

        Message::CategoriesLoaded(outcome) => {
            state.fleet.set_categories(outcome);
            UpdateResult::none()
        }

        Message::RefreshVehicles => {
            let filter = state.fleet.filter();
            request_vehicles(state, filter)
        }

        Message::SelectCategory(filter) => request_vehicles(state, filter),

        Message::VehiclesLoaded { seq, outcome } => {
            if state.fleet.complete(seq, outcome) {
                let max = state.max_scroll();
                if state.page.scroll_y > max {
                    state.scroll_to(max);
                }
            }
            UpdateResult::none()
        }

        Message::NextCard => {
            state.fleet.select_next();
            UpdateResult::none()
        }

        Message::PrevCard => {
            state.fleet.select_prev();
            UpdateResult::none()
        }

        Message::OpenDetail(id) => {
            state.fleet.open_detail(id);
            UpdateResult::action(UpdateAction::FetchVehicle { id })
        }

        Message::DetailLoaded { id, vehicle } => {
            state.fleet.detail_loaded(id, vehicle);
            UpdateResult::none()
        }

        Message::CloseDetail => {
            state.fleet.close_detail();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Localization
        // ─────────────────────────────────────────────────────────
        Message::SetLanguage(code) => match state.locale.request(&code) {
            Ok(request) => {
                // Saved here so overlapping switches are written in order
                if let Err(e) = save_language(&state.project_path, &request.code) {
                    warn!("Failed to persist language '{}': {}", request.code, e);
                }
                UpdateResult::action(UpdateAction::FetchLocale {
                    seq: request.seq,
                    code: request.code,
                })
            }
            Err(e) => {
                warn!("{}", e);
                UpdateResult::none()
            }
        },

        Message::CycleLanguage => match state.locale.next_code() {
            Some(code) => UpdateResult::message(Message::SetLanguage(code.to_string())),
            None => UpdateResult::none(),
        },

        Message::LocaleLoaded { seq, dictionary } => {
            state.locale.complete(seq, &dictionary, &mut state.texts);
            UpdateResult::none()
        }

        Message::LocaleFailed { seq, error } => {
            state.locale.fail(seq, &error);
            UpdateResult::none()
        }
    }
}

fn request_vehicles(state: &mut AppState, filter: avtorend_core::CategoryFilter) -> UpdateResult {
    let request = state.fleet.begin_request(filter);
    UpdateResult::action(UpdateAction::FetchVehicles {
        seq: request.seq,
        query: request.query,
    })
}

/// Route a trigger to the drawer and apply what it asks for.
pub(crate) fn handle_drawer_trigger(state: &mut AppState, trigger: DrawerTrigger, now: Instant) {
    let effects = state.drawer.trigger(trigger, now, state.page.scroll_y);
    if effects.is_empty() {
        return;
    }
    if let DrawerTrigger::NavLink(index) = trigger {
        state.pending_anchor = state
            .drawer
            .markup()
            .nav_items
            .get(index)
            .map(|item| item.anchor.clone());
    }
    apply_drawer_effects(state, effects);
}

/// Apply effects, then follow a pending nav anchor once the drawer is closed.
pub(crate) fn apply_drawer_effects(
    state: &mut AppState,
    effects: Vec<crate::drawer::DrawerEffect>,
) {
    state.apply_drawer_effects(effects);
    if state.drawer.phase() == DrawerPhase::Closed {
        if let Some(anchor) = state.pending_anchor.take() {
            let row = state.anchor_row(&anchor);
            debug!("Scrolling to #{} (row {})", anchor, row);
            state.scroll_to(row);
        }
    }
}

fn apply_viewport_change(state: &mut AppState, change: ViewportChange) {
    let effects = state.drawer.viewport_changed(
        &change.previous,
        &change.current,
        f64::from(change.signals.width_px),
    );
    apply_drawer_effects(state, effects);
    let max = state.max_scroll();
    if !state.page.scroll_locked && state.page.scroll_y > max {
        state.scroll_to(max);
    }
}
