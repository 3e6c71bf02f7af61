//! Key event handlers

use crate::drawer::{DrawerTrigger, FocusTarget};
use crate::input::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on what is on screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if matches!(key, InputKey::CharCtrl('c') | InputKey::Char('q')) {
        return Some(Message::Quit);
    }

    if state.drawer.phase().is_shown() {
        return handle_key_drawer(state, key);
    }
    if state.fleet.detail().is_some() {
        return handle_key_detail(key);
    }
    handle_key_page(state, key)
}

fn handle_key_drawer(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::Drawer(DrawerTrigger::Escape)),
        InputKey::Char('m') => Some(Message::Drawer(DrawerTrigger::Toggle)),
        InputKey::Tab | InputKey::Down => Some(Message::DrawerFocus { backwards: false }),
        InputKey::BackTab | InputKey::Up => Some(Message::DrawerFocus { backwards: true }),
        InputKey::Enter | InputKey::Char(' ') => match state.focus? {
            FocusTarget::CloseButton => Some(Message::Drawer(DrawerTrigger::CloseButton)),
            FocusTarget::NavItem(i) => Some(Message::Drawer(DrawerTrigger::NavLink(i))),
            FocusTarget::Toggle => Some(Message::Drawer(DrawerTrigger::Toggle)),
        },
        // Background scroll requests; the scroll lock swallows them
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::PageUp => Some(Message::PageUp),
        _ => None,
    }
}

fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Backspace | InputKey::Enter => Some(Message::CloseDetail),
        _ => None,
    }
}

fn handle_key_page(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('m') => Some(Message::Drawer(DrawerTrigger::Toggle)),

        // Categories
        InputKey::Left => Some(Message::SelectCategory(state.fleet.adjacent_filter(false))),
        InputKey::Right => Some(Message::SelectCategory(state.fleet.adjacent_filter(true))),
        InputKey::Char(c) if c.is_ascii_digit() => {
            let index = c.to_digit(10)? as usize;
            state.fleet.filter_for_tab(index).map(Message::SelectCategory)
        }
        InputKey::Char('r') => Some(Message::RefreshVehicles),

        // Page scroll
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),

        // Cards
        InputKey::Tab => Some(Message::NextCard),
        InputKey::BackTab => Some(Message::PrevCard),
        InputKey::Enter => state
            .fleet
            .selected_vehicle()
            .map(|v| Message::OpenDetail(v.id)),

        // Language
        InputKey::Char('l') | InputKey::Char('L') => Some(Message::CycleLanguage),

        _ => None,
    }
}
