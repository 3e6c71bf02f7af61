//! Mouse/touch handlers: clicks, swipe-to-dismiss and wheel scrolling

use crate::drawer::{DrawerTrigger, SwipeDecision};
use crate::input::{HitTarget, PointerEvent, PointerKind};
use crate::message::Message;
use crate::state::AppState;

use super::update::{apply_drawer_effects, handle_drawer_trigger};
use super::UpdateResult;

pub fn handle_pointer(state: &mut AppState, event: PointerEvent) -> UpdateResult {
    match event.kind {
        PointerKind::WheelUp => UpdateResult::message(Message::ScrollUp),
        PointerKind::WheelDown => UpdateResult::message(Message::ScrollDown),
        PointerKind::Down if state.drawer.phase().is_shown() => {
            handle_press_with_drawer(state, event);
            UpdateResult::none()
        }
        PointerKind::Down => handle_press_on_page(state, event),
        PointerKind::Drag => {
            let effects = state.drawer.pointer_drag(event.x, event.y);
            apply_drawer_effects(state, effects);
            UpdateResult::none()
        }
        PointerKind::Up => {
            let released = state.drawer.pointer_up(event.x, event.y, event.at, state.page.scroll_y);
            if let Some((decision, effects)) = released {
                apply_drawer_effects(state, effects);
                if let (SwipeDecision::Tap, HitTarget::NavItem(i)) = (decision, event.target) {
                    handle_drawer_trigger(state, DrawerTrigger::NavLink(i), event.at);
                }
            }
            UpdateResult::none()
        }
    }
}

fn handle_press_with_drawer(state: &mut AppState, event: PointerEvent) {
    let trigger = match event.target {
        HitTarget::Panel | HitTarget::NavItem(_) => {
            state.drawer.pointer_down(event.x, event.y, event.target, event.at);
            return;
        }
        HitTarget::Overlay => DrawerTrigger::OverlayClick,
        HitTarget::CloseButton => DrawerTrigger::CloseButton,
        HitTarget::Toggle => DrawerTrigger::Toggle,
        _ => DrawerTrigger::OutsideClick,
    };
    handle_drawer_trigger(state, trigger, event.at);
}

fn handle_press_on_page(state: &mut AppState, event: PointerEvent) -> UpdateResult {
    if state.fleet.detail().is_some() {
        return UpdateResult::message(Message::CloseDetail);
    }
    match event.target {
        HitTarget::Toggle => {
            handle_drawer_trigger(state, DrawerTrigger::Toggle, event.at);
            UpdateResult::none()
        }
        HitTarget::CategoryTab(index) => match state.fleet.filter_for_tab(index) {
            Some(filter) => UpdateResult::message(Message::SelectCategory(filter)),
            None => UpdateResult::none(),
        },
        HitTarget::Card(index) => {
            state.fleet.select(index);
            match state.fleet.vehicles().get(index) {
                Some(vehicle) => UpdateResult::message(Message::OpenDetail(vehicle.id)),
                None => UpdateResult::none(),
            }
        }
        HitTarget::Language(index) => match state.locale.supported().get(index) {
            Some(code) => UpdateResult::message(Message::SetLanguage(code.clone())),
            None => UpdateResult::none(),
        },
        _ => UpdateResult::none(),
    }
}
