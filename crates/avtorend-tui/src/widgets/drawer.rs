//! Navigation drawer: dimming overlay and the sliding panel

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use avtorend_app::state::AppState;
use avtorend_app::FocusTarget;

use crate::layout::{drawer_areas_for, DrawerAreas};
use crate::theme::{palette, styles};

pub struct NavDrawer<'a> {
    state: &'a AppState,
    /// Overlay is only drawn below desktop width
    with_overlay: bool,
}

impl<'a> NavDrawer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            state,
            with_overlay: !state.viewport.current().device_tier.is_desktop(),
        }
    }

    fn render_panel(&self, areas: &DrawerAreas, buf: &mut Buffer) {
        let texts = &self.state.texts;
        let focus = self.state.focus;
        let panel = areas.panel;

        Clear.render(panel, buf);
        let close_focused = focus == Some(FocusTarget::CloseButton);
        let mut block = Block::default()
            .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(styles::border_active())
            .style(Style::default().bg(palette::POPUP_BG))
            .title(Span::styled(format!(" {} ", texts.text("menu.title")), styles::title()));
        if close_focused {
            block = block.title_bottom(Span::styled(
                format!(" {} ", texts.title("menu.close")),
                styles::text_muted(),
            ));
        }
        block.render(panel, buf);

        let close_style = if close_focused {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        Paragraph::new(Span::styled(" ✕ ", close_style)).render(areas.close_button, buf);

        for (i, (item, rect)) in self
            .state
            .drawer
            .markup()
            .nav_items
            .iter()
            .zip(&areas.nav_items)
            .enumerate()
        {
            let style = if focus == Some(FocusTarget::NavItem(i)) {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };
            Paragraph::new(Span::styled(format!(" {}", texts.text(&item.label_key)), style))
                .render(*rect, buf);
        }
    }
}

impl Widget for NavDrawer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = &self.state.drawer_view;
        if !view.visible {
            return;
        }

        if self.with_overlay && view.overlay_opacity > 0.0 {
            let dim = if view.overlay_opacity >= 0.5 {
                Style::default().fg(palette::TEXT_MUTED).bg(palette::OVERLAY_BG)
            } else {
                Style::default().fg(palette::TEXT_SECONDARY)
            };
            buf.set_style(area, dim);
        }

        // Draw the full panel off-screen, then copy the part left on screen
        let areas = drawer_areas_for(self.state, area);
        let full = Rect::new(0, areas.panel.y, areas.panel.width, areas.panel.height);
        let shift = areas.panel.x;
        let local = DrawerAreas {
            panel: full,
            close_button: Rect { x: areas.close_button.x - shift, ..areas.close_button },
            nav_items: areas
                .nav_items
                .iter()
                .map(|r| Rect { x: r.x - shift, ..*r })
                .collect(),
        };
        let mut scratch = Buffer::empty(full);
        self.render_panel(&local, &mut scratch);

        for y in full.top()..full.bottom() {
            for x in full.left()..full.right() {
                let target = Position::new(shift.saturating_add(x), y);
                if !area.contains(target) {
                    continue;
                }
                if let (Some(src), Some(dst)) = (scratch.cell((x, y)), buf.cell_mut(target)) {
                    *dst = src.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_state, TestTerminal};
    use avtorend_app::{update, DrawerTrigger, Message};
    use avtorend_core::LocaleDictionary;
    use std::time::{Duration, Instant};

    fn open(state: &mut AppState) {
        update(state, Message::Drawer(DrawerTrigger::Toggle));
        update(state, Message::Tick(Instant::now() + Duration::from_secs(1)));
    }

    #[test]
    fn test_hidden_drawer_renders_nothing() {
        let mut term = TestTerminal::with_size(50, 40);
        let state = test_state(50, 40);

        term.render_widget(NavDrawer::new(&state), term.area());

        assert!(!term.buffer_contains("Меню"));
    }

    #[test]
    fn test_open_drawer_lists_nav_items() {
        let mut term = TestTerminal::with_size(50, 40);
        let mut state = test_state(50, 40);
        open(&mut state);

        term.render_widget(NavDrawer::new(&state), term.area());

        assert!(term.buffer_contains("Меню"));
        assert!(term.buffer_contains("Главная"));
        assert!(term.buffer_contains("Контакты"));
        assert!(term.buffer_contains("✕"));
    }

    #[test]
    fn test_close_button_title_follows_focus() {
        let mut term = TestTerminal::with_size(50, 40);
        let mut state = test_state(50, 40);
        open(&mut state);
        assert_eq!(state.focus, Some(FocusTarget::CloseButton));

        term.render_widget(NavDrawer::new(&state), term.area());
        assert!(term.buffer_contains("Закрыть меню"));

        let en: LocaleDictionary = [("menu.close", "Close menu")].into_iter().collect();
        state.texts.apply(&en);
        term.render_widget(NavDrawer::new(&state), term.area());
        assert!(term.buffer_contains("Close menu"));

        state.focus = Some(FocusTarget::NavItem(0));
        let mut term = TestTerminal::with_size(50, 40);
        term.render_widget(NavDrawer::new(&state), term.area());
        assert!(!term.buffer_contains("Close menu"));
    }

    #[test]
    fn test_swiped_panel_is_clipped_at_screen_edge() {
        let mut term = TestTerminal::with_size(50, 40);
        let mut state = test_state(50, 40);
        open(&mut state);
        state.drawer_view.panel_translate = 0.9;

        term.render_widget(NavDrawer::new(&state), term.area());

        assert!(!term.buffer_contains("Контакты"));
    }
}
