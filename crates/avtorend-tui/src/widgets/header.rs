//! Header bar: brand, backend status, language buttons and the menu toggle

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use avtorend_app::state::{AppState, BackendStatus};
use avtorend_app::FocusTarget;

use crate::layout::header_buttons;
use crate::theme::{palette, styles};

pub const BRAND: &str = "AvtoRend";

pub struct MainHeader<'a> {
    backend: &'a BackendStatus,
    languages: &'a [String],
    current_language: &'a str,
    pending_language: Option<&'a str>,
    /// `aria-expanded` of the toggle
    expanded: bool,
    toggle_focused: bool,
    /// Title attribute of the toggle, shown while it has focus
    toggle_title: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            backend: &state.backend,
            languages: state.locale.supported(),
            current_language: state.locale.current(),
            pending_language: state.locale.pending(),
            expanded: state.drawer_view.aria_expanded,
            toggle_focused: state.focus == Some(FocusTarget::Toggle),
            toggle_title: if state.drawer_view.aria_expanded {
                state.texts.title("menu.close")
            } else {
                state.texts.title("menu.open")
            },
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (dot, dot_style) = styles::backend_indicator(self.backend);
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", dot), dot_style),
            Span::styled(BRAND, styles::accent_bold()),
        ]))
        .render(inner, buf);

        let buttons = header_buttons(area, self.languages.len());
        for (code, rect) in self.languages.iter().zip(&buttons.languages) {
            let style = if code == self.current_language {
                styles::focused_selected()
            } else if Some(code.as_str()) == self.pending_language {
                styles::accent()
            } else {
                styles::text_secondary()
            };
            Paragraph::new(Span::styled(format!(" {} ", code.to_uppercase()), style))
                .render(*rect, buf);
        }

        let glyph = if self.expanded { " ✕ " } else { " ☰ " };
        let style = if self.toggle_focused {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        Paragraph::new(Span::styled(glyph, style)).render(buttons.toggle, buf);

        if self.toggle_focused {
            let right = buttons.languages.first().map_or(buttons.toggle.x, |r| r.x);
            let brand_end = inner.x.saturating_add(BRAND.width() as u16 + 3);
            let width = u16::try_from(self.toggle_title.width() + 1).unwrap_or(u16::MAX);
            let x = right.saturating_sub(width).max(brand_end);
            if x < right {
                Paragraph::new(Span::styled(self.toggle_title, styles::text_muted()))
                    .render(Rect::new(x, inner.y, right - x, 1), buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_state, TestTerminal};
    use avtorend_core::LocaleDictionary;

    #[test]
    fn test_header_renders_brand_and_languages() {
        let mut term = TestTerminal::new();
        let state = test_state(80, 24);

        term.render_widget(MainHeader::new(&state), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains(BRAND));
        assert!(term.buffer_contains("RU"));
        assert!(term.buffer_contains("EN"));
        assert!(term.buffer_contains("☰"));
    }

    #[test]
    fn test_toggle_shows_close_glyph_when_expanded() {
        let mut term = TestTerminal::new();
        let mut state = test_state(80, 24);
        state.drawer_view.aria_expanded = true;

        term.render_widget(MainHeader::new(&state), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("✕"));
        assert!(!term.buffer_contains("☰"));
    }

    #[test]
    fn test_focused_toggle_shows_translated_title() {
        let mut term = TestTerminal::new();
        let mut state = test_state(80, 24);

        term.render_widget(MainHeader::new(&state), Rect::new(0, 0, 80, 3));
        assert!(!term.buffer_contains("Открыть меню"));

        state.focus = Some(FocusTarget::Toggle);
        term.render_widget(MainHeader::new(&state), Rect::new(0, 0, 80, 3));
        assert!(term.buffer_contains("Открыть меню"));

        let en: LocaleDictionary = [("menu.open", "Open menu")].into_iter().collect();
        state.texts.apply(&en);
        term.render_widget(MainHeader::new(&state), Rect::new(0, 0, 80, 3));
        assert!(term.buffer_contains("Open menu"));
    }
}
