//! Footer hint line

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use avtorend_app::state::{AppState, BackendStatus};

use crate::theme::styles;

pub struct Footer<'a> {
    state: &'a AppState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            format!(" {}", self.state.texts.text("footer.hint")),
            styles::text_muted(),
        )];
        match &self.state.backend {
            BackendStatus::Degraded(status) => {
                spans.push(Span::styled(format!("  api: {}", status), styles::accent()));
            }
            BackendStatus::Unreachable => {
                spans.push(Span::styled("  api: offline", styles::status_red()));
            }
            BackendStatus::Healthy | BackendStatus::Unknown => {}
        }
        if let Some(total) = self.state.fleet.total_count() {
            spans.push(Span::styled(format!("  [{}]", total), styles::text_secondary()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_state, TestTerminal};

    #[test]
    fn test_footer_shows_offline_backend() {
        let mut term = TestTerminal::with_size(120, 1);
        let mut state = test_state(120, 30);
        state.backend = BackendStatus::Unreachable;

        term.render_widget(Footer::new(&state), term.area());

        assert!(term.buffer_contains("offline"));
        assert!(term.buffer_contains("q"));
    }
}
