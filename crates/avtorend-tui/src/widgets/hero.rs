//! Hero block and category tabs at the top of the page

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use avtorend_app::PageTexts;

use crate::layout::{tab_rects, FLEET_TITLE_ROW, HERO_SUBTITLE_ROW, HERO_TITLE_ROW, SEARCH_ROW};
use crate::theme::styles;

/// Title, subtitle, search box placeholder and the fleet heading.
pub struct Hero<'a> {
    texts: &'a PageTexts,
}

impl<'a> Hero<'a> {
    pub fn new(texts: &'a PageTexts) -> Self {
        Self { texts }
    }
}

fn row(area: Rect, offset: u16) -> Rect {
    Rect::new(area.x + 1, area.y + offset, area.width.saturating_sub(2), 1).intersection(area)
}

impl Widget for Hero<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(self.texts.text("hero.title"), styles::title()))
            .render(row(area, HERO_TITLE_ROW), buf);
        Paragraph::new(Span::styled(
            self.texts.text("hero.subtitle"),
            styles::text_secondary(),
        ))
        .render(row(area, HERO_SUBTITLE_ROW), buf);
        Paragraph::new(Line::from(vec![
            Span::styled("🔍 ", styles::text_muted()),
            Span::styled(self.texts.placeholder("search.placeholder"), styles::text_muted()),
        ]))
        .render(row(area, SEARCH_ROW), buf);
        Paragraph::new(Span::styled(self.texts.text("fleet.title"), styles::accent_bold()))
            .render(row(area, FLEET_TITLE_ROW), buf);
    }
}

/// One tab per category, "all" first. Rendered on the tabs row.
pub struct CategoryTabs<'a> {
    labels: &'a [String],
    active: usize,
}

impl<'a> CategoryTabs<'a> {
    pub fn new(labels: &'a [String], active: usize) -> Self {
        Self { labels, active }
    }
}

impl Widget for CategoryTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, (label, rect)) in self.labels.iter().zip(tab_rects(self.labels)).enumerate() {
            let rect = Rect::new(area.x + rect.x, area.y, rect.width, 1).intersection(area);
            if rect.is_empty() {
                break;
            }
            let style = if i == self.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            Paragraph::new(Span::styled(format!(" {} ", label), style)).render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_hero_renders_builtin_texts() {
        let mut term = TestTerminal::with_size(80, 6);
        let texts = PageTexts::builtin();

        term.render_widget(Hero::new(&texts), Rect::new(0, 0, 80, 6));

        assert!(term.buffer_contains("Аренда автомобилей"));
        assert!(term.buffer_contains("Наш автопарк"));
        assert!(term.buffer_contains("Марка или модель"));
    }

    #[test]
    fn test_tabs_render_all_labels() {
        let mut term = TestTerminal::with_size(80, 1);
        let labels = vec![
            "Все".to_string(),
            "Эконом".to_string(),
            "Комфорт".to_string(),
            "SUV".to_string(),
        ];

        term.render_widget(CategoryTabs::new(&labels, 1), Rect::new(0, 0, 80, 1));

        for label in &labels {
            assert!(term.buffer_contains(label));
        }
    }
}
