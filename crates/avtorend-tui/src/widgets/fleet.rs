//! Vehicle grid: cards, loading skeleton, empty and error states

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use avtorend_app::state::HERO_HEIGHT;
use avtorend_app::{FleetView, PageTexts, RenderState};
use avtorend_core::VehicleRecord;

use crate::layout::card_rect;
use crate::theme::{palette, styles};

/// Placeholder cards drawn while a request is in flight
const SKELETON_ROWS: usize = 2;

/// Format a daily price with thin grouping: `3 500`.
pub fn format_price(price: f64) -> String {
    let whole = price.round().max(0.0) as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

pub struct VehicleCard<'a> {
    vehicle: &'a VehicleRecord,
    texts: &'a PageTexts,
    selected: bool,
}

impl<'a> VehicleCard<'a> {
    pub fn new(vehicle: &'a VehicleRecord, texts: &'a PageTexts) -> Self {
        Self {
            vehicle,
            texts,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for VehicleCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let v = self.vehicle;
        let block = styles::glass_block(self.selected)
            .title(Span::styled(format!(" {} {} ", v.brand, v.model), styles::title()));
        let inner = block.inner(area);
        block.render(area, buf);

        let transmission = self.texts.text(v.transmission.label_key());
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} · {} · {}", v.year, transmission, v.fuel_type),
                styles::text_secondary(),
            )),
            Line::from(Span::styled(
                format!("{} {}", v.seats, self.texts.text("fleet.seats")),
                styles::text_secondary(),
            )),
            Line::from(vec![
                Span::styled(format_price(v.daily_price), styles::accent_bold()),
                Span::styled(
                    format!(" {}", self.texts.text("fleet.per_day")),
                    styles::text_muted(),
                ),
            ]),
        ];
        if !v.is_available() {
            lines.push(Line::from(Span::styled(
                self.texts.text("fleet.unavailable"),
                styles::status_red(),
            )));
        }
        Paragraph::new(lines).render(inner, buf);
    }
}

struct SkeletonCard;

impl Widget for SkeletonCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);
        let bar = Style::default().fg(palette::SKELETON);
        let lines: Vec<Line> = [0.8, 0.5, 0.3]
            .iter()
            .map(|fraction| {
                let width = (f64::from(inner.width) * fraction) as usize;
                Line::from(Span::styled("░".repeat(width), bar))
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

/// The grid area on the page canvas, starting at the first card row.
pub struct FleetGrid<'a> {
    fleet: &'a FleetView,
    texts: &'a PageTexts,
    columns: usize,
}

impl<'a> FleetGrid<'a> {
    pub fn new(fleet: &'a FleetView, texts: &'a PageTexts, columns: usize) -> Self {
        Self {
            fleet,
            texts,
            columns,
        }
    }

    fn card_area(&self, area: Rect, index: usize) -> Rect {
        let rect = card_rect(area.width, self.columns, index);
        Rect::new(
            area.x + rect.x,
            area.y + (rect.y - HERO_HEIGHT),
            rect.width,
            rect.height,
        )
        .intersection(area)
    }

    fn render_message(&self, area: Rect, buf: &mut Buffer, lines: Vec<Line<'_>>) {
        let rect = Rect::new(area.x, area.y + 2, area.width, 2).intersection(area);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(rect, buf);
    }
}

impl Widget for FleetGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.fleet.render_state() {
            RenderState::Skeleton => {
                for i in 0..self.columns * SKELETON_ROWS {
                    let rect = self.card_area(area, i);
                    if !rect.is_empty() {
                        SkeletonCard.render(rect, buf);
                    }
                }
            }
            RenderState::Grid => {
                let selected = self.fleet.selected();
                for (i, vehicle) in self.fleet.vehicles().iter().enumerate() {
                    let rect = self.card_area(area, i);
                    if rect.is_empty() {
                        continue;
                    }
                    VehicleCard::new(vehicle, self.texts)
                        .selected(selected == Some(i))
                        .render(rect, buf);
                }
            }
            RenderState::Empty => self.render_message(
                area,
                buf,
                vec![Line::from(Span::styled(
                    self.texts.text("fleet.empty"),
                    styles::text_secondary(),
                ))],
            ),
            RenderState::Error { reason } => self.render_message(
                area,
                buf,
                vec![
                    Line::from(Span::styled(
                        self.texts.text("fleet.error"),
                        styles::status_red(),
                    )),
                    Line::from(Span::styled(reason.as_str(), styles::text_muted())),
                ],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_vehicles, TestTerminal};
    use avtorend_api::FetchOutcome;
    use avtorend_core::CategoryFilter;

    fn loaded(outcome: FetchOutcome<VehicleRecord>) -> FleetView {
        let mut fleet = FleetView::new(0);
        let request = fleet.begin_request(CategoryFilter::All);
        fleet.complete(request.seq, outcome);
        fleet
    }

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(3500.0), "3 500");
        assert_eq!(format_price(999.4), "999");
        assert_eq!(format_price(1250000.0), "1 250 000");
    }

    #[test]
    fn test_grid_renders_cards() {
        let mut term = TestTerminal::with_size(90, 14);
        let texts = PageTexts::builtin();
        let fleet = loaded(FetchOutcome::live(test_vehicles(3)));

        term.render_widget(FleetGrid::new(&fleet, &texts, 3), Rect::new(0, 0, 90, 14));

        assert!(term.buffer_contains("Camry 1"));
        assert!(term.buffer_contains("Camry 3"));
        assert!(term.buffer_contains("3 500"));
    }

    #[test]
    fn test_skeleton_while_loading() {
        let mut term = TestTerminal::with_size(60, 14);
        let texts = PageTexts::builtin();
        let mut fleet = FleetView::new(0);
        fleet.begin_request(CategoryFilter::All);

        term.render_widget(FleetGrid::new(&fleet, &texts, 2), Rect::new(0, 0, 60, 14));

        assert!(term.buffer_contains("░"));
    }

    #[test]
    fn test_empty_state_message() {
        let mut term = TestTerminal::with_size(60, 8);
        let texts = PageTexts::builtin();
        let fleet = loaded(FetchOutcome::live(Vec::new()));

        term.render_widget(FleetGrid::new(&fleet, &texts, 1), Rect::new(0, 0, 60, 8));

        assert!(term.buffer_contains("Автомобили не найдены"));
    }

    #[test]
    fn test_error_state_shows_reason() {
        let mut term = TestTerminal::with_size(60, 8);
        let texts = PageTexts::builtin();
        let fleet = loaded(FetchOutcome::fallback(Vec::new(), "connection refused"));

        term.render_widget(FleetGrid::new(&fleet, &texts, 1), Rect::new(0, 0, 60, 8));

        assert!(term.buffer_contains("Не удалось загрузить автопарк"));
        assert!(term.buffer_contains("connection refused"));
    }
}
