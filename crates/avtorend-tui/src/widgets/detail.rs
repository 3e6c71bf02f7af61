//! Vehicle detail modal

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use avtorend_app::{DetailState, PageTexts};
use avtorend_core::VehicleRecord;

use crate::theme::styles;
use crate::widgets::fleet::format_price;

pub struct VehicleDetail<'a> {
    detail: &'a DetailState,
    texts: &'a PageTexts,
}

impl<'a> VehicleDetail<'a> {
    pub fn new(detail: &'a DetailState, texts: &'a PageTexts) -> Self {
        Self { detail, texts }
    }

    fn vehicle_lines(&self, v: &'a VehicleRecord) -> Vec<Line<'a>> {
        let t = self.texts;
        let transmission = t.text(v.transmission.label_key());
        let mut lines = vec![
            Line::from(Span::styled(v.full_name(), styles::title())),
            Line::from(Span::styled(
                format!("{} · {} · {} {}", transmission, v.fuel_type, v.seats, t.text("fleet.seats")),
                styles::text_secondary(),
            )),
            Line::from(vec![
                Span::styled(format_price(v.daily_price), styles::accent_bold()),
                Span::styled(format!(" {}", t.text("fleet.per_day")), styles::text_muted()),
            ]),
        ];
        if let Some(hp) = v.horsepower {
            lines.push(Line::from(format!("{} {}", hp, t.text("detail.horsepower"))));
        }
        if let Some(deposit) = v.deposit {
            lines.push(Line::from(format!(
                "{}: {} ₽",
                t.text("detail.deposit"),
                format_price(deposit)
            )));
        }
        if let Some(color) = &v.color {
            lines.push(Line::from(Span::styled(color.as_str(), styles::text_secondary())));
        }
        if !v.is_available() {
            lines.push(Line::from(Span::styled(
                t.text("fleet.unavailable"),
                styles::status_red(),
            )));
        }
        if let Some(description) = &v.description {
            lines.push(Line::default());
            lines.push(Line::from(description.as_str()));
        }
        if !v.features.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(t.text("detail.features"), styles::accent())));
            lines.extend(v.features.iter().map(|f| Line::from(format!("• {}", f))));
        }
        lines
    }
}

/// Centered rect at most `width` x `height`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

impl Widget for VehicleDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = centered(area, 60, 16);
        Clear.render(rect, buf);

        let title = format!(" ← {} ", self.texts.text("detail.back"));
        let block = styles::modal_block(&title);
        let inner = block.inner(rect);
        block.render(rect, buf);

        let lines = match self.detail {
            DetailState::Loading(_) => vec![Line::from(Span::styled(
                self.texts.text("fleet.loading"),
                styles::text_muted(),
            ))],
            DetailState::NotFound(_) => vec![Line::from(Span::styled(
                self.texts.text("detail.not_found"),
                styles::status_red(),
            ))],
            DetailState::Loaded(vehicle) => self.vehicle_lines(vehicle),
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
