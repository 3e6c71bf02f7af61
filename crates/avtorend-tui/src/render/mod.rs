//! Main render/view function (View in TEA pattern)


use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};
use ratatui::Frame;

use avtorend_app::state::{grid_columns, AppState, HERO_HEIGHT};

use crate::layout::{self, tab_labels, TABS_ROW};
use crate::theme::palette;
use crate::widgets;

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    frame.render_widget(widgets::MainHeader::new(state), areas.header);
    render_page(frame.buffer_mut(), areas.content, state);
    frame.render_widget(widgets::Footer::new(state), areas.footer);

    if let Some(detail) = state.fleet.detail() {
        frame.render_widget(widgets::VehicleDetail::new(detail, &state.texts), areas.content);
    }

    // Drawer covers everything, header included
    frame.render_widget(widgets::NavDrawer::new(state), area);
}

/// Draw the page canvas and copy the window at `scroll_y` into `window`.
fn render_page(buf: &mut Buffer, window: Rect, state: &AppState) {
    if window.is_empty() {
        return;
    }
    let rows = state
        .content_rows()
        .max(u32::from(window.height))
        .min(u32::from(u16::MAX)) as u16;
    let canvas_area = Rect::new(0, 0, window.width, rows);
    let mut canvas = Buffer::empty(canvas_area);

    widgets::Hero::new(&state.texts).render(
        Rect::new(0, 0, window.width, HERO_HEIGHT).intersection(canvas_area),
        &mut canvas,
    );
    let labels = tab_labels(state);
    widgets::CategoryTabs::new(&labels, state.fleet.active_tab()).render(
        Rect::new(0, TABS_ROW, window.width, 1).intersection(canvas_area),
        &mut canvas,
    );

    let columns = grid_columns(state.viewport.current().device_tier);
    let grid_area = Rect::new(0, HERO_HEIGHT, window.width, rows.saturating_sub(HERO_HEIGHT));
    widgets::FleetGrid::new(&state.fleet, &state.texts, columns)
        .render(grid_area.intersection(canvas_area), &mut canvas);

    let scroll = u16::try_from(state.page.scroll_y).unwrap_or(u16::MAX);
    for y in 0..window.height {
        let Some(src_y) = scroll.checked_add(y) else {
            break;
        };
        for x in 0..window.width {
            let dst = Position::new(window.x + x, window.y + y);
            if let (Some(src), Some(cell)) = (canvas.cell((x, src_y)), buf.cell_mut(dst)) {
                *cell = src.clone();
            }
        }
    }
}
