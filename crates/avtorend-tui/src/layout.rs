//! Screen layout and hit testing
//!
//! The page below the header is laid out on a virtual canvas of
//! [`AppState::content_rows`] rows and shown through a window starting at
//! `page.scroll_y`. Row positions on that canvas are fixed so nav anchors
//! and pointer hit tests agree with what is drawn.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

use avtorend_app::state::{grid_columns, AppState, CARD_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT, HERO_HEIGHT};
use avtorend_app::HitTarget;

/// Page rows of the hero block.
pub const HERO_TITLE_ROW: u16 = 0;
pub const HERO_SUBTITLE_ROW: u16 = 1;
pub const SEARCH_ROW: u16 = 2;
pub const FLEET_TITLE_ROW: u16 = 4;
pub const TABS_ROW: u16 = 5;

/// Width of the menu toggle button (" ☰ ")
pub const TOGGLE_WIDTH: u16 = 3;
/// Width of a language button (" RU ")
pub const LANGUAGE_WIDTH: u16 = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Scrollable page window
    pub content: Rect,
    pub footer: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        footer: chunks[2],
    }
}

/// Clickable controls inside the header bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderButtons {
    pub toggle: Rect,
    pub languages: Vec<Rect>,
}

/// Toggle sits at the right edge, language buttons to its left.
pub fn header_buttons(header: Rect, language_count: usize) -> HeaderButtons {
    let inner = Rect {
        x: header.x.saturating_add(1),
        y: header.y.saturating_add(1),
        width: header.width.saturating_sub(2),
        height: header.height.saturating_sub(2).min(1),
    };
    let toggle_x = inner.right().saturating_sub(TOGGLE_WIDTH).max(inner.x);
    let toggle = Rect::new(toggle_x, inner.y, TOGGLE_WIDTH.min(inner.width), inner.height);

    let count = language_count as u16;
    let start = toggle_x
        .saturating_sub(1)
        .saturating_sub(count.saturating_mul(LANGUAGE_WIDTH));
    let languages = (0..count)
        .map(|i| Rect::new(start + i * LANGUAGE_WIDTH, inner.y, LANGUAGE_WIDTH, inner.height))
        .filter(|r| r.x >= inner.x)
        .collect();

    HeaderButtons { toggle, languages }
}

/// Labels of the category tabs: "all" followed by every category.
pub fn tab_labels(state: &AppState) -> Vec<String> {
    std::iter::once(state.texts.text("fleet.all").to_string())
        .chain(state.fleet.categories().iter().map(|c| c.name.clone()))
        .collect()
}

/// Tab positions on the page canvas, one per label.
pub fn tab_rects(labels: &[String]) -> Vec<Rect> {
    let mut x = 1u16;
    labels
        .iter()
        .map(|label| {
            let width = (label.width() as u16).saturating_add(2);
            let rect = Rect::new(x, TABS_ROW, width, 1);
            x = x.saturating_add(width + 1);
            rect
        })
        .collect()
}

/// Card position on the page canvas.
pub fn card_rect(width: u16, columns: usize, index: usize) -> Rect {
    let columns = columns.max(1);
    let col_width = width / columns as u16;
    let row = (index / columns) as u16;
    Rect::new(
        (index % columns) as u16 * col_width,
        HERO_HEIGHT.saturating_add(row.saturating_mul(CARD_HEIGHT)),
        col_width,
        CARD_HEIGHT,
    )
}

/// Index of the card under a page-canvas position.
pub fn card_at(width: u16, columns: usize, count: usize, page_col: u16, page_row: u32) -> Option<usize> {
    let columns = columns.max(1);
    let col_width = (width / columns as u16).max(1);
    let grid_row = page_row.checked_sub(u32::from(HERO_HEIGHT))? / u32::from(CARD_HEIGHT);
    let column = usize::from(page_col / col_width);
    if column >= columns {
        return None;
    }
    let index = grid_row as usize * columns + column;
    (index < count).then_some(index)
}

/// Drawer panel geometry in screen cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerAreas {
    /// Full panel, shifted right by the current swipe offset
    pub panel: Rect,
    pub close_button: Rect,
    pub nav_items: Vec<Rect>,
}

/// Panel width in cells for a pixel width.
pub fn panel_columns(panel_width_px: f64, cell_width_px: u32) -> u16 {
    let cols = (panel_width_px / f64::from(cell_width_px.max(1))).ceil();
    cols.clamp(0.0, f64::from(u16::MAX)) as u16
}

/// Panel slides in from the right edge; `translate` pushes it back out.
pub fn drawer_areas(area: Rect, panel_cols: u16, translate: f64, nav_count: usize) -> DrawerAreas {
    let width = panel_cols.min(area.width);
    let offset = (translate.clamp(0.0, 1.0) * f64::from(width)).round() as u16;
    let panel = Rect::new(area.right() - width + offset, area.y, width, area.height);

    let inner_x = panel.x.saturating_add(1);
    let inner_y = panel.y.saturating_add(1);
    let inner_w = width.saturating_sub(2);
    let close_button = Rect::new(
        inner_x + inner_w.saturating_sub(TOGGLE_WIDTH),
        inner_y,
        TOGGLE_WIDTH.min(inner_w),
        1,
    );
    let nav_items = (0..nav_count as u16)
        .map(|i| Rect::new(inner_x, inner_y + 2 + i, inner_w, 1))
        .collect();

    DrawerAreas {
        panel,
        close_button,
        nav_items,
    }
}

/// Drawer geometry for the current state.
pub fn drawer_areas_for(state: &AppState, area: Rect) -> DrawerAreas {
    let cols = panel_columns(
        state.drawer.panel_width_px(),
        state.settings.viewport.cell_width_px,
    );
    drawer_areas(
        area,
        cols,
        state.drawer_view.panel_translate,
        state.drawer.markup().nav_items.len(),
    )
}

/// Resolve what a pointer at (`col`, `row`) lands on.
///
/// The drawer is on top when visible. Below desktop width its overlay covers
/// the rest of the screen; on desktop the page stays reachable.
pub fn hit_test(state: &AppState, area: Rect, col: u16, row: u16) -> HitTarget {
    let pos = Position::new(col, row);

    if state.drawer_view.visible {
        let drawer = drawer_areas_for(state, area);
        if drawer.close_button.contains(pos) {
            return HitTarget::CloseButton;
        }
        if let Some(i) = drawer.nav_items.iter().position(|r| r.contains(pos)) {
            return HitTarget::NavItem(i);
        }
        if drawer.panel.intersection(area).contains(pos) {
            return HitTarget::Panel;
        }
        if !state.viewport.current().device_tier.is_desktop() {
            return HitTarget::Overlay;
        }
    }

    let areas = create(area);
    if areas.header.contains(pos) {
        let buttons = header_buttons(areas.header, state.locale.supported().len());
        if buttons.toggle.contains(pos) {
            return HitTarget::Toggle;
        }
        if let Some(i) = buttons.languages.iter().position(|r| r.contains(pos)) {
            return HitTarget::Language(i);
        }
        return HitTarget::Page;
    }

    if areas.content.contains(pos) {
        let page_col = col - areas.content.x;
        let page_row = u32::from(row - areas.content.y) + state.page.scroll_y;

        if page_row == u32::from(TABS_ROW) {
            let tabs = tab_rects(&tab_labels(state));
            let tab_pos = Position::new(page_col, TABS_ROW);
            if let Some(i) = tabs.iter().position(|r| r.contains(tab_pos)) {
                return HitTarget::CategoryTab(i);
            }
        }

        let columns = grid_columns(state.viewport.current().device_tier);
        if let Some(i) = card_at(
            areas.content.width,
            columns,
            state.fleet.vehicles().len(),
            page_col,
            page_row,
        ) {
            return HitTarget::Card(i);
        }
    }

    HitTarget::Page
}
