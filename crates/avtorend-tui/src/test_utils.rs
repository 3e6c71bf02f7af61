//! Test helpers for widget and view rendering

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Terminal;

use avtorend_api::test_utils::vehicle_json;
use avtorend_app::config::Settings;
use avtorend_app::state::AppState;
use avtorend_core::{CapabilityHints, VehicleRecord};

/// Terminal over ratatui's in-memory backend
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.backend().buffer().area;
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|f| f.render_widget(widget, area))
            .expect("draw");
    }

    /// Full view of `state`
    pub fn draw_view(&mut self, state: &AppState) {
        self.terminal
            .draw(|f| crate::render::view(f, state))
            .expect("draw");
    }

    /// Buffer contents, one line per row
    pub fn content(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width.max(1))
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Text of a single row
    pub fn row(&self, y: u16) -> String {
        self.content()
            .lines()
            .nth(usize::from(y))
            .unwrap_or_default()
            .to_string()
    }
}

/// State for a `cols` x `rows` terminal with default settings
pub fn test_state(cols: u16, rows: u16) -> AppState {
    AppState::new(
        Settings::default(),
        std::env::temp_dir().join("avtorend-tui-tests"),
        "ru".to_string(),
        CapabilityHints::default(),
        cols,
        rows,
    )
}

pub fn test_vehicles(count: u64) -> Vec<VehicleRecord> {
    (1..=count)
        .map(|id| serde_json::from_value(vehicle_json(id, 1)).expect("vehicle fixture"))
        .collect()
}
