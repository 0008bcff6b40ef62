//! The page's single clickable control

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

/// Visible label of the button (compared trimmed in tests and docs)
pub const BUTTON_LABEL: &str = "Press Me";

pub struct Button {
    label: String,
    fg: Color,
    border_color: Color,
}

impl Button {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            fg: Color::Gray,
            border_color: Color::Cyan,
        }
    }

    pub fn set_colors(&mut self, fg: Color, border_color: Color) {
        self.fg = fg;
        self.border_color = border_color;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Rendered width: label plus one border and one padding cell per side
    pub fn width(&self) -> u16 {
        self.label.chars().count() as u16 + 4
    }

    /// Rendered height: one content row plus borders
    pub fn height(&self) -> u16 {
        3
    }

    /// Check if a mouse click at (x, y) hits the button's rendered area
    pub fn check_click(&self, x: u16, y: u16, area: Rect) -> bool {
        x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Center the label on the single content row
        let text_width = self.label.chars().count() as u16;
        let start_col = if text_width <= inner.width {
            inner.x + (inner.width - text_width) / 2
        } else {
            inner.x
        };
        let y = inner.y + inner.height / 2;
        buf.set_stringn(
            start_col,
            y,
            &self.label,
            inner.width as usize,
            Style::default().fg(self.fg),
        );
    }
}
