//! The greeting heading, shown once the button has been pressed

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

/// Literal heading text
pub const GREETING_TEXT: &str = "HELLO";

/// Bold centered heading. Only constructed when the view state is revealed,
/// so the hidden state structurally contains no heading.
pub struct Greeting {
    color: Color,
}

impl Greeting {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width < 1 || area.height < 1 {
            return;
        }

        let text_width = GREETING_TEXT.chars().count() as u16;
        let start_col = if text_width <= area.width {
            area.x + (area.width - text_width) / 2
        } else {
            area.x
        };
        buf.set_stringn(
            start_col,
            area.y,
            GREETING_TEXT,
            area.width as usize,
            Style::default().fg(self.color).add_modifier(Modifier::BOLD),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area().width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_hello() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        Greeting::new(Color::Green).render(area, &mut buf);
        assert!(row_text(&buf, 0).contains("HELLO"));
    }

    #[test]
    fn test_heading_is_bold() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        Greeting::new(Color::Green).render(area, &mut buf);

        // Find the first cell of the heading and check its modifier
        let x = (0..20)
            .find(|&x| buf[(x, 0)].symbol() == "H")
            .expect("heading not rendered");
        assert!(buf[(x, 0)]
            .style()
            .add_modifier
            .contains(Modifier::BOLD));
    }

    #[test]
    fn test_degrades_on_zero_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        Greeting::new(Color::Green).render(Rect::new(0, 0, 0, 0), &mut buf);
        assert_eq!(row_text(&buf, 0).trim(), "");
    }
}
