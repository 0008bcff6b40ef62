//! Static anchor-style element

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

const LINK_TEXT: &str = "Learn more";
const LINK_HREF: &str = "https://example.com";

/// Stateless link widget: fixed underlined display text plus a target URL.
/// Deterministic output, no inputs, no side effects.
pub struct LinkElement {
    color: Color,
}

impl LinkElement {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Displayed text (always non-empty)
    pub fn text(&self) -> &'static str {
        LINK_TEXT
    }

    /// Target URL
    pub fn href(&self) -> &'static str {
        LINK_HREF
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width < 1 || area.height < 1 {
            return;
        }

        let text_width = LINK_TEXT.chars().count() as u16;
        let start_col = if text_width <= area.width {
            area.x + (area.width - text_width) / 2
        } else {
            area.x
        };
        buf.set_stringn(
            start_col,
            area.y,
            LINK_TEXT,
            area.width as usize,
            Style::default()
                .fg(self.color)
                .add_modifier(Modifier::UNDERLINED),
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
    fn test_text_is_non_empty() {
        let link = LinkElement::new(Color::Blue);
        assert!(!link.text().is_empty());
        assert!(!link.href().is_empty());
    }

    #[test]
    fn test_renders_text() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        LinkElement::new(Color::Blue).render(area, &mut buf);
        assert!(row_text(&buf, 0).contains("Learn more"));
    }

    #[test]
    fn test_text_is_underlined() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        LinkElement::new(Color::Blue).render(area, &mut buf);

        let x = (0..20)
            .find(|&x| buf[(x, 0)].symbol() == "L")
            .expect("link not rendered");
        assert!(buf[(x, 0)]
            .style()
            .add_modifier
            .contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_output_is_deterministic() {
        let area = Rect::new(0, 0, 20, 1);
        let mut first = Buffer::empty(area);
        let mut second = Buffer::empty(area);
        LinkElement::new(Color::Blue).render(area, &mut first);
        LinkElement::new(Color::Blue).render(area, &mut second);
        assert_eq!(first, second);
    }
}
