mod button;
mod greeting;
mod link;

pub use button::{Button, BUTTON_LABEL};
pub use greeting::{Greeting, GREETING_TEXT};
pub use link::LinkElement;

use ratatui::layout::Rect;

/// Page layout: the three widget rectangles computed from the terminal area.
/// Pure function of the area; degrades to clipped/empty rectangles on tiny
/// terminals instead of panicking.
pub struct UiLayout {
    pub heading_area: Rect,
    pub button_area: Rect,
    pub link_area: Rect,
}

impl UiLayout {
    pub fn calculate(area: Rect, button_width: u16, button_height: u16) -> Self {
        let button_w = button_width.min(area.width);
        let button_h = button_height.min(area.height);

        // Button sits at the vertical and horizontal center
        let button_x = area.x + area.width.saturating_sub(button_w) / 2;
        let button_y = area.y + area.height.saturating_sub(button_h) / 2;
        let button_area = Rect {
            x: button_x,
            y: button_y,
            width: button_w,
            height: button_h,
        }
        .intersection(area);

        // Heading row two rows above the button, full width
        let heading_y = button_y.saturating_sub(2).max(area.y);
        let heading_area = Rect {
            x: area.x,
            y: heading_y,
            width: area.width,
            height: 1,
        }
        .intersection(area);

        // Link row one row below the button, full width
        let link_y = button_y.saturating_add(button_h).saturating_add(1);
        let link_area = Rect {
            x: area.x,
            y: link_y,
            width: area.width,
            height: 1,
        }
        .intersection(area);

        Self {
            heading_area,
            button_area,
            link_area,
        }
    }
}
