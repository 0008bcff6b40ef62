//! Application core - state, event routing, and page rendering
//!
//! Owns the view state and the two leaf widgets, routes frontend events
//! (click hit-testing, keyboard activation, quit keys), and renders the
//! page as a pure function of state into a ratatui buffer.

use crate::config::Config;
use crate::data::ViewState;
use crate::frontend::FrontendEvent;
use crate::theme::Theme;
use crate::ui::{Button, Greeting, LinkElement, UiLayout, BUTTON_LABEL};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

pub struct App {
    theme: Theme,
    pub view: ViewState,
    button: Button,
    link: LinkElement,
    /// Widget rectangles from the last render, used for click hit-testing.
    /// None until the first frame has been drawn.
    layout: Option<UiLayout>,
    pub running: bool,
    pub needs_render: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let theme = Theme::from_config(&config.colors);
        let mut button = Button::new(BUTTON_LABEL);
        button.set_colors(theme.button, theme.button_border);
        let link = LinkElement::new(theme.link);

        Self {
            theme,
            view: ViewState::new(),
            button,
            link,
            layout: None,
            running: true,
            needs_render: true,
        }
    }

    pub fn handle_event(&mut self, event: &FrontendEvent) {
        match event {
            FrontendEvent::Key { code, modifiers } => self.handle_key(*code, *modifiers),
            FrontendEvent::Mouse { kind, x, y } => {
                if let MouseEventKind::Down(MouseButton::Left) = kind {
                    self.handle_click(*x, *y);
                }
            }
            FrontendEvent::Resize { .. } => {
                self.layout = None;
                self.needs_render = true;
            }
            FrontendEvent::Quit => {
                self.running = false;
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.running = false;
            return;
        }
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
            }
            // Keyboard activation of the button
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.press_button();
            }
            _ => {}
        }
    }

    /// Left-click routing: reveal if the click lands on the button.
    /// Clicks before the first render have nothing to hit.
    fn handle_click(&mut self, x: u16, y: u16) {
        let Some(layout) = &self.layout else {
            return;
        };
        if self.button.check_click(x, y, layout.button_area) {
            self.press_button();
        }
    }

    /// The single state transition: Hidden -> Revealed. Repeat presses are
    /// no-ops with respect to state.
    fn press_button(&mut self) {
        if !self.view.is_revealed() {
            tracing::info!("button pressed, revealing greeting");
        }
        self.view.reveal();
        self.needs_render = true;
    }

    /// Render the page as a pure function of the view state
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        if let Some(bg) = self.theme.background {
            buf.set_style(area, Style::default().bg(bg));
        }

        let layout = UiLayout::calculate(area, self.button.width(), self.button.height());

        if self.view.is_revealed() {
            Greeting::new(self.theme.heading).render(layout.heading_area, buf);
        }
        self.button.render(layout.button_area, buf);
        self.link.render(layout.link_area, buf);

        self.layout = Some(layout);
    }
}
