//! Page header shown at the top of every screen.

use gradeportal_core::config::DEFAULT_PORTAL_TITLE;
use gradeportal_core::Route;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::styles;

#[derive(Debug, Clone, Copy)]
pub struct HeaderProps<'a> {
    pub title: &'a str,
    pub show_back_button: bool,
}

impl Default for HeaderProps<'_> {
    fn default() -> Self {
        Self {
            title: DEFAULT_PORTAL_TITLE,
            show_back_button: true,
        }
    }
}

impl<'a> HeaderProps<'a> {
    pub fn with_title(title: &'a str) -> Self {
        Self {
            title,
            ..Default::default()
        }
    }

    /// The home link is hidden on the home screen itself.
    pub fn shows_back_button(&self, route: Route) -> bool {
        self.show_back_button && !route.is_home()
    }
}

pub fn render_header(frame: &mut Frame, area: Rect, props: &HeaderProps, route: Route) {
    let mut spans = vec![Span::raw("  ")];

    if props.shows_back_button(route) {
        spans.push(Span::styled("⌂ Back to Home", styles::muted_style()));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled(props.title, styles::title_style()));

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(props: &HeaderProps, route: Route) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 2)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_header(f, area, props, route);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_default_props() {
        let props = HeaderProps::default();
        assert_eq!(props.title, "Bennett University");
        assert!(props.show_back_button);
    }

    #[test]
    fn test_back_button_hidden_on_home() {
        let props = HeaderProps::default();
        assert!(!props.shows_back_button(Route::Home));
        assert!(props.shows_back_button(Route::Login));
        assert!(props.shows_back_button(Route::Student));
        assert!(props.shows_back_button(Route::Teacher));
    }

    #[test]
    fn test_back_button_disabled() {
        let props = HeaderProps {
            show_back_button: false,
            ..Default::default()
        };
        assert!(!props.shows_back_button(Route::Login));
    }

    #[test]
    fn test_render_header() {
        let props = HeaderProps::with_title("Test Portal");

        let home = rendered(&props, Route::Home);
        assert!(home.contains("Test Portal"));
        assert!(!home.contains("Back to Home"));

        let login = rendered(&props, Route::Login);
        assert!(login.contains("Test Portal"));
        assert!(login.contains("Back to Home"));
    }
}
