use ratatui::style::{Color, Modifier, Style};

// Portal palette
pub const BRAND: Color = Color::Rgb(25, 118, 210);
pub const OK: Color = Color::Rgb(56, 142, 60);
pub const KEY: Color = Color::Rgb(237, 167, 47);
pub const DANGER: Color = Color::Rgb(211, 47, 47);
pub const DIM: Color = Color::Rgb(120, 120, 130);
pub const FOCUS_BG: Color = Color::Rgb(30, 44, 70);
pub const BAR_BG: Color = Color::Rgb(24, 26, 34);

pub fn title_style() -> Style {
    Style::default().fg(BRAND).add_modifier(Modifier::BOLD)
}

/// Focused form field or button.
pub fn selected_style() -> Style {
    Style::default().bg(FOCUS_BG).fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn field_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn muted_style() -> Style {
    Style::default().fg(DIM)
}

pub fn highlight_style() -> Style {
    Style::default().fg(KEY)
}

pub fn success_style() -> Style {
    Style::default().fg(OK).add_modifier(Modifier::BOLD)
}

pub fn error_style() -> Style {
    Style::default().fg(DANGER).add_modifier(Modifier::BOLD)
}

/// Role tab label; the active tab is underlined.
pub fn tab_style(active: bool) -> Style {
    if active {
        title_style().add_modifier(Modifier::UNDERLINED)
    } else {
        muted_style()
    }
}

pub fn border_style(focused: bool) -> Style {
    Style::default().fg(if focused { BRAND } else { DIM })
}

pub fn status_bar_style() -> Style {
    Style::default().bg(BAR_BG).fg(Color::White)
}

pub fn help_key_style() -> Style {
    highlight_style().add_modifier(Modifier::BOLD)
}
