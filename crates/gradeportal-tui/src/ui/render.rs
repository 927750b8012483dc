use gradeportal_core::{Role, Route};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, AppState, LoginFocus};

use super::header::{render_header, HeaderProps};
use super::styles;

/// Width of the login card
const LOGIN_CARD_WIDTH: u16 = 60;

/// Visible width of the identity/secret fields
const FIELD_WIDTH: usize = 20;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let header = HeaderProps::with_title(app.config.portal_title());
    render_header(frame, chunks[0], &header, app.route);
    render_main_content(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.route {
        Route::Home => render_home(frame, app, area),
        Route::Login => render_login(frame, app, area),
        Route::Student => render_landing(frame, app, area, Role::Student),
        Route::Teacher => render_landing(frame, app, area, Role::Teacher),
    }
}

fn render_home(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(app.config.portal_title(), styles::title_style())),
        Line::from(Span::styled("Grading Portal", styles::highlight_style())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", styles::muted_style()),
            Span::styled("Enter", styles::help_key_style()),
            Span::styled(" to log in", styles::muted_style()),
        ]),
    ];

    if let Some(user) = app.current_user() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                format!("Signed in as {} ({}). Press ", user.greeting_name(), user.role),
                styles::muted_style(),
            ),
            Span::styled("c", styles::help_key_style()),
            Span::styled(" to continue", styles::muted_style()),
        ]));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_login(frame: &mut Frame, app: &App, area: Rect) {
    let gate = &app.login;
    let role = gate.role();
    let mut lines = vec![
        Line::from(Span::styled("Welcome Back", styles::title_style())),
        Line::from(Span::styled(
            format!("Login to access your {} grading portal", app.config.portal_title()),
            styles::muted_style(),
        )),
        Line::from(""),
    ];

    // Role tabs
    let mut tabs = Vec::new();
    for (i, tab) in [Role::Student, Role::Teacher].iter().enumerate() {
        if i > 0 {
            tabs.push(Span::styled("  |  ", styles::muted_style()));
        }
        tabs.push(Span::styled(tab.title(), styles::tab_style(*tab == role)));
    }
    lines.push(Line::from(tabs));

    if let Some(error) = gate.error() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("✖ {}", error), styles::error_style()),
            Span::styled("  [Esc]", styles::muted_style()),
        ]));
    }
    lines.push(Line::from(""));

    let identity = field_text(&gate.identity, false);
    lines.push(field_line(
        role.identity_label(),
        identity,
        app.login_focus == LoginFocus::Identity,
    ));

    let secret = field_text(&gate.secret, !app.show_secret);
    lines.push(field_line(
        "Password",
        secret,
        app.login_focus == LoginFocus::Secret,
    ));

    lines.push(Line::from(""));
    let label = role.login_label();
    if app.login_focus == LoginFocus::Button {
        lines.push(Line::from(vec![
            Span::raw("["),
            Span::styled(format!(" ▶ {} ◀ ", label), styles::selected_style()),
            Span::raw("]"),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::raw("["),
            Span::styled(format!("   {}   ", label), styles::field_style()),
            Span::raw("]"),
        ]));
    }

    // Demo credential hints
    let table = gate.table();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Demo Student Credentials:", styles::muted_style())));
    for student in table.students().take(2) {
        lines.push(Line::from(Span::styled(
            format!("Student ID: {}, Password: {}", student.identity, student.secret),
            styles::muted_style(),
        )));
    }
    lines.push(Line::from(Span::styled("Demo Teacher Credentials:", styles::muted_style())));
    lines.push(Line::from(Span::styled(
        format!("Teacher ID: {}, Password: {}", table.teacher().identity, table.teacher().secret),
        styles::muted_style(),
    )));

    let height = lines.len() as u16 + 2;
    let card = centered_rect_fixed(LOGIN_CARD_WIDTH, height, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, card);

    // Support contact under the card
    let below = card.y + card.height + 1;
    if below < area.y + area.height {
        let support_area = Rect::new(area.x, below, area.width, 1);
        let support = Line::from(vec![
            Span::styled("Need help? Contact ", styles::muted_style()),
            Span::styled(app.config.support_contact(), styles::highlight_style()),
        ]);
        frame.render_widget(
            Paragraph::new(support).alignment(Alignment::Center),
            support_area,
        );
    }
}

/// Field content padded to the field width, masked when `mask` is set.
/// Long input shows its tail so the cursor stays visible.
fn field_text(value: &str, mask: bool) -> String {
    let shown: String = if mask {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let len = shown.chars().count();
    let tail: String = shown.chars().skip(len.saturating_sub(FIELD_WIDTH)).collect();
    format!("{:<width$}", tail, width = FIELD_WIDTH)
}

fn field_line(label: &str, text: String, focused: bool) -> Line<'static> {
    let style = if focused {
        styles::selected_style()
    } else {
        styles::field_style()
    };
    let cursor = if focused { "▌" } else { " " };
    Line::from(vec![
        Span::styled(format!("{:>10}: [", label), styles::muted_style()),
        Span::styled(format!("{}{}", text, cursor), style),
        Span::styled("]", styles::muted_style()),
    ])
}

fn render_landing(frame: &mut Frame, app: &App, area: Rect, role: Role) {
    let title = format!(" {} Dashboard ", role.title());

    let lines = match app.current_user().filter(|user| user.role == role) {
        Some(user) => {
            let mut lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("Welcome, {}", user.greeting_name()),
                    styles::title_style(),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled(format!("{}: ", role.identity_label()), styles::muted_style()),
                    Span::styled(user.identity.clone(), styles::field_style()),
                ]),
            ];
            if let Some(ref name) = user.display_name {
                lines.push(Line::from(vec![
                    Span::styled("Name: ", styles::muted_style()),
                    Span::styled(name.clone(), styles::field_style()),
                ]));
            }
            lines.push(Line::from(vec![
                Span::styled("Role: ", styles::muted_style()),
                Span::styled(user.role.to_string(), styles::success_style()),
            ]));
            lines
        }
        None => vec![
            Line::from(""),
            Line::from(Span::styled("No active session.", styles::error_style())),
            Line::from(vec![
                Span::styled("Press ", styles::muted_style()),
                Span::styled("l", styles::help_key_style()),
                Span::styled(" to log in", styles::muted_style()),
            ]),
        ],
    };

    let block = Block::default()
        .title(Span::styled(title, styles::title_style()))
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.route {
        Route::Home => "[Enter] login | [q]uit",
        Route::Login => "[←/→] role | [Tab] next | [Ctrl-R] show password | [Esc] back",
        Route::Student | Route::Teacher => "[h]ome | [q]uit",
    };

    let left_text = if let Some(ref msg) = app.status_message {
        format!(" {} ", msg)
    } else {
        format!(" {} ", app.route.path())
    };
    let right_text = format!(" {} ", shortcuts);

    let width = area.width as usize;
    let padding_len = width
        .saturating_sub(left_text.chars().count())
        .saturating_sub(right_text.chars().count());
    let status_line = Line::from(vec![
        Span::styled(left_text, styles::muted_style()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right_text, styles::muted_style()),
    ]);
    let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(40, 6, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to quit?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
