//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! application state changes.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gradeportal_core::Route;

use crate::app::{can_add_identity_char, can_add_secret_char, App, AppState, LoginFocus};

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return Ok(true);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    match app.route {
        Route::Login => handle_login_input(app, key),
        Route::Home => handle_home_input(app, key),
        Route::Student | Route::Teacher => handle_landing_input(app, key),
    }
    Ok(false)
}

fn handle_home_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('l') => app.start_login(),
        KeyCode::Char('c') => app.continue_session(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_landing_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Esc => app.go_home(),
        KeyCode::Char('l') if app.current_user().is_none() => app.start_login(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_login_input(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('r') {
            app.toggle_show_secret();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            // First Esc closes the error, the next one leaves the screen
            if app.login.error().is_some() {
                app.login.dismiss_error();
            } else {
                app.go_home();
            }
        }
        KeyCode::Left | KeyCode::Right => {
            let role = app.login.role().toggle();
            app.select_role(role);
        }
        KeyCode::Down | KeyCode::Tab => {
            app.login_focus = app.login_focus.next();
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.login_focus = app.login_focus.prev();
        }
        KeyCode::Enter => match app.login_focus {
            LoginFocus::Identity => app.login_focus = LoginFocus::Secret,
            LoginFocus::Secret => app.login_focus = LoginFocus::Button,
            LoginFocus::Button => app.attempt_login(),
        },
        KeyCode::Backspace => match app.login_focus {
            LoginFocus::Identity => {
                app.login.identity.pop();
            }
            LoginFocus::Secret => {
                app.login.secret.pop();
            }
            LoginFocus::Button => {}
        },
        KeyCode::Char(c) => match app.login_focus {
            LoginFocus::Identity => {
                if can_add_identity_char(app.login.identity.chars().count(), c) {
                    app.login.identity.push(c);
                }
            }
            LoginFocus::Secret => {
                if can_add_secret_char(app.login.secret.chars().count(), c) {
                    app.login.secret.push(c);
                }
            }
            // Ignore character input on button
            LoginFocus::Button => {}
        },
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradeportal_core::{Config, LoginError, MemoryStore, Role, Session};

    fn test_app() -> App {
        App::with_session(Config::default(), Session::new(Box::new(MemoryStore::new())))
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_input(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Type both fields and press the login button.
    fn submit(app: &mut App, identity: &str, secret: &str) {
        type_str(app, identity);
        press(app, KeyCode::Tab);
        type_str(app, secret);
        press(app, KeyCode::Enter);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_home_enter_opens_login() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::Login);
    }

    #[test]
    fn test_student_login_by_keyboard() {
        let mut app = test_app();
        app.start_login();
        submit(&mut app, "E23CSE001", "anant123");

        assert_eq!(app.route, Route::Student);
        assert_eq!(
            app.session.stored_value().unwrap().as_deref(),
            Some(r#"{"id":"E23CSE001","name":"Anant Mishra","role":"student"}"#)
        );
    }

    #[test]
    fn test_teacher_login_by_keyboard() {
        let mut app = test_app();
        app.start_login();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.login.role(), Role::Teacher);
        submit(&mut app, "T12345", "teacher123");

        assert_eq!(app.route, Route::Teacher);
    }

    #[test]
    fn test_empty_submit_shows_missing_fields() {
        let mut app = test_app();
        app.start_login();
        app.login_focus = LoginFocus::Button;
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.route, Route::Login);
        assert_eq!(app.login.error(), Some(LoginError::MissingFields));
        assert_eq!(app.session.stored_value().unwrap(), None);
    }

    #[test]
    fn test_role_switch_clears_form() {
        let mut app = test_app();
        app.start_login();
        submit(&mut app, "E23CSE001", "wrong");
        assert_eq!(app.login.error(), Some(LoginError::InvalidCredentials));

        press(&mut app, KeyCode::Left);
        assert_eq!(app.login.role(), Role::Teacher);
        assert!(app.login.identity.is_empty());
        assert!(app.login.secret.is_empty());
        assert_eq!(app.login.error(), None);
        assert_eq!(app.login_focus, LoginFocus::Identity);
    }

    #[test]
    fn test_esc_dismisses_error_then_goes_home() {
        let mut app = test_app();
        app.start_login();
        submit(&mut app, "UNKNOWN999", "anything");
        assert!(app.login.error().is_some());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.route, Route::Login);
        assert_eq!(app.login.error(), None);
        assert_eq!(app.login.identity, "UNKNOWN999");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut app = test_app();
        app.start_login();
        type_str(&mut app, "E23X");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.login.identity, "E23");

        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "pw");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.login.secret, "p");
        assert_eq!(app.login.identity, "E23");
    }

    #[test]
    fn test_ctrl_r_toggles_secret_visibility() {
        let mut app = test_app();
        app.start_login();
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);

        handle_input(&mut app, ctrl_r).unwrap();
        assert!(app.show_secret);
        assert!(app.login.identity.is_empty()); // Not typed into the field
        handle_input(&mut app, ctrl_r).unwrap();
        assert!(!app.show_secret);
    }

    #[test]
    fn test_landing_back_home() {
        let mut app = test_app();
        app.start_login();
        submit(&mut app, "E23CSE002", "kushagra123");
        assert_eq!(app.route, Route::Student);

        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.route, Route::Home);
        // The session is still there
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.route, Route::Student);
    }

    #[test]
    fn test_quit_confirmation() {
        let mut app = test_app();
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.state, AppState::ConfirmingQuit);

        assert!(!press(&mut app, KeyCode::Char('n')));
        assert_eq!(app.state, AppState::Normal);

        press(&mut app, KeyCode::Char('q'));
        assert!(press(&mut app, KeyCode::Char('y')));
        assert_eq!(app.state, AppState::Quitting);
    }

    #[test]
    fn test_q_is_typed_on_login_screen() {
        let mut app = test_app();
        app.start_login();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.state, AppState::Normal);
        assert_eq!(app.login.identity, "q");
    }
}
