//! Application state management for the portal front-end.
//!
//! This module contains the `App` struct: the current route, the login form
//! backed by `LoginGate`, and the session shared with the landing screens.

use std::path::PathBuf;

use gradeportal_core::storage::{FileStore, KeyValueStore, MemoryStore};
use gradeportal_core::{Config, CredentialTable, LoginGate, Role, Route, Session, SessionRecord};
use tracing::{debug, info, warn};

// ============================================================================
// Constants
// ============================================================================

/// Maximum length for identity input.
/// Student and teacher IDs are short codes; 50 leaves plenty of room.
const MAX_IDENTITY_LENGTH: usize = 50;

/// Maximum length for secret input.
/// 128 chars accommodates password managers and passphrases.
const MAX_SECRET_LENGTH: usize = 128;

/// Used when no platform data directory can be found
pub const FALLBACK_STORAGE_DIR: &str = "./data";

/// Shown in the status bar when a login could not be written to storage
pub const SESSION_NOT_SAVED_MESSAGE: &str = "Session not saved; log in again after restart";

/// Shown in the status bar when the stored session could not be read
pub const SESSION_UNREADABLE_MESSAGE: &str = "Stored session unreadable; please log in";

// ============================================================================
// UI State Types
// ============================================================================

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ConfirmingQuit,
    Quitting,
}

/// Login form focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Identity,
    Secret,
    Button,
}

impl LoginFocus {
    pub fn next(&self) -> Self {
        match self {
            LoginFocus::Identity => LoginFocus::Secret,
            LoginFocus::Secret => LoginFocus::Button,
            LoginFocus::Button => LoginFocus::Identity,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            LoginFocus::Identity => LoginFocus::Button,
            LoginFocus::Secret => LoginFocus::Identity,
            LoginFocus::Button => LoginFocus::Secret,
        }
    }
}

// ============================================================================
// Main Application Struct
// ============================================================================

pub struct App {
    pub config: Config,
    pub session: Session,

    pub state: AppState,
    pub route: Route,

    // Login form state
    pub login: LoginGate,
    pub login_focus: LoginFocus,
    pub show_secret: bool,

    /// Transient notice in the status bar, cleared on navigation
    pub status_message: Option<String>,
}

impl App {
    /// Create the app with a file-backed session in `storage_dir`.
    pub fn new(config: Config, storage_dir: PathBuf) -> Self {
        let store: Box<dyn KeyValueStore> = match FileStore::new(storage_dir.clone()) {
            Ok(store) => Box::new(store),
            Err(e) => {
                warn!(error = %e, ?storage_dir, "Storage unavailable, session will not persist");
                Box::new(MemoryStore::new())
            }
        };

        let mut session = Session::new(store);
        let load_error = match session.load() {
            Ok(found) => {
                debug!(found, "Session loaded");
                false
            }
            Err(e) => {
                warn!(error = %e, "Failed to load session");
                true
            }
        };

        let mut app = Self::with_session(config, session);
        if load_error {
            app.status_message = Some(SESSION_UNREADABLE_MESSAGE.to_string());
        }
        app
    }

    pub fn with_session(config: Config, session: Session) -> Self {
        // A stored record means someone is already logged in
        let route = session
            .current()
            .map(|r| r.role.landing_route())
            .unwrap_or(Route::Home);

        Self {
            config,
            session,
            state: AppState::Normal,
            route,
            login: LoginGate::new(CredentialTable::demo()),
            login_focus: LoginFocus::Identity,
            show_secret: false,
            status_message: None,
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn navigate(&mut self, route: Route) {
        info!(from = %self.route, to = %route, "Navigate");
        if route == Route::Login {
            // Entering the login screen always starts from a blank student form
            self.login = LoginGate::new(self.login.table());
            self.login_focus = LoginFocus::Identity;
            self.show_secret = false;
        }
        self.route = route;
        self.status_message = None;
    }

    pub fn start_login(&mut self) {
        self.navigate(Route::Login);
    }

    pub fn go_home(&mut self) {
        self.navigate(Route::Home);
    }

    /// Jump to the landing screen of the stored session, if there is one.
    pub fn continue_session(&mut self) {
        if let Some(route) = self.session.current().map(|r| r.role.landing_route()) {
            self.navigate(route);
        }
    }

    pub fn current_user(&self) -> Option<&SessionRecord> {
        self.session.current()
    }

    // =========================================================================
    // Login
    // =========================================================================

    /// Switch the login tab, clearing the form.
    pub fn select_role(&mut self, role: Role) {
        self.login.select_role(role);
        self.login_focus = LoginFocus::Identity;
    }

    /// Submit the login form. On success, navigates to the role's landing route.
    pub fn attempt_login(&mut self) {
        match self.login.submit(&mut self.session) {
            Ok(route) => {
                self.navigate(route);
                if !self.login.session_persisted() {
                    self.status_message = Some(SESSION_NOT_SAVED_MESSAGE.to_string());
                }
            }
            Err(e) => {
                debug!(error = %e, "Login rejected");
            }
        }
    }

    pub fn toggle_show_secret(&mut self) {
        self.show_secret = !self.show_secret;
    }

    pub fn request_quit(&mut self) {
        self.state = AppState::ConfirmingQuit;
    }
}

// ============================================================================
// Input validation helpers (exported for use in input.rs)
// ============================================================================

/// Check if a character is valid for input (no control characters)
fn is_valid_input_char(c: char) -> bool {
    !c.is_control()
}

/// Check if an identity character should be accepted
pub fn can_add_identity_char(current_len: usize, c: char) -> bool {
    current_len < MAX_IDENTITY_LENGTH && is_valid_input_char(c)
}

/// Check if a secret character should be accepted
pub fn can_add_secret_char(current_len: usize, c: char) -> bool {
    current_len < MAX_SECRET_LENGTH && is_valid_input_char(c)
}

// ============================================================================
// Tests
// ============================================================================
