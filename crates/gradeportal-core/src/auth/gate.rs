//! The login gate: checks a submitted identity/secret pair for a role.
//!
//! A submission moves the gate `Idle -> Validating -> Success | Failure`
//! synchronously. Success writes the session record and hands back the
//! role's landing route; failure leaves storage alone.

use thiserror::Error;
use tracing::{debug, info, warn};

use super::{CredentialTable, Role, Session, SessionRecord};
use crate::routes::Route;

/// Why a submission was rejected. `Display` is the user-facing message.
///
/// Unknown identities and wrong secrets both map to `InvalidCredentials`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,
}

/// Where the gate is in a submission.
///
/// `Validating` only holds for the duration of `submit`, which is synchronous;
/// callers see `Idle`, `Success` or `Failure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Idle,
    Validating,
    Success(SessionRecord),
    Failure(LoginError),
}

/// Check a submission against the table without touching any state.
pub fn validate(
    table: &CredentialTable,
    role: Role,
    identity: &str,
    secret: &str,
) -> Result<SessionRecord, LoginError> {
    if identity.is_empty() || secret.is_empty() {
        return Err(LoginError::MissingFields);
    }

    match role {
        Role::Student => {
            let entry = table
                .lookup_student(identity)
                .ok_or(LoginError::InvalidCredentials)?;
            if entry.secret != secret {
                return Err(LoginError::InvalidCredentials);
            }
            Ok(SessionRecord::student(identity, entry.display_name))
        }
        Role::Teacher => {
            let teacher = table.teacher();
            if table.is_teacher(identity) && teacher.secret == secret {
                Ok(SessionRecord::teacher(identity))
            } else {
                Err(LoginError::InvalidCredentials)
            }
        }
    }
}

/// Login form state for one role tab.
pub struct LoginGate {
    table: &'static CredentialTable,
    role: Role,
    state: GateState,
    persisted: bool,
    pub identity: String,
    pub secret: String,
}

impl LoginGate {
    pub fn new(table: &'static CredentialTable) -> Self {
        Self {
            table,
            role: Role::Student,
            state: GateState::Idle,
            persisted: false,
            identity: String::new(),
            secret: String::new(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn table(&self) -> &'static CredentialTable {
        self.table
    }

    /// The pending error, if the last submission failed and it wasn't dismissed.
    pub fn error(&self) -> Option<LoginError> {
        match self.state {
            GateState::Failure(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the last successful submission was written to storage.
    pub fn session_persisted(&self) -> bool {
        self.persisted
    }

    /// Switch role tab. Always clears the form, even when the role is unchanged.
    pub fn select_role(&mut self, role: Role) {
        debug!(from = %self.role, to = %role, "Role selected, resetting form");
        self.role = role;
        self.identity.clear();
        self.secret.clear();
        self.state = GateState::Idle;
        self.persisted = false;
    }

    /// Close the error message without touching the fields.
    pub fn dismiss_error(&mut self) {
        if matches!(self.state, GateState::Failure(_)) {
            self.state = GateState::Idle;
        }
    }

    /// Validate the current fields. On success the record is written to
    /// `session` and the landing route for the role is returned.
    pub fn submit(&mut self, session: &mut Session) -> Result<Route, LoginError> {
        self.state = GateState::Validating;
        self.persisted = false;
        debug!(role = %self.role, identity = %self.identity, "Validating login");

        match validate(self.table, self.role, &self.identity, &self.secret) {
            Ok(record) => {
                session.update(record.clone());
                match session.save() {
                    Ok(()) => self.persisted = true,
                    Err(e) => warn!(error = %e, "Failed to save session"),
                }

                let route = self.role.landing_route();
                info!(identity = %record.identity, role = %record.role, %route, "Login successful");
                self.state = GateState::Success(record);
                Ok(route)
            }
            Err(e) => {
                warn!(role = %self.role, identity = %self.identity, error = %e, "Login failed");
                self.state = GateState::Failure(e);
                Err(e)
            }
        }
    }
}
