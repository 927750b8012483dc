//! Authentication module for the portal login.
//!
//! This module provides:
//! - `CredentialTable`: the compiled-in student and teacher logins
//! - `LoginGate`: form state and the submit check for one role tab
//! - `Session`: the current-user record, persisted under `currentUser`
//!
//! There is no hashing or token issuance here. Secrets are compared as
//! plain strings against a static demo table.

pub mod credentials;
pub mod gate;
pub mod role;
pub mod session;

pub use credentials::{CredentialTable, StudentCredential, TeacherCredential};
pub use gate::{validate, GateState, LoginError, LoginGate};
pub use role::Role;
pub use session::{Session, SessionRecord, SESSION_KEY};
