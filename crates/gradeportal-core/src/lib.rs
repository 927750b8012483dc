//! Core library for the grading portal login.
//!
//! Holds everything the front-end needs that isn't presentation: the
//! credential table and login gate, the session record and its key-value
//! storage, the portal routes and the application configuration.

pub mod auth;
pub mod config;
pub mod routes;
pub mod storage;

pub use auth::{CredentialTable, LoginError, LoginGate, Role, Session, SessionRecord};
pub use config::Config;
pub use routes::Route;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StoreError};
