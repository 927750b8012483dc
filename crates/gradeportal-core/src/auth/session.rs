use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::Role;
use crate::storage::{KeyValueStore, StoreError};

/// Storage key the session record is written under.
/// Downstream pages read this key to decide whether someone is logged in.
pub const SESSION_KEY: &str = "currentUser";

/// Minimal post-login state. Serialized as `{"id", "name"?, "role"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct SessionRecord {
    #[serde(rename = "id")]
    pub identity: String,
    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "ts", ts(optional))]
    pub display_name: Option<String>,
    pub role: Role,
}

impl SessionRecord {
    pub fn student(identity: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            display_name: Some(display_name.into()),
            role: Role::Student,
        }
    }

    pub fn teacher(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            display_name: None,
            role: Role::Teacher,
        }
    }

    /// Name to greet the user with: display name when known, identity otherwise.
    pub fn greeting_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.identity)
    }
}

/// The current-user session, backed by a key-value store.
///
/// Passed explicitly to whatever needs it; there is no global current user.
pub struct Session {
    store: Box<dyn KeyValueStore>,
    pub data: Option<SessionRecord>,
}

impl Session {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store, data: None }
    }

    /// Load the stored record. Returns true if a record was found.
    ///
    /// A record that fails to parse is treated as absent.
    pub fn load(&mut self) -> Result<bool, StoreError> {
        let Some(raw) = self.store.get(SESSION_KEY)? else {
            debug!("No stored session");
            return Ok(false);
        };

        match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) => {
                debug!(identity = %record.identity, role = %record.role, "Session loaded");
                self.data = Some(record);
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable session record");
                Ok(false)
            }
        }
    }

    /// Write the current record to the store, replacing any previous one.
    pub fn save(&mut self) -> Result<(), StoreError> {
        if let Some(ref data) = self.data {
            let contents = serde_json::to_string(data)?;
            self.store.set(SESSION_KEY, &contents)?;
        }
        Ok(())
    }

    /// Update session with new data
    pub fn update(&mut self, data: SessionRecord) {
        self.data = Some(data);
    }

    pub fn current(&self) -> Option<&SessionRecord> {
        self.data.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.data.is_some()
    }

    /// Raw value currently held by the store under [`SESSION_KEY`].
    pub fn stored_value(&self) -> Result<Option<String>, StoreError> {
        self.store.get(SESSION_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};

    #[test]
    fn test_student_record_json_shape() {
        let record = SessionRecord::student("E23CSE001", "Anant Mishra");
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"id":"E23CSE001","name":"Anant Mishra","role":"student"}"#
        );
    }

    #[test]
    fn test_teacher_record_omits_name() {
        let record = SessionRecord::teacher("T12345");
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"id":"T12345","role":"teacher"}"#
        );
        let parsed: SessionRecord = serde_json::from_str(r#"{"id":"T12345","role":"teacher"}"#).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_greeting_name() {
        assert_eq!(SessionRecord::student("E23CSE002", "Kushagra").greeting_name(), "Kushagra");
        assert_eq!(SessionRecord::teacher("T12345").greeting_name(), "T12345");
    }

    #[test]
    fn test_session_load_empty_store() {
        let mut session = Session::new(Box::new(MemoryStore::new()));
        assert!(!session.load().unwrap());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_session_save_overwrites() {
        let mut session = Session::new(Box::new(MemoryStore::new()));
        session.update(SessionRecord::student("E23CSE001", "Anant Mishra"));
        session.save().unwrap();
        session.update(SessionRecord::teacher("T12345"));
        session.save().unwrap();

        assert_eq!(
            session.stored_value().unwrap().as_deref(),
            Some(r#"{"id":"T12345","role":"teacher"}"#)
        );
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let mut first = Session::new(Box::new(FileStore::new(dir.path().to_path_buf()).unwrap()));
        first.update(SessionRecord::student("E23CSE004", "Shubhangam Mishra"));
        first.save().unwrap();

        let mut second = Session::new(Box::new(FileStore::new(dir.path().to_path_buf()).unwrap()));
        assert!(second.load().unwrap());
        assert_eq!(second.current().map(|r| r.identity.as_str()), Some("E23CSE004"));
    }

    #[test]
    fn test_session_ignores_garbage_record() {
        let mut store = MemoryStore::new();
        store.set(SESSION_KEY, "{not a record").unwrap();

        let mut session = Session::new(Box::new(store));
        assert!(!session.load().unwrap());
        assert!(session.current().is_none());
    }
}
