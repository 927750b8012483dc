use tracing::debug;

/// A student login entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentCredential {
    pub identity: &'static str,
    pub secret: &'static str,
    pub display_name: &'static str,
}

/// The single teacher login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeacherCredential {
    pub identity: &'static str,
    pub secret: &'static str,
}

/// Compiled-in set of valid logins for both roles.
///
/// Lookups are pure: nothing here mutates or touches I/O. Student identities
/// must be unique within `students`.
#[derive(Debug)]
pub struct CredentialTable {
    students: &'static [StudentCredential],
    teacher: TeacherCredential,
}

static DEMO_STUDENTS: [StudentCredential; 4] = [
    StudentCredential {
        identity: "E23CSE001",
        secret: "anant123",
        display_name: "Anant Mishra",
    },
    StudentCredential {
        identity: "E23CSE002",
        secret: "kushagra123",
        display_name: "Kushagra",
    },
    StudentCredential {
        identity: "E23CSE003",
        secret: "divyansh123",
        display_name: "Divyansh Chouhan",
    },
    StudentCredential {
        identity: "E23CSE004",
        secret: "shubhangam123",
        display_name: "Shubhangam Mishra",
    },
];

static DEMO_CREDENTIALS: CredentialTable = CredentialTable::new(
    &DEMO_STUDENTS,
    TeacherCredential {
        identity: "T12345",
        secret: "teacher123",
    },
);

impl CredentialTable {
    pub const fn new(students: &'static [StudentCredential], teacher: TeacherCredential) -> Self {
        Self { students, teacher }
    }

    /// The demo table shipped with the portal.
    pub fn demo() -> &'static CredentialTable {
        &DEMO_CREDENTIALS
    }

    /// Find a student entry by identity. Exact, case-sensitive match.
    pub fn lookup_student(&self, identity: &str) -> Option<&StudentCredential> {
        let found = self.students.iter().find(|s| s.identity == identity);
        debug!(identity, found = found.is_some(), "Student lookup");
        found
    }

    /// Check whether `identity` is the teacher identity.
    pub fn is_teacher(&self, identity: &str) -> bool {
        self.teacher.identity == identity
    }

    pub fn teacher(&self) -> &TeacherCredential {
        &self.teacher
    }

    pub fn students(&self) -> impl Iterator<Item = &StudentCredential> {
        self.students.iter()
    }
}
