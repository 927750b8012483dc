//! Portal routes.
//!
//! The login screen hands one of these back to its caller after a
//! successful check; the front-end owns the actual navigation.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Student,
    Teacher,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Student => "/student",
            Route::Teacher => "/teacher",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/student" => Some(Route::Student),
            "/teacher" => Some(Route::Teacher),
            _ => None,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Student.path(), "/student");
        assert_eq!(Route::Teacher.path(), "/teacher");
    }

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/student"), Some(Route::Student));
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/admin"), None);
        assert_eq!(Route::from_path(""), None);
    }
}
