//! Routes
//!
//! The two views of the app and their URL paths.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Todo,
    Followers,
}

impl Route {
    /// Map a `location.pathname` to a view. Unknown paths show the to-do view.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/followers" => Route::Followers,
            _ => Route::Todo,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Todo => "/",
            Route::Followers => "/followers",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Todo);
        assert_eq!(Route::from_path(""), Route::Todo);
        assert_eq!(Route::from_path("/followers"), Route::Followers);
        assert_eq!(Route::from_path("/followers/"), Route::Followers);
        assert_eq!(Route::from_path("/nope"), Route::Todo);
    }

    #[test]
    fn test_path_round_trips() {
        for route in [Route::Todo, Route::Followers] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
