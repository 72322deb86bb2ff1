use crate::{PATH_LOGIN, PATH_LOGOUT, PATH_MOVIES, PATH_REGISTER, PATH_USER};
use serde::{Deserialize, Serialize};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes where an API call goes: method plus path relative to the API origin.
pub trait Endpoint {
    const METHOD: HttpMethod;
    fn path(&self) -> String;
}

// =========================================================
// Endpoint Definitions
// =========================================================

/// List all movies
#[derive(Debug, Clone, Copy)]
pub struct ListMovies;

impl Endpoint for ListMovies {
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        PATH_MOVIES.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct GetMovie<'a> {
    pub id: &'a str,
}

impl Endpoint for GetMovie<'_> {
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        movie_path(self.id)
    }
}

/// Create a movie (multipart body)
#[derive(Debug, Clone, Copy)]
pub struct CreateMovie;

impl Endpoint for CreateMovie {
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        PATH_MOVIES.to_string()
    }
}

/// Update a movie (multipart body)
#[derive(Debug, Clone)]
pub struct UpdateMovie<'a> {
    pub id: &'a str,
}

impl Endpoint for UpdateMovie<'_> {
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        movie_path(self.id)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteMovie<'a> {
    pub id: &'a str,
}

impl Endpoint for DeleteMovie<'_> {
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        movie_path(self.id)
    }
}

/// Authenticate with email/password; body is [`crate::LoginRequest`]
#[derive(Debug, Clone, Copy)]
pub struct Login;

impl Endpoint for Login {
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        PATH_LOGIN.to_string()
    }
}

/// End the cookie session
#[derive(Debug, Clone, Copy)]
pub struct Logout;

impl Endpoint for Logout {
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        PATH_LOGOUT.to_string()
    }
}

/// Create an account; body is [`crate::RegisterRequest`]
#[derive(Debug, Clone, Copy)]
pub struct Register;

impl Endpoint for Register {
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        PATH_REGISTER.to_string()
    }
}

/// Ask whether the session cookie still identifies a user
#[derive(Debug, Clone, Copy)]
pub struct ProbeSession;

impl Endpoint for ProbeSession {
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        PATH_USER.to_string()
    }
}

/// id 作为单个路径段，保留字符一律转义
fn movie_path(id: &str) -> String {
    format!("{}/{}", PATH_MOVIES, urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_paths() {
        assert_eq!(GetMovie { id: "42" }.path(), "/api/movies/42");
        assert_eq!(UpdateMovie::METHOD, HttpMethod::Put);
        assert_eq!(DeleteMovie { id: "a" }.path(), "/api/movies/a");
        assert_eq!(Logout::METHOD, HttpMethod::Get);
    }

    #[test]
    fn test_movie_id_is_escaped() {
        assert_eq!(GetMovie { id: "a?b#c" }.path(), "/api/movies/a%3Fb%23c");
        assert_eq!(DeleteMovie { id: "x y/z" }.path(), "/api/movies/x%20y%2Fz");
    }
}
