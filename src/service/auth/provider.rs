//! Typed OAuth provider payloads.
//!
//! Each supported provider gets its own deserialization struct matching that
//! provider's user-info response, converted to the single `ExternalIdentity`
//! shape before reaching user registration.

use serde::Deserialize;

use crate::model::{auth::ExternalIdentity, user::Provider};

/// GitHub `/user` response payload.
#[derive(Debug, Deserialize)]
pub struct GithubUser {
    pub id: i64,
    pub login: String,
    /// GitHub omits the email unless the user has a public one.
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<GithubUser> for ExternalIdentity {
    fn from(user: GithubUser) -> Self {
        Self {
            provider: Provider::Github,
            id: user.id.to_string(),
            login: user.login,
            email: user.email.unwrap_or_default(),
            avatar_url: user.avatar_url.unwrap_or_default(),
        }
    }
}

/// Google `oauth2/v2/userinfo` response payload.
#[derive(Debug, Deserialize)]
pub struct GoogleUser {
    pub id: String,
    pub email: String,
    pub picture: Option<String>,
}

impl From<GoogleUser> for ExternalIdentity {
    fn from(user: GoogleUser) -> Self {
        Self {
            provider: Provider::Google,
            id: user.id,
            // Google does not reliably return a username, use the email
            login: user.email.clone(),
            email: user.email,
            avatar_url: user.picture.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_payload_normalizes() {
        let payload = r#"{
            "id": 583231,
            "login": "octocat",
            "email": "octocat@github.com",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231"
        }"#;

        let user: GithubUser = serde_json::from_str(payload).unwrap();
        let identity = ExternalIdentity::from(user);

        assert_eq!(identity.provider, Provider::Github);
        assert_eq!(identity.id, "583231");
        assert_eq!(identity.login, "octocat");
        assert_eq!(identity.email, "octocat@github.com");
    }

    #[test]
    fn github_payload_without_email_normalizes_to_empty() {
        let payload = r#"{"id": 1, "login": "ghost", "email": null, "avatar_url": null}"#;

        let user: GithubUser = serde_json::from_str(payload).unwrap();
        let identity = ExternalIdentity::from(user);

        assert!(identity.email.is_empty());
        assert!(identity.avatar_url.is_empty());
    }

    #[test]
    fn google_payload_uses_email_as_login() {
        let payload = r#"{
            "id": "1234567890",
            "email": "testuser@gmail.com",
            "verified_email": true,
            "name": "Test User",
            "picture": "https://example.com/avatar.jpg"
        }"#;

        let user: GoogleUser = serde_json::from_str(payload).unwrap();
        let identity = ExternalIdentity::from(user);

        assert_eq!(identity.provider, Provider::Google);
        assert_eq!(identity.login, "testuser@gmail.com");
        assert_eq!(identity.avatar_url, "https://example.com/avatar.jpg");
    }
}
