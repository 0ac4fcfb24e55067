//! OAuth login flow orchestration.
//!
//! One `OAuthService` instance handles a single provider's flow: building the
//! authorization redirect and, on callback, exchanging the code and fetching
//! the provider's user payload normalized to an `ExternalIdentity`.

mod callback;
mod login;
pub mod provider;

use crate::{model::user::Provider, state::OAuth2Client};

pub struct OAuthService<'a> {
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    provider: Provider,
}

impl<'a> OAuthService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        provider: Provider,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            provider,
        }
    }

    /// Scopes requested from the provider during authorization.
    fn scopes(&self) -> &'static [&'static str] {
        match self.provider {
            Provider::Github => &["read:user", "user:email"],
            Provider::Google => &["openid", "email", "profile"],
        }
    }
}
