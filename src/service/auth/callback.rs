use oauth2::{AuthorizationCode, TokenResponse};

use crate::{
    error::{auth::AuthError, AppError},
    model::{auth::ExternalIdentity, user::Provider},
    service::auth::provider::{GithubUser, GoogleUser},
    service::auth::OAuthService,
};

impl<'a> OAuthService<'a> {
    /// Completes the OAuth flow for an authorization code.
    ///
    /// Exchanges the code for an access token, then fetches the provider's
    /// user payload and normalizes it.
    pub async fn callback(&self, authorization_code: String) -> Result<ExternalIdentity, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|err| AuthError::TokenExchange(err.to_string()))?;

        self.fetch_identity(token.access_token().secret()).await
    }

    /// Retrieves the provider's user info using the access token.
    async fn fetch_identity(&self, access_token: &str) -> Result<ExternalIdentity, AppError> {
        match self.provider {
            Provider::Github => {
                let user = self
                    .http_client
                    .get("https://api.github.com/user")
                    .header("Authorization", format!("Bearer {}", access_token))
                    // GitHub rejects requests without a user agent
                    .header("User-Agent", "quill")
                    .send()
                    .await?
                    .json::<GithubUser>()
                    .await?;

                Ok(user.into())
            }
            Provider::Google => {
                let user = self
                    .http_client
                    .get("https://www.googleapis.com/oauth2/v2/userinfo")
                    .header("Authorization", format!("Bearer {}", access_token))
                    .send()
                    .await?
                    .json::<GoogleUser>()
                    .await?;

                Ok(user.into())
            }
        }
    }
}
