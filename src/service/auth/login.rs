use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::service::auth::OAuthService;

impl<'a> OAuthService<'a> {
    /// Builds the provider authorization URL for a login flow.
    ///
    /// The caller supplies the state value; it is echoed back by the provider
    /// on the callback and validated there.
    pub fn login_url(&self, state: String) -> Url {
        let mut request = self
            .oauth_client
            .authorize_url(|| CsrfToken::new(state));

        for scope in self.scopes() {
            request = request.add_scope(Scope::new(scope.to_string()));
        }

        let (authorize_url, _csrf_state) = request.url();

        authorize_url
    }
}
