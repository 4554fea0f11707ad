//! `auth.*` methods (desktop/web authentication handshake)
//!
//! 1. [`Auth::get_token`] fetches a request token.
//! 2. The user approves it in a browser at [`Auth::auth_url`].
//! 3. [`Auth::get_session`] exchanges the token for a session key, which the
//!    host stores with [`LastfmClient::set_session_key`].

use tracing::{debug, instrument};
use url::Url;

use crate::client::LastfmClient;
use crate::error::{LastfmError, LastfmResult};
use crate::models::{SessionInfo, SessionResponse, Token};
use crate::params::ParameterSet;
use crate::validate;

/// Page where users grant a token access to their account
const AUTH_PAGE_URL: &str = "https://www.last.fm/api/auth/";

pub mod methods {
    use crate::call::CallSpec;

    pub const GET_TOKEN: CallSpec = CallSpec::signed("auth", "getToken");
    pub const GET_SESSION: CallSpec = CallSpec::signed("auth", "getSession");
}

/// Handle for the `auth` section
pub struct Auth<'a> {
    client: &'a LastfmClient,
}

impl<'a> Auth<'a> {
    pub(crate) fn new(client: &'a LastfmClient) -> Self {
        Self { client }
    }

    /// Fetch an unauthorized request token
    #[instrument(skip(self))]
    pub async fn get_token(&self) -> LastfmResult<Token> {
        self.client
            .call_as(&methods::GET_TOKEN, ParameterSet::new())
            .await
    }

    /// Browser URL where the user authorizes `token`
    pub fn auth_url(&self, token: &str) -> LastfmResult<String> {
        let token = validate::require("token", token)?;
        let mut url = Url::parse(AUTH_PAGE_URL)
            .map_err(|e| LastfmError::InvalidInput(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("api_key", self.client.api_key())
            .append_pair("token", token);
        Ok(url.into())
    }

    /// Exchange an authorized token for a session
    #[instrument(skip(self, token))]
    pub async fn get_session(&self, token: &str) -> LastfmResult<SessionInfo> {
        let params = ParameterSet::new().with("token", validate::require("token", token)?);
        let response: SessionResponse = self.client.call_as(&methods::GET_SESSION, params).await?;
        let session = SessionInfo::from(response.session);
        debug!(user = %session.name, subscriber = session.subscriber, "Obtained Last.fm session");
        Ok(session)
    }
}
