//! `library.*` methods

use serde_json::Value;

use crate::api::Paging;
use crate::client::LastfmClient;
use crate::error::LastfmResult;
use crate::params::ParameterSet;
use crate::validate;

pub mod methods {
    use crate::call::CallSpec;

    pub const GET_ARTISTS: CallSpec = CallSpec::public("library", "getArtists");
}

/// Handle for the `library` section
pub struct Library<'a> {
    client: &'a LastfmClient,
}

impl<'a> Library<'a> {
    pub(crate) fn new(client: &'a LastfmClient) -> Self {
        Self { client }
    }

    /// Artists in a user's library, with play and tag counts
    pub async fn get_artists(&self, user: &str, paging: Paging) -> LastfmResult<Value> {
        let params = ParameterSet::new().with("user", validate::require("user", user)?);
        self.client
            .call(&methods::GET_ARTISTS, paging.apply(params))
            .await
    }
}
