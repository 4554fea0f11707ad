//! `chart.*` methods

use serde_json::Value;

use crate::api::Paging;
use crate::client::LastfmClient;
use crate::error::LastfmResult;
use crate::params::ParameterSet;

pub mod methods {
    use crate::call::CallSpec;

    pub const GET_TOP_ARTISTS: CallSpec = CallSpec::public("chart", "getTopArtists");
    pub const GET_TOP_TAGS: CallSpec = CallSpec::public("chart", "getTopTags");
    pub const GET_TOP_TRACKS: CallSpec = CallSpec::public("chart", "getTopTracks");
}

/// Handle for the `chart` section (site-wide charts)
pub struct Chart<'a> {
    client: &'a LastfmClient,
}

impl<'a> Chart<'a> {
    pub(crate) fn new(client: &'a LastfmClient) -> Self {
        Self { client }
    }

    pub async fn get_top_artists(&self, paging: Paging) -> LastfmResult<Value> {
        self.client
            .call(&methods::GET_TOP_ARTISTS, paging.apply(ParameterSet::new()))
            .await
    }

    pub async fn get_top_tags(&self, paging: Paging) -> LastfmResult<Value> {
        self.client
            .call(&methods::GET_TOP_TAGS, paging.apply(ParameterSet::new()))
            .await
    }

    pub async fn get_top_tracks(&self, paging: Paging) -> LastfmResult<Value> {
        self.client
            .call(&methods::GET_TOP_TRACKS, paging.apply(ParameterSet::new()))
            .await
    }
}
