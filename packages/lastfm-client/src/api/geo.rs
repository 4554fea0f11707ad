//! `geo.*` methods

use serde_json::Value;

use crate::api::Paging;
use crate::client::LastfmClient;
use crate::error::LastfmResult;
use crate::params::ParameterSet;
use crate::validate;

pub mod methods {
    use crate::call::CallSpec;

    pub const GET_TOP_ARTISTS: CallSpec = CallSpec::public("geo", "getTopArtists");
    pub const GET_TOP_TRACKS: CallSpec = CallSpec::public("geo", "getTopTracks");
}

/// Handle for the `geo` section
///
/// Countries are ISO 3166-1 names as used by the service (e.g. `spain`).
pub struct Geo<'a> {
    client: &'a LastfmClient,
}

impl<'a> Geo<'a> {
    pub(crate) fn new(client: &'a LastfmClient) -> Self {
        Self { client }
    }

    fn country(country: &str, paging: Paging) -> LastfmResult<ParameterSet> {
        let params = ParameterSet::new().with("country", validate::require("country", country)?);
        Ok(paging.apply(params))
    }

    pub async fn get_top_artists(&self, country: &str, paging: Paging) -> LastfmResult<Value> {
        let params = Self::country(country, paging)?;
        self.client.call(&methods::GET_TOP_ARTISTS, params).await
    }

    pub async fn get_top_tracks(&self, country: &str, paging: Paging) -> LastfmResult<Value> {
        let params = Self::country(country, paging)?;
        self.client.call(&methods::GET_TOP_TRACKS, params).await
    }
}
