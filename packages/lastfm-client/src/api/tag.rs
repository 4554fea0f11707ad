//! `tag.*` methods

use serde_json::Value;

use crate::api::Paging;
use crate::client::LastfmClient;
use crate::error::LastfmResult;
use crate::params::ParameterSet;
use crate::validate;

pub mod methods {
    use crate::call::CallSpec;

    pub const GET_INFO: CallSpec = CallSpec::public("tag", "getInfo");
    pub const GET_SIMILAR: CallSpec = CallSpec::public("tag", "getSimilar");
    pub const GET_TOP_ALBUMS: CallSpec = CallSpec::public("tag", "getTopAlbums");
    pub const GET_TOP_ARTISTS: CallSpec = CallSpec::public("tag", "getTopArtists");
    pub const GET_TOP_TAGS: CallSpec = CallSpec::public("tag", "getTopTags");
    pub const GET_TOP_TRACKS: CallSpec = CallSpec::public("tag", "getTopTracks");
    pub const GET_WEEKLY_CHART_LIST: CallSpec = CallSpec::public("tag", "getWeeklyChartList");
}

/// Handle for the `tag` section
pub struct Tag<'a> {
    client: &'a LastfmClient,
}

impl<'a> Tag<'a> {
    pub(crate) fn new(client: &'a LastfmClient) -> Self {
        Self { client }
    }

    fn tag(tag: &str) -> LastfmResult<ParameterSet> {
        Ok(ParameterSet::new().with("tag", validate::require("tag", tag)?))
    }

    /// Tag description, in the client's language
    pub async fn get_info(&self, tag: &str) -> LastfmResult<Value> {
        let params = Self::tag(tag)?.with("lang", self.client.get_language());
        self.client.call(&methods::GET_INFO, params).await
    }

    pub async fn get_similar(&self, tag: &str) -> LastfmResult<Value> {
        self.client.call(&methods::GET_SIMILAR, Self::tag(tag)?).await
    }

    pub async fn get_top_albums(&self, tag: &str, paging: Paging) -> LastfmResult<Value> {
        let params = paging.apply(Self::tag(tag)?);
        self.client.call(&methods::GET_TOP_ALBUMS, params).await
    }

    pub async fn get_top_artists(&self, tag: &str, paging: Paging) -> LastfmResult<Value> {
        let params = paging.apply(Self::tag(tag)?);
        self.client.call(&methods::GET_TOP_ARTISTS, params).await
    }

    pub async fn get_top_tracks(&self, tag: &str, paging: Paging) -> LastfmResult<Value> {
        let params = paging.apply(Self::tag(tag)?);
        self.client.call(&methods::GET_TOP_TRACKS, params).await
    }

    /// Site-wide top tags
    pub async fn get_top_tags(&self) -> LastfmResult<Value> {
        self.client
            .call(&methods::GET_TOP_TAGS, ParameterSet::new())
            .await
    }

    pub async fn get_weekly_chart_list(&self, tag: &str) -> LastfmResult<Value> {
        self.client
            .call(&methods::GET_WEEKLY_CHART_LIST, Self::tag(tag)?)
            .await
    }
}
