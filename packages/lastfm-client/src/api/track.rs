//! `track.*` methods

use serde_json::Value;

use crate::api::Paging;
use crate::client::LastfmClient;
use crate::error::LastfmResult;
use crate::params::ParameterSet;
use crate::validate::{self, TagList};

pub mod methods {
    use crate::call::CallSpec;

    pub const ADD_TAGS: CallSpec = CallSpec::session("track", "addTags");
    pub const GET_CORRECTION: CallSpec = CallSpec::public("track", "getCorrection");
    pub const GET_INFO: CallSpec = CallSpec::public("track", "getInfo");
    pub const GET_SIMILAR: CallSpec = CallSpec::public("track", "getSimilar");
    pub const GET_TAGS: CallSpec = CallSpec::public("track", "getTags");
    pub const GET_TOP_TAGS: CallSpec = CallSpec::public("track", "getTopTags");
    pub const LOVE: CallSpec = CallSpec::session("track", "love");
    pub const REMOVE_TAG: CallSpec = CallSpec::session("track", "removeTag");
    pub const SEARCH: CallSpec = CallSpec::public("track", "search");
    pub const UNLOVE: CallSpec = CallSpec::session("track", "unlove");
}

/// Identifies a track by artist and title, or by MusicBrainz id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackLookup {
    pub artist: Option<String>,
    pub track: Option<String>,
    pub mbid: Option<String>,
    pub autocorrect: bool,
}

impl TrackLookup {
    pub fn by_name(artist: impl Into<String>, track: impl Into<String>) -> Self {
        Self {
            artist: Some(artist.into()),
            track: Some(track.into()),
            ..Default::default()
        }
    }

    pub fn by_mbid(mbid: impl Into<String>) -> Self {
        Self {
            mbid: Some(mbid.into()),
            ..Default::default()
        }
    }

    pub fn autocorrect(mut self, autocorrect: bool) -> Self {
        self.autocorrect = autocorrect;
        self
    }

    fn params(&self) -> LastfmResult<ParameterSet> {
        validate::require_identity(
            &[
                ("artist", self.artist.as_deref()),
                ("track", self.track.as_deref()),
            ],
            self.mbid.as_deref(),
        )?;
        Ok(ParameterSet::new()
            .with("artist", validate::provided(self.artist.as_deref()))
            .with("track", validate::provided(self.track.as_deref()))
            .with("mbid", validate::provided(self.mbid.as_deref()))
            .with("autocorrect", self.autocorrect))
    }
}

fn artist_track(artist: &str, track: &str) -> LastfmResult<ParameterSet> {
    Ok(ParameterSet::new()
        .with("artist", validate::require("artist", artist)?)
        .with("track", validate::require("track", track)?))
}

/// Handle for the `track` section
pub struct Track<'a> {
    client: &'a LastfmClient,
}

impl<'a> Track<'a> {
    pub(crate) fn new(client: &'a LastfmClient) -> Self {
        Self { client }
    }

    /// Tag a track with up to 10 tags. Requires a session.
    pub async fn add_tags(
        &self,
        artist: &str,
        track: &str,
        tags: impl Into<TagList>,
    ) -> LastfmResult<Value> {
        let mut params = artist_track(artist, track)?;
        params.insert("tags", validate::check_tags(tags.into())?);
        self.client.call(&methods::ADD_TAGS, params).await
    }

    /// Canonical spelling of an artist/track pair
    pub async fn get_correction(&self, artist: &str, track: &str) -> LastfmResult<Value> {
        let params = artist_track(artist, track)?;
        self.client.call(&methods::GET_CORRECTION, params).await
    }

    pub async fn get_info(
        &self,
        lookup: &TrackLookup,
        username: Option<&str>,
    ) -> LastfmResult<Value> {
        let params = lookup.params()?.with("username", username);
        self.client.call(&methods::GET_INFO, params).await
    }

    pub async fn get_similar(
        &self,
        lookup: &TrackLookup,
        limit: Option<u32>,
    ) -> LastfmResult<Value> {
        let params = lookup.params()?.with("limit", limit);
        self.client.call(&methods::GET_SIMILAR, params).await
    }

    pub async fn get_tags(&self, lookup: &TrackLookup, user: Option<&str>) -> LastfmResult<Value> {
        let params = lookup.params()?.with("user", user);
        self.client.call(&methods::GET_TAGS, params).await
    }

    pub async fn get_top_tags(&self, lookup: &TrackLookup) -> LastfmResult<Value> {
        let params = lookup.params()?;
        self.client.call(&methods::GET_TOP_TAGS, params).await
    }

    /// Love a track for the session user
    pub async fn love(&self, artist: &str, track: &str) -> LastfmResult<Value> {
        let params = artist_track(artist, track)?;
        self.client.call(&methods::LOVE, params).await
    }

    pub async fn unlove(&self, artist: &str, track: &str) -> LastfmResult<Value> {
        let params = artist_track(artist, track)?;
        self.client.call(&methods::UNLOVE, params).await
    }

    pub async fn remove_tag(&self, artist: &str, track: &str, tag: &str) -> LastfmResult<Value> {
        let params = artist_track(artist, track)?.with("tag", validate::require("tag", tag)?);
        self.client.call(&methods::REMOVE_TAG, params).await
    }

    /// Search by track title, optionally narrowed to an artist
    pub async fn search(
        &self,
        track: &str,
        artist: Option<&str>,
        paging: Paging,
    ) -> LastfmResult<Value> {
        let params = ParameterSet::new()
            .with("track", validate::require("track", track)?)
            .with("artist", artist);
        self.client.call(&methods::SEARCH, paging.apply(params)).await
    }
}
