//! `user.*` methods

use serde_json::Value;

use crate::api::Paging;
use crate::call::CallSpec;
use crate::client::LastfmClient;
use crate::error::LastfmResult;
use crate::params::ParameterSet;
use crate::validate;

pub mod methods {
    use crate::call::CallSpec;

    pub const GET_ARTIST_TRACKS: CallSpec = CallSpec::public("user", "getArtistTracks");
    pub const GET_FRIENDS: CallSpec = CallSpec::public("user", "getFriends");
    pub const GET_INFO: CallSpec = CallSpec::public("user", "getInfo");
    pub const GET_LOVED_TRACKS: CallSpec = CallSpec::public("user", "getLovedTracks");
    pub const GET_PERSONAL_TAGS: CallSpec = CallSpec::public("user", "getPersonalTags");
    pub const GET_RECENT_TRACKS: CallSpec = CallSpec::public("user", "getRecentTracks");
    pub const GET_TOP_ALBUMS: CallSpec = CallSpec::public("user", "getTopAlbums");
    pub const GET_TOP_ARTISTS: CallSpec = CallSpec::public("user", "getTopArtists");
    pub const GET_TOP_TAGS: CallSpec = CallSpec::public("user", "getTopTags");
    pub const GET_TOP_TRACKS: CallSpec = CallSpec::public("user", "getTopTracks");
    pub const GET_WEEKLY_ALBUM_CHART: CallSpec = CallSpec::public("user", "getWeeklyAlbumChart");
    pub const GET_WEEKLY_ARTIST_CHART: CallSpec =
        CallSpec::public("user", "getWeeklyArtistChart");
    pub const GET_WEEKLY_CHART_LIST: CallSpec = CallSpec::public("user", "getWeeklyChartList");
    pub const GET_WEEKLY_TRACK_CHART: CallSpec = CallSpec::public("user", "getWeeklyTrackChart");
}

/// Handle for the `user` section, bound to one username
pub struct User<'a> {
    client: &'a LastfmClient,
    user: String,
}

impl<'a> User<'a> {
    pub(crate) fn new(client: &'a LastfmClient, user: String) -> Self {
        Self { client, user }
    }

    pub fn name(&self) -> &str {
        &self.user
    }

    fn base(&self) -> LastfmResult<ParameterSet> {
        Ok(ParameterSet::new().with("user", validate::require("user", &self.user)?))
    }

    async fn top(&self, spec: &CallSpec, period: &str, paging: Paging) -> LastfmResult<Value> {
        let period = validate::check_period(period)?;
        let params = self.base()?.with("period", period.as_str());
        self.client.call(spec, paging.apply(params)).await
    }

    async fn weekly(
        &self,
        spec: &CallSpec,
        from: Option<i64>,
        to: Option<i64>,
    ) -> LastfmResult<Value> {
        let params = self.base()?.with("from", from).with("to", to);
        self.client.call(spec, params).await
    }

    /// Scrobbles of one artist by this user, optionally within a time range
    /// (UNIX timestamps)
    pub async fn get_artist_tracks(
        &self,
        artist: &str,
        start: Option<i64>,
        end: Option<i64>,
        page: u32,
    ) -> LastfmResult<Value> {
        let params = self
            .base()?
            .with("artist", validate::require("artist", artist)?)
            .with("startTimestamp", start)
            .with("page", page)
            .with("endTimestamp", end);
        self.client.call(&methods::GET_ARTIST_TRACKS, params).await
    }

    pub async fn get_friends(&self, recent_tracks: bool, paging: Paging) -> LastfmResult<Value> {
        let params = self.base()?.with("recenttracks", recent_tracks);
        self.client
            .call(&methods::GET_FRIENDS, paging.apply(params))
            .await
    }

    pub async fn get_info(&self) -> LastfmResult<Value> {
        let params = self.base()?;
        self.client.call(&methods::GET_INFO, params).await
    }

    pub async fn get_loved_tracks(&self, paging: Paging) -> LastfmResult<Value> {
        let params = self.base()?;
        self.client
            .call(&methods::GET_LOVED_TRACKS, paging.apply(params))
            .await
    }

    /// Items this user tagged with `tag`; `tagging_type` is `artist`,
    /// `album` or `track`
    pub async fn get_personal_tags(
        &self,
        tag: &str,
        tagging_type: &str,
        paging: Paging,
    ) -> LastfmResult<Value> {
        let params = self
            .base()?
            .with("tag", validate::require("tag", tag)?)
            .with("taggingtype", validate::require("taggingtype", tagging_type)?);
        self.client
            .call(&methods::GET_PERSONAL_TAGS, paging.apply(params))
            .await
    }

    pub async fn get_recent_tracks(
        &self,
        extended: bool,
        from: Option<i64>,
        to: Option<i64>,
        paging: Paging,
    ) -> LastfmResult<Value> {
        let params = self
            .base()?
            .with("extended", extended)
            .with("from", from)
            .with("to", to);
        self.client
            .call(&methods::GET_RECENT_TRACKS, paging.apply(params))
            .await
    }

    /// # Errors
    /// `LastfmError::InvalidPeriod` unless `period` is one of `overall`,
    /// `7day`, `1month`, `3month`, `6month`, `12month`
    pub async fn get_top_albums(&self, period: &str, paging: Paging) -> LastfmResult<Value> {
        self.top(&methods::GET_TOP_ALBUMS, period, paging).await
    }

    pub async fn get_top_artists(&self, period: &str, paging: Paging) -> LastfmResult<Value> {
        self.top(&methods::GET_TOP_ARTISTS, period, paging).await
    }

    pub async fn get_top_tracks(&self, period: &str, paging: Paging) -> LastfmResult<Value> {
        self.top(&methods::GET_TOP_TRACKS, period, paging).await
    }

    pub async fn get_top_tags(&self, limit: Option<u32>) -> LastfmResult<Value> {
        let params = self.base()?.with("limit", limit);
        self.client.call(&methods::GET_TOP_TAGS, params).await
    }

    pub async fn get_weekly_album_chart(
        &self,
        from: Option<i64>,
        to: Option<i64>,
    ) -> LastfmResult<Value> {
        self.weekly(&methods::GET_WEEKLY_ALBUM_CHART, from, to).await
    }

    pub async fn get_weekly_artist_chart(
        &self,
        from: Option<i64>,
        to: Option<i64>,
    ) -> LastfmResult<Value> {
        self.weekly(&methods::GET_WEEKLY_ARTIST_CHART, from, to).await
    }

    pub async fn get_weekly_track_chart(
        &self,
        from: Option<i64>,
        to: Option<i64>,
    ) -> LastfmResult<Value> {
        self.weekly(&methods::GET_WEEKLY_TRACK_CHART, from, to).await
    }

    /// Date ranges usable with the weekly chart methods
    pub async fn get_weekly_chart_list(&self) -> LastfmResult<Value> {
        let params = self.base()?;
        self.client.call(&methods::GET_WEEKLY_CHART_LIST, params).await
    }
}
