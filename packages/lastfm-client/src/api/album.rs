//! `album.*` methods

use serde_json::Value;

use crate::api::Paging;
use crate::call::AuthMode;
use crate::client::LastfmClient;
use crate::error::LastfmResult;
use crate::params::ParameterSet;
use crate::validate::{self, TagList};

pub mod methods {
    use crate::call::CallSpec;

    pub const ADD_TAGS: CallSpec = CallSpec::session("album", "addTags");
    pub const GET_INFO: CallSpec = CallSpec::public("album", "getInfo");
    pub const GET_TAGS: CallSpec = CallSpec::public("album", "getTags");
    pub const GET_TOP_TAGS: CallSpec = CallSpec::public("album", "getTopTags");
    pub const REMOVE_TAG: CallSpec = CallSpec::session("album", "removeTag");
    pub const SEARCH: CallSpec = CallSpec::public("album", "search");
}

/// Identifies an album by artist and title, or by MusicBrainz id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumLookup {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub mbid: Option<String>,
    /// Let the service correct misspelled artist names
    pub autocorrect: bool,
}

impl AlbumLookup {
    pub fn by_name(artist: impl Into<String>, album: impl Into<String>) -> Self {
        Self {
            artist: Some(artist.into()),
            album: Some(album.into()),
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
                ("album", self.album.as_deref()),
            ],
            self.mbid.as_deref(),
        )?;
        Ok(ParameterSet::new()
            .with("artist", validate::provided(self.artist.as_deref()))
            .with("album", validate::provided(self.album.as_deref()))
            .with("mbid", validate::provided(self.mbid.as_deref()))
            .with("autocorrect", self.autocorrect))
    }
}

/// Handle for the `album` section
pub struct Album<'a> {
    client: &'a LastfmClient,
}

impl<'a> Album<'a> {
    pub(crate) fn new(client: &'a LastfmClient) -> Self {
        Self { client }
    }

    /// Tag an album with up to 10 tags. Requires a session.
    ///
    /// # Errors
    /// - `LastfmError::MissingRequiredParameter` for an empty artist, album or tag list
    /// - `LastfmError::TooManyTags` for more than 10 tags
    /// - `LastfmError::AuthRequired` without a session key
    pub async fn add_tags(
        &self,
        artist: &str,
        album: &str,
        tags: impl Into<TagList>,
    ) -> LastfmResult<Value> {
        let artist = validate::require("artist", artist)?;
        let album = validate::require("album", album)?;
        let tags = validate::check_tags(tags.into())?;
        let params = ParameterSet::new()
            .with("artist", artist)
            .with("album", album)
            .with("tags", tags);
        self.client.call(&methods::ADD_TAGS, params).await
    }

    /// Album metadata and tracklist; `username` adds that user's playcount
    pub async fn get_info(
        &self,
        lookup: &AlbumLookup,
        username: Option<&str>,
    ) -> LastfmResult<Value> {
        let params = lookup
            .params()?
            .with("username", username)
            .with("lang", self.client.get_language());
        self.client.call(&methods::GET_INFO, params).await
    }

    /// Tags applied by a user to an album
    ///
    /// Without `user`, the authenticated user's tags are returned; the call is
    /// then signed with the session key.
    ///
    /// # Errors
    /// `LastfmError::UserRequiredUnlessAuth` when there is neither a user nor
    /// a session.
    pub async fn get_tags(&self, lookup: &AlbumLookup, user: Option<&str>) -> LastfmResult<Value> {
        let mut params = lookup.params()?;
        validate::require_user_unless_authenticated(user, self.client.session())?;
        params.insert("user", user);

        let spec = if user.is_none() {
            methods::GET_TAGS.with_auth(AuthMode::Signed)
        } else {
            methods::GET_TAGS
        };
        self.client.call(&spec, params).await
    }

    pub async fn get_top_tags(&self, lookup: &AlbumLookup) -> LastfmResult<Value> {
        let params = lookup.params()?;
        self.client.call(&methods::GET_TOP_TAGS, params).await
    }

    /// Remove one of the user's tags. Requires a session.
    pub async fn remove_tag(&self, artist: &str, album: &str, tag: &str) -> LastfmResult<Value> {
        let params = ParameterSet::new()
            .with("artist", validate::require("artist", artist)?)
            .with("album", validate::require("album", album)?)
            .with("tag", validate::require("tag", tag)?);
        self.client.call(&methods::REMOVE_TAG, params).await
    }

    pub async fn search(&self, album: &str, paging: Paging) -> LastfmResult<Value> {
        let params = ParameterSet::new().with("album", validate::require("album", album)?);
        self.client.call(&methods::SEARCH, paging.apply(params)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{authed_client, client, SpyTransport};
    use crate::auth::ApiSecret;
    use crate::error::LastfmError;
    use crate::signer;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_add_tags_signed_with_session() {
        let transport = SpyTransport::new();
        authed_client(&transport)
            .album()
            .add_tags("Muse", "Origin of Symmetry", vec!["rock", "alternative"])
            .await
            .unwrap();

        let query = transport.last_query();
        assert_eq!(query.get("method"), Some("album.addTags"));
        assert_eq!(query.get("tags"), Some("rock,alternative"));
        assert_eq!(query.get("sk"), Some("SESSION"));
        assert_eq!(query.get("api_sig"), Some("8ddf632ae5e36124ae69e6a9caadf1b9"));
        assert!(signer::verify(query.iter(), &ApiSecret::new("S")));
    }

    #[tokio::test]
    async fn test_add_tags_without_session_sends_nothing() {
        let transport = SpyTransport::new();
        let result = client(&transport)
            .album()
            .add_tags("Muse", "Origin of Symmetry", "rock")
            .await;

        assert_matches!(result, Err(LastfmError::AuthRequired));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_add_tags_too_many() {
        let transport = SpyTransport::new();
        let result = authed_client(&transport)
            .album()
            .add_tags("Muse", "Absolution", "a,b,c,d,e,f,g,h,i,j,k")
            .await;

        assert_matches!(result, Err(LastfmError::TooManyTags { count: 11 }));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_get_info_requires_identity() {
        let transport = SpyTransport::new();
        let lookup = AlbumLookup {
            artist: Some("Muse".to_string()),
            ..Default::default()
        };
        let result = client(&transport).album().get_info(&lookup, None).await;

        assert_matches!(result, Err(LastfmError::MissingRequiredParameter(_)));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_get_info_by_mbid() {
        let transport = SpyTransport::new();
        client(&transport)
            .album()
            .get_info(&AlbumLookup::by_mbid("8a4dcd39-8e43"), Some("rj"))
            .await
            .unwrap();

        let query = transport.last_query();
        assert_eq!(query.get("mbid"), Some("8a4dcd39-8e43"));
        assert_eq!(query.get("username"), Some("rj"));
        assert_eq!(query.get("lang"), Some("en"));
        assert_eq!(query.get("autocorrect"), Some("0"));
        assert!(!query.contains_key("artist"));
        assert!(!query.is_signed());
    }

    #[tokio::test]
    async fn test_add_tags_sends_arguments_as_given() {
        let transport = SpyTransport::new();
        authed_client(&transport)
            .album()
            .add_tags(" Muse ", "Origin of Symmetry ", "rock, indie ")
            .await
            .unwrap();

        let query = transport.last_query();
        assert_eq!(query.get("artist"), Some(" Muse "));
        assert_eq!(query.get("album"), Some("Origin of Symmetry "));
        assert_eq!(query.get("tags"), Some("rock, indie "));
    }

    #[tokio::test]
    async fn test_mbid_lookup_drops_blank_names() {
        let transport = SpyTransport::new();
        let lookup = AlbumLookup {
            artist: Some("  ".to_string()),
            album: Some(String::new()),
            mbid: Some("abc".to_string()),
            autocorrect: false,
        };
        client(&transport)
            .album()
            .get_info(&lookup, None)
            .await
            .unwrap();

        let query = transport.last_query();
        assert_eq!(query.get("mbid"), Some("abc"));
        assert!(!query.contains_key("artist"));
        assert!(!query.contains_key("album"));
    }

    #[tokio::test]
    async fn test_get_tags_needs_user_or_session() {
        let transport = SpyTransport::new();
        let lookup = AlbumLookup::by_name("Muse", "Absolution");

        let result = client(&transport).album().get_tags(&lookup, None).await;
        assert_matches!(result, Err(LastfmError::UserRequiredUnlessAuth));
        assert_eq!(transport.calls(), 0);

        client(&transport)
            .album()
            .get_tags(&lookup, Some("rj"))
            .await
            .unwrap();
        assert_eq!(transport.last_query().get("user"), Some("rj"));
        assert!(!transport.last_query().is_signed());
    }

    #[tokio::test]
    async fn test_get_tags_with_session_is_signed() {
        let transport = SpyTransport::new();
        authed_client(&transport)
            .album()
            .get_tags(&AlbumLookup::by_name("Muse", "Absolution"), None)
            .await
            .unwrap();

        let query = transport.last_query();
        assert_eq!(query.get("sk"), Some("SESSION"));
        assert!(query.is_signed());
        assert!(!query.contains_key("user"));
    }

    #[tokio::test]
    async fn test_remove_tag_and_search() {
        let transport = SpyTransport::new();
        let client = authed_client(&transport);

        client.album().remove_tag("Muse", "Absolution", "rock").await.unwrap();
        assert_eq!(transport.last_query().get("method"), Some("album.removeTag"));
        assert_eq!(transport.last_query().get("tag"), Some("rock"));

        client.album().search("Absolution", Paging::limit(30)).await.unwrap();
        let query = transport.last_query();
        assert_eq!(query.get("method"), Some("album.search"));
        assert_eq!(query.get("limit"), Some("30"));
        assert_eq!(query.get("page"), Some("1"));
        assert!(!query.is_signed());
    }
}
