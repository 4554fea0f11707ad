//! Per-section method tables
//!
//! Every section module starts with the [`CallSpec`](crate::CallSpec)
//! descriptors of its remote methods, followed by a thin handle that checks
//! arguments, fills a [`ParameterSet`] and goes through
//! [`LastfmClient::call`](crate::LastfmClient::call).

mod album;
mod auth;
mod chart;
mod geo;
mod library;
mod tag;
mod track;
mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use album::{Album, AlbumLookup};
pub use auth::Auth;
pub use chart::Chart;
pub use geo::Geo;
pub use library::Library;
pub use tag::Tag;
pub use track::{Track, TrackLookup};
pub use user::User;

/// Descriptor tables, one module per section
pub mod methods {
    pub use super::album::methods as album;
    pub use super::auth::methods as auth;
    pub use super::chart::methods as chart;
    pub use super::geo::methods as geo;
    pub use super::library::methods as library;
    pub use super::tag::methods as tag;
    pub use super::track::methods as track;
    pub use super::user::methods as user;
}

use crate::params::ParameterSet;

/// Default page size used by the service
const DEFAULT_LIMIT: u32 = 50;

/// `limit`/`page` pair for paginated methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub limit: u32,
    pub page: u32,
}

impl Paging {
    pub fn new(limit: u32, page: u32) -> Self {
        Self { limit, page }
    }

    /// First page with `limit` results
    pub fn limit(limit: u32) -> Self {
        Self { limit, page: 1 }
    }

    pub(crate) fn apply(self, params: ParameterSet) -> ParameterSet {
        params.with("limit", self.limit).with("page", self.page)
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: 1,
        }
    }
}
