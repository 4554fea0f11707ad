//! Last.fm web service client
//!
//! Every remote method goes through one path: arguments are validated,
//! collected into a [`ParameterSet`], turned into a [`SignedQuery`] (signed
//! with the shared secret when the method requires authentication), sent by a
//! [`Transport`], and the JSON reply is checked for an error envelope.
//!
//! # Example
//!
//! ```rust,no_run
//! use lastfm_client::{LastfmClient, Paging};
//! use lastfm_config::LastfmConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LastfmConfig::new("your_api_key", "your_api_secret");
//! let mut client = LastfmClient::new(&config)?;
//!
//! // Public methods need only the API key
//! let top = client.user("rj").get_top_albums("7day", Paging::limit(10)).await?;
//! println!("{}", top);
//!
//! // Authenticated methods need a session key from the handshake
//! let token = client.auth().get_token().await?;
//! println!("Authorize at {}", client.auth().auth_url(&token.token)?);
//! let session = client.auth().get_session(&token.token).await?;
//! client.set_session_key(session.key);
//! client.track().love("Muse", "Bliss").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! - `LASTFM_API_KEY`: API key (required)
//! - `LASTFM_API_SECRET`: shared secret (required)
//! - `LASTFM_SESSION_KEY`: session key from a previous handshake

pub mod api;
mod auth;
mod call;
mod client;
mod error;
mod models;
mod params;
mod response;
pub mod signer;
mod transport;
mod validate;

pub use api::{
    Album, AlbumLookup, Auth, Chart, Geo, Library, Paging, Tag, Track, TrackLookup, User,
};
pub use auth::{ApiSecret, Credentials, Session, SessionKey};
pub use call::{build, AuthMode, CallSpec, SignedQuery};
pub use client::{ApiKeyStatus, LastfmClient};
pub use error::{LastfmError, LastfmResult};
pub use models::{SessionInfo, Token};
pub use params::{IntoParamValue, ParamValue, ParameterSet};
pub use response::interpret;
pub use transport::{HttpTransport, Transport};
pub use validate::{
    check_period, check_tags, require_identity, Period, TagList, MAX_TAGS,
};
