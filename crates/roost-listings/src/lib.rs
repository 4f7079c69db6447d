pub mod asset;
pub mod client;
mod documents;
pub mod error;
pub mod fallback;
mod leads;
mod locations;
pub mod mock;
mod search;
mod shortlist;
pub mod token;

pub use asset::{map_asset, map_document};
pub use client::ListingsClient;
pub use error::{FallbackCause, ListingsError, TokenError, UpstreamError};
pub use fallback::{DataSource, Sourced};
pub use mock::{MockCatalog, ShortlistStore};
pub use token::TokenCache;
