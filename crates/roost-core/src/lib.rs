//! Domain types and request normalization shared by the Roost crates.
//!
//! Nothing in here performs I/O apart from [`load_app_config`], which reads
//! the process environment (and an optional `.env` file).

pub mod app_config;
pub mod config;
pub mod document;
pub mod geo;
pub mod lead;
pub mod pagination;
pub mod property;
pub mod query;
pub mod search_params;
pub mod shortlist;
pub mod text;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{build_app_config, load_app_config, load_app_config_from_env};
pub use document::{document_asset_type, Document};
pub use lead::Lead;
pub use pagination::{page_bounds, page_count};
pub use property::{status_label, NeighborhoodStat, Property, PropertyList, DEFAULT_CURRENCY};
pub use query::QueryValues;
pub use search_params::{SearchParams, SortOrder, DEFAULT_LIMIT, DEFAULT_STATUS_FILTER};
pub use shortlist::ShortlistStatus;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
