//! Core projection logic for allmark repositories.
//! This crate owns the view-model projection and tag index invariants.

pub mod config;
pub mod index;
pub mod logging;
pub mod mapper;
pub mod model;
pub mod pattern;

pub use config::{ConfigError, ProjectorConfig};
pub use index::item_list::ItemList;
pub use index::tag_map::TagMap;
pub use logging::{default_log_level, init_logging, logging_status};
pub use mapper::cache::ViewModelCache;
pub use mapper::collaborators::{
    ContentRenderer, ItemCatalog, ItemResolver, PrefixRoutes, RawContent, RouteComputer,
};
pub use mapper::geo::derive_geo_view;
pub use mapper::projector::{Projector, UNRECOGNIZED_TYPE_TITLE};
pub use model::item::{GeoInformation, Item, ItemId, ItemType, Location, MetaData};
pub use model::tag::{parse_tags, Tag, TagError};
pub use model::view::{GeoView, TagView, ViewModel};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
