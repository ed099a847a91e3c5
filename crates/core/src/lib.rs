pub mod catalog;
pub mod compose;
pub mod config;
pub mod layout;
pub mod links;
pub mod model;
pub mod query;

pub use catalog::{Catalog, CatalogError};
pub use compose::{BodyScale, ColumnSet, Composition, DetailPanes, DisplayScale};
pub use config::{AppConfig, CatalogSource};
pub use layout::{Container, Focus, LayoutAction, LayoutState, Pane, ResizeGesture};
pub use links::{LinkCategory, RelatedLinkGroups};
pub use model::*;
pub use query::QueryParams;
