pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod tui;

pub use projectography_core as core;
pub use projectography_core::catalog;
pub use projectography_core::compose;
pub use projectography_core::layout;
pub use projectography_core::links;
pub use projectography_core::model;
pub use projectography_core::query;

pub use projectography_core::AppConfig;
