pub use projectography_tui::cli;
pub use projectography_tui::commands;
pub use projectography_tui::config;
pub use projectography_tui::logging;
pub use projectography_tui::tui;
pub use projectography_tui::AppConfig;

pub use projectography_core as core;
pub use projectography_core::catalog;
pub use projectography_core::compose;
pub use projectography_core::layout;
pub use projectography_core::links;
pub use projectography_core::model;
pub use projectography_core::query;
