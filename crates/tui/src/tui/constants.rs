use std::time::Duration;

pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) const TICK_RATE: Duration = Duration::from_millis(200);
pub(crate) const STATUS_TTL: Duration = Duration::from_secs(5);

pub(crate) const BRAND: &str = "PROJECTOGRAPHY";

/// Detail-width change per `<`/`>` press, in percent.
pub(crate) const NUDGE_STEP: f32 = 5.0;
pub(crate) const SCROLL_STEP: u16 = 3;
pub(crate) const PAGE_STEP: u16 = 10;

pub(crate) const INFO_NOTE: &str = "Manage each view individually with its own Close and Maximize controls. Access external links and project credits in the detail pane.";

pub(crate) const STATUS_SEARCH: &str = "Type to filter • Enter keeps the search • Esc clears it";
pub(crate) const STATUS_HELP: &str = "Keyboard reference • Enter/Esc to close";
pub(crate) const STATUS_NO_PROJECT: &str = "Open a project first (Enter on a row)";
pub(crate) const STATUS_NO_MEDIUM: &str = "Open a medium first (m on an open project)";
pub(crate) const STATUS_NO_LINK: &str = "This project has no external link";
pub(crate) const STATUS_PANE_CLOSED: &str = "That pane is not open";

pub(crate) const HINT_NORMAL: &str = "j/k move | enter open | m medium | / search | f filter | 1-6 sort | x/X close | z/Z maximize | </> resize | o related | l link | r reset | h help | q quit";
pub(crate) const HINT_SEARCH: &str = "enter keep | esc clear | ←/→ move cursor";
pub(crate) const HINT_OVERLAY: &str = "enter/esc close";
