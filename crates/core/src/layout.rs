//! Selection and pane-layout state machine.
//!
//! [`LayoutState`] is an immutable snapshot of what is open and how wide the
//! detail area is. Every user interaction becomes a [`LayoutAction`] fed
//! through [`LayoutState::apply`], which returns the next snapshot. Values such
//! as the effective width or dual mode are derived on each read and never
//! stored.

use std::fmt;

/// Raw detail widths below this collapse the detail area entirely.
pub const SNAP_CLOSED_BELOW: f32 = 15.0;
/// Raw detail widths above this hide the list entirely.
pub const SNAP_FULL_ABOVE: f32 = 85.0;
/// A solo pane counts as maximised past this effective width.
pub const MAXIMIZED_ABOVE: f32 = 90.0;

pub const CLOSED_WIDTH: f32 = 0.0;
pub const HALF_WIDTH: f32 = 50.0;
pub const FULL_WIDTH: f32 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Both,
    Project,
    Medium,
}

impl Focus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Focus::Both => "BOTH",
            Focus::Project => "PROJECT",
            Focus::Medium => "MEDIUM",
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Project,
    Medium,
}

impl From<Pane> for Focus {
    fn from(pane: Pane) -> Self {
        match pane {
            Pane::Project => Focus::Project,
            Pane::Medium => Focus::Medium,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutAction {
    /// A row in the list was chosen.
    OpenProject(String),
    /// A medium badge was activated; keeps any open project (dual mode).
    OpenMedium(String),
    Reset,
    CloseProjectPane,
    CloseMediumPane,
    /// Solo-mode maximise/restore.
    ToggleMaximize,
    /// Dual-mode maximise/restore of one pane.
    TogglePaneFocus(Pane),
    /// A row in the medium pane's related-projects list was chosen.
    SelectRelatedProject(String),
    /// Drag update; the value is clamped into [0, 100].
    SetDetailWidth(f32),
    /// Keyboard resize by a signed step, clamped into [0, 100]. Ignored while
    /// no pane is open.
    NudgeDetailWidth(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    selected_project: Option<String>,
    selected_medium: Option<String>,
    focus: Focus,
    detail_width_raw: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            selected_project: None,
            selected_medium: None,
            focus: Focus::Both,
            detail_width_raw: CLOSED_WIDTH,
        }
    }
}

impl LayoutState {
    pub fn selected_project(&self) -> Option<&str> {
        self.selected_project.as_deref()
    }

    pub fn selected_medium(&self) -> Option<&str> {
        self.selected_medium.as_deref()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn detail_width_raw(&self) -> f32 {
        self.detail_width_raw
    }

    /// Both a project and a medium are open.
    pub fn is_dual(&self) -> bool {
        self.selected_project.is_some() && self.selected_medium.is_some()
    }

    pub fn is_pane_open(&self, pane: Pane) -> bool {
        match pane {
            Pane::Project => self.selected_project.is_some(),
            Pane::Medium => self.selected_medium.is_some(),
        }
    }

    /// Detail width after snapping near the rails.
    pub fn effective_detail_width(&self) -> f32 {
        snap_detail_width(self.detail_width_raw)
    }

    pub fn table_width(&self) -> f32 {
        FULL_WIDTH - self.effective_detail_width()
    }

    pub fn is_table_only(&self) -> bool {
        self.effective_detail_width() == CLOSED_WIDTH
    }

    /// What a pane's maximise control does in the current mode, if it is shown.
    pub fn pane_maximize_action(&self, pane: Pane) -> Option<LayoutAction> {
        if !self.is_pane_open(pane) {
            return None;
        }
        if self.is_dual() {
            Some(LayoutAction::TogglePaneFocus(pane))
        } else {
            Some(LayoutAction::ToggleMaximize)
        }
    }

    pub fn pane_close_action(pane: Pane) -> LayoutAction {
        match pane {
            Pane::Project => LayoutAction::CloseProjectPane,
            Pane::Medium => LayoutAction::CloseMediumPane,
        }
    }

    /// Produce the snapshot that follows `action`.
    pub fn apply(self, action: LayoutAction) -> LayoutState {
        tracing::debug!(?action, "layout transition");
        match action {
            LayoutAction::OpenProject(id) => LayoutState {
                selected_project: Some(id),
                selected_medium: None,
                focus: Focus::Both,
                detail_width_raw: HALF_WIDTH,
            },
            LayoutAction::OpenMedium(medium) => LayoutState {
                selected_medium: Some(medium),
                focus: Focus::Both,
                detail_width_raw: FULL_WIDTH,
                ..self
            },
            LayoutAction::Reset => LayoutState::default(),
            LayoutAction::CloseProjectPane => {
                if self.selected_project.is_none() {
                    self
                } else if self.is_dual() {
                    LayoutState {
                        selected_project: None,
                        focus: Focus::Both,
                        ..self
                    }
                } else {
                    LayoutState::default()
                }
            }
            LayoutAction::CloseMediumPane => {
                if self.selected_medium.is_none() {
                    self
                } else if self.is_dual() {
                    LayoutState {
                        selected_medium: None,
                        focus: Focus::Both,
                        detail_width_raw: HALF_WIDTH,
                        ..self
                    }
                } else {
                    LayoutState::default()
                }
            }
            LayoutAction::ToggleMaximize => {
                let any_open = self.selected_project.is_some() || self.selected_medium.is_some();
                if self.is_dual() || !any_open {
                    return self;
                }
                let detail_width_raw = if self.effective_detail_width() > MAXIMIZED_ABOVE {
                    HALF_WIDTH
                } else {
                    FULL_WIDTH
                };
                LayoutState {
                    detail_width_raw,
                    ..self
                }
            }
            LayoutAction::TogglePaneFocus(pane) => {
                if !self.is_dual() {
                    return self;
                }
                let target = Focus::from(pane);
                let focus = if self.focus == target {
                    Focus::Both
                } else {
                    target
                };
                LayoutState { focus, ..self }
            }
            LayoutAction::SelectRelatedProject(id) => LayoutState {
                selected_project: Some(id),
                ..self
            },
            LayoutAction::SetDetailWidth(raw) => LayoutState {
                detail_width_raw: clamp_width(raw),
                ..self
            },
            LayoutAction::NudgeDetailWidth(delta) => {
                if self.selected_project.is_none() && self.selected_medium.is_none() {
                    return self;
                }
                let detail_width_raw = clamp_width(self.detail_width_raw + delta);
                LayoutState {
                    detail_width_raw,
                    ..self
                }
            }
        }
    }
}

/// `< 15` snaps to 0, `> 85` snaps to 100, anything between passes through.
pub fn snap_detail_width(raw: f32) -> f32 {
    if raw < SNAP_CLOSED_BELOW {
        CLOSED_WIDTH
    } else if raw > SNAP_FULL_ABOVE {
        FULL_WIDTH
    } else {
        raw
    }
}

fn clamp_width(raw: f32) -> f32 {
    if raw.is_nan() {
        return CLOSED_WIDTH;
    }
    raw.clamp(CLOSED_WIDTH, FULL_WIDTH)
}

/// Horizontal extent of the area the list and detail panes share.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    pub left: f32,
    pub width: f32,
}

/// An in-progress drag of the list/detail divider.
///
/// Created when the pointer goes down on the divider and held for as long as
/// the button stays pressed; every pointer event is routed here until the
/// gesture ends via [`ResizeGesture::finish`] or by being dropped.
#[derive(Debug)]
pub struct ResizeGesture {
    container: Container,
    last_width: f32,
}

impl ResizeGesture {
    pub fn begin(container: Container, current_width: f32) -> Self {
        tracing::debug!(
            left = container.left,
            width = container.width,
            "resize gesture started"
        );
        Self {
            container,
            last_width: clamp_width(current_width),
        }
    }

    /// Raw detail width for a pointer at `pointer_x`, clamped into [0, 100].
    pub fn update(&mut self, pointer_x: f32) -> f32 {
        if self.container.width <= 0.0 {
            return self.last_width;
        }
        let relative = pointer_x - self.container.left;
        let width = FULL_WIDTH - relative / self.container.width * FULL_WIDTH;
        self.last_width = clamp_width(width);
        self.last_width
    }

    pub fn last_width(&self) -> f32 {
        self.last_width
    }

    pub fn finish(self) -> f32 {
        self.last_width
    }
}

impl Drop for ResizeGesture {
    fn drop(&mut self) {
        tracing::debug!(width = self.last_width, "resize gesture released");
    }
}
