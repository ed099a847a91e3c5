//! Width-driven presentation decisions: which list columns exist, how large
//! titles render, how the detail area splits, and the status/footer labels.

use crate::layout::{Focus, LayoutState, CLOSED_WIDTH, FULL_WIDTH};

const DATE_COLUMN_ABOVE: f32 = 20.0;
const CLIENT_COLUMN_ABOVE: f32 = 40.0;
const MEDIUM_COLUMN_ABOVE: f32 = 50.0;
const TOPIC_COLUMN_ABOVE: f32 = 60.0;
const AUDIENCE_COLUMN_ABOVE: f32 = 80.0;

const LARGE_SCALE_ABOVE: f32 = 70.0;
const MEDIUM_SCALE_ABOVE: f32 = 40.0;

/// Optional list columns. The title column is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSet {
    pub date: bool,
    pub client: bool,
    pub medium: bool,
    pub topic: bool,
    pub audience: bool,
}

impl ColumnSet {
    pub fn for_table_width(table_pct: f32) -> Self {
        Self {
            date: table_pct > DATE_COLUMN_ABOVE,
            client: table_pct > CLIENT_COLUMN_ABOVE,
            medium: table_pct > MEDIUM_COLUMN_ABOVE,
            topic: table_pct > TOPIC_COLUMN_ABOVE,
            audience: table_pct > AUDIENCE_COLUMN_ABOVE,
        }
    }

    /// The topic moves under the title when its own column is gone.
    pub fn topic_inline(&self) -> bool {
        !self.topic
    }
}

/// Scale for list row titles and detail subtitles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyScale {
    Large,
    Medium,
    Small,
}

impl BodyScale {
    pub fn for_width(pct: f32) -> Self {
        if pct > LARGE_SCALE_ABOVE {
            BodyScale::Large
        } else if pct > MEDIUM_SCALE_ABOVE {
            BodyScale::Medium
        } else {
            BodyScale::Small
        }
    }
}

/// Scale for the large titles at the top of a detail pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayScale {
    Poster,
    Headline,
    Standard,
}

impl DisplayScale {
    pub fn for_width(pct: f32) -> Self {
        if pct > LARGE_SCALE_ABOVE {
            DisplayScale::Poster
        } else if pct > MEDIUM_SCALE_ABOVE {
            DisplayScale::Headline
        } else {
            DisplayScale::Standard
        }
    }
}

/// Share of the detail area given to each pane, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailPanes {
    pub project_pct: u16,
    pub medium_pct: u16,
}

impl DetailPanes {
    pub fn for_state(state: &LayoutState) -> Self {
        let project_open = state.selected_project().is_some();
        let medium_open = state.selected_medium().is_some();
        if state.is_dual() {
            return match state.focus() {
                Focus::Both => Self {
                    project_pct: 50,
                    medium_pct: 50,
                },
                Focus::Project => Self {
                    project_pct: 100,
                    medium_pct: 0,
                },
                Focus::Medium => Self {
                    project_pct: 0,
                    medium_pct: 100,
                },
            };
        }
        Self {
            project_pct: if project_open { 100 } else { 0 },
            medium_pct: if medium_open { 100 } else { 0 },
        }
    }
}

/// Everything the renderer needs that is derived from the layout snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub columns: ColumnSet,
    pub row_title: BodyScale,
    pub detail_title: DisplayScale,
    pub detail_subtitle: BodyScale,
    pub panes: DetailPanes,
    pub status: String,
    pub footer_mode: String,
    pub show_resizer: bool,
    pub table_pct: f32,
    pub detail_pct: f32,
}

impl Composition {
    /// `project_title` is the title of the selected project, when it resolves.
    pub fn compose(state: &LayoutState, project_title: Option<&str>) -> Self {
        let table_pct = state.table_width();
        let detail_pct = state.effective_detail_width();
        let split_evenly = state.is_dual() && state.focus() == Focus::Both;
        Self {
            columns: ColumnSet::for_table_width(table_pct),
            row_title: BodyScale::for_width(table_pct),
            detail_title: if split_evenly {
                DisplayScale::Standard
            } else {
                DisplayScale::for_width(detail_pct)
            },
            detail_subtitle: if split_evenly {
                BodyScale::Small
            } else {
                BodyScale::for_width(detail_pct)
            },
            panes: DetailPanes::for_state(state),
            status: status_label(state, project_title),
            footer_mode: footer_mode(state),
            show_resizer: show_resizer(state),
            table_pct,
            detail_pct,
        }
    }
}

pub fn status_label(state: &LayoutState, project_title: Option<&str>) -> String {
    if state.is_table_only() {
        return String::from("ALL");
    }
    match (state.selected_medium(), project_title) {
        (Some(medium), _) if state.is_dual() => {
            format!("{} / {}", project_title.unwrap_or_default(), medium)
        }
        (Some(medium), _) => format!("MEDIUM: {medium}"),
        (None, Some(title)) => title.to_string(),
        (None, None) => String::from("NONE"),
    }
}

pub fn footer_mode(state: &LayoutState) -> String {
    let width = state.effective_detail_width();
    if width == FULL_WIDTH {
        if state.is_dual() {
            format!("DUAL_{}", state.focus())
        } else {
            String::from("SOLO_VIEW")
        }
    } else if width > CLOSED_WIDTH {
        String::from("EXPLORATION")
    } else {
        String::from("INDEX")
    }
}

/// The divider is only grabbable while both sides have width.
pub fn show_resizer(state: &LayoutState) -> bool {
    state.table_width() > CLOSED_WIDTH && state.effective_detail_width() > CLOSED_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutAction, Pane};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn with_width(raw: f32) -> LayoutState {
        LayoutState::default()
            .apply(LayoutAction::OpenProject("001".into()))
            .apply(LayoutAction::SetDetailWidth(raw))
    }

    #[rstest]
    #[case(100.0, [true, true, true, true, true])]
    #[case(80.0, [true, true, true, true, false])]
    #[case(60.0, [true, true, true, false, false])]
    #[case(50.0, [true, true, false, false, false])]
    #[case(40.0, [true, false, false, false, false])]
    #[case(20.0, [false, false, false, false, false])]
    #[case(0.0, [false, false, false, false, false])]
    fn column_thresholds(#[case] table_pct: f32, #[case] expected: [bool; 5]) {
        let cols = ColumnSet::for_table_width(table_pct);
        assert_eq!(
            [cols.date, cols.client, cols.medium, cols.topic, cols.audience],
            expected
        );
        assert_eq!(cols.topic_inline(), !expected[3]);
    }

    #[rstest]
    #[case(100.0, BodyScale::Large, DisplayScale::Poster)]
    #[case(70.1, BodyScale::Large, DisplayScale::Poster)]
    #[case(70.0, BodyScale::Medium, DisplayScale::Headline)]
    #[case(40.1, BodyScale::Medium, DisplayScale::Headline)]
    #[case(40.0, BodyScale::Small, DisplayScale::Standard)]
    #[case(0.0, BodyScale::Small, DisplayScale::Standard)]
    fn scale_tiers(#[case] pct: f32, #[case] body: BodyScale, #[case] display: DisplayScale) {
        assert_eq!(BodyScale::for_width(pct), body);
        assert_eq!(DisplayScale::for_width(pct), display);
    }

    #[test]
    fn status_labels_follow_selection() {
        let reset = LayoutState::default();
        assert_eq!(status_label(&reset, None), "ALL");

        let project = with_width(50.0);
        assert_eq!(status_label(&project, Some("NEON VELOCITY")), "NEON VELOCITY");
        assert_eq!(status_label(&project, None), "NONE");

        let dual = project.apply(LayoutAction::OpenMedium("Motion Graphics".into()));
        assert_eq!(
            status_label(&dual, Some("NEON VELOCITY")),
            "NEON VELOCITY / Motion Graphics"
        );

        let medium = dual.apply(LayoutAction::CloseProjectPane);
        assert_eq!(status_label(&medium, None), "MEDIUM: Motion Graphics");
    }

    #[test]
    fn collapsed_detail_reports_all_even_with_selection() {
        let state = with_width(10.0);
        assert_eq!(status_label(&state, Some("NEON VELOCITY")), "ALL");
    }

    #[rstest]
    #[case(0.0, "INDEX")]
    #[case(14.0, "INDEX")]
    #[case(50.0, "EXPLORATION")]
    #[case(86.0, "SOLO_VIEW")]
    fn footer_modes_for_solo(#[case] raw: f32, #[case] expected: &str) {
        assert_eq!(footer_mode(&with_width(raw)), expected);
    }

    #[test]
    fn footer_mode_reports_dual_focus() {
        let dual = with_width(50.0).apply(LayoutAction::OpenMedium("Print Media".into()));
        assert_eq!(footer_mode(&dual), "DUAL_BOTH");
        let focused = dual.apply(LayoutAction::TogglePaneFocus(Pane::Medium));
        assert_eq!(footer_mode(&focused), "DUAL_MEDIUM");
        let narrowed = focused.apply(LayoutAction::SetDetailWidth(60.0));
        assert_eq!(footer_mode(&narrowed), "EXPLORATION");
    }

    #[test]
    fn detail_panes_split_by_focus() {
        let solo = with_width(50.0);
        assert_eq!(
            DetailPanes::for_state(&solo),
            DetailPanes {
                project_pct: 100,
                medium_pct: 0
            }
        );
        let dual = solo.apply(LayoutAction::OpenMedium("Print Media".into()));
        assert_eq!(
            DetailPanes::for_state(&dual),
            DetailPanes {
                project_pct: 50,
                medium_pct: 50
            }
        );
        let project = dual.apply(LayoutAction::TogglePaneFocus(Pane::Project));
        assert_eq!(
            DetailPanes::for_state(&project),
            DetailPanes {
                project_pct: 100,
                medium_pct: 0
            }
        );
    }

    #[test]
    fn even_split_uses_smallest_detail_titles() {
        let dual = with_width(50.0).apply(LayoutAction::OpenMedium("Print Media".into()));
        let composed = Composition::compose(&dual, Some("NEON VELOCITY"));
        assert_eq!(composed.detail_title, DisplayScale::Standard);
        assert_eq!(composed.detail_subtitle, BodyScale::Small);

        let focused = dual.apply(LayoutAction::TogglePaneFocus(Pane::Project));
        let composed = Composition::compose(&focused, Some("NEON VELOCITY"));
        assert_eq!(composed.detail_title, DisplayScale::Poster);
        assert!(!composed.show_resizer);
    }

    #[test]
    fn resizer_needs_both_sides() {
        assert!(!show_resizer(&LayoutState::default()));
        assert!(show_resizer(&with_width(50.0)));
        assert!(!show_resizer(&with_width(90.0)));
    }
}
