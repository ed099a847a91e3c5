use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::TableState;

use super::buffer::TextBuffer;
use super::constants::*;
use crate::catalog::Catalog;
use crate::compose::Composition;
use crate::layout::{LayoutAction, LayoutState, Pane, ResizeGesture};
use crate::model::{MediumFilter, Project, SortKey};
use crate::query::QueryParams;

mod input;
mod render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    Search,
    Help,
    Info,
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    kind: StatusKind,
    created_at: Instant,
}

impl StatusMessage {
    fn new<T: Into<String>>(text: T, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    fn style(&self) -> Style {
        match self.kind {
            StatusKind::Info => Style::default().fg(Color::Cyan),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum StatusKind {
    Info,
    Error,
}

/// Screen regions recorded by the last draw, used to route mouse events.
#[derive(Debug, Default, Clone)]
struct HitMap {
    brand: Option<Rect>,
    info_badge: Option<Rect>,
    search: Option<Rect>,
    filter: Option<Rect>,
    main: Option<Rect>,
    resizer: Option<Rect>,
    table_body: Option<Rect>,
    row_height: u16,
    sort_headers: Vec<(Rect, SortKey)>,
    medium_badge: Option<(Rect, String)>,
    pane_controls: Vec<(Rect, LayoutAction)>,
    related_rows: Vec<(Rect, String)>,
    project_pane: Option<Rect>,
    medium_pane: Option<Rect>,
}

pub(crate) struct App {
    catalog: Catalog,
    medium_options: Vec<MediumFilter>,
    params: QueryParams,
    visible: Vec<String>,
    layout: LayoutState,
    cursor: usize,
    table_state: TableState,
    input_mode: InputMode,
    search: TextBuffer,
    status: Option<StatusMessage>,
    project_scroll: u16,
    medium_scroll: u16,
    resize: Option<ResizeGesture>,
    hits: HitMap,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(catalog: Catalog) -> Self {
        let medium_options = catalog.medium_filter_options();
        let mut app = Self {
            catalog,
            medium_options,
            params: QueryParams::default(),
            visible: Vec::new(),
            layout: LayoutState::default(),
            cursor: 0,
            table_state: TableState::default(),
            input_mode: InputMode::Normal,
            search: TextBuffer::new(),
            status: None,
            project_scroll: 0,
            medium_scroll: 0,
            resize: None,
            hits: HitMap::default(),
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Re-run the query, keeping the cursor on the same project when it survives.
    fn refresh(&mut self) {
        let current = self.visible.get(self.cursor).cloned();
        self.visible = self
            .params
            .run(self.catalog.projects())
            .into_iter()
            .map(|project| project.id.clone())
            .collect();

        if self.visible.is_empty() {
            self.cursor = 0;
            self.table_state.select(None);
            return;
        }
        if let Some(idx) = current.and_then(|id| self.visible.iter().position(|v| *v == id)) {
            self.cursor = idx;
        }
        self.cursor = self.cursor.min(self.visible.len() - 1);
        self.table_state.select(Some(self.cursor));
    }

    pub(crate) fn on_tick(&mut self) {
        if let Some(status) = &self.status {
            if status.created_at.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn visible_projects(&self) -> Vec<&Project> {
        self.visible
            .iter()
            .filter_map(|id| self.catalog.project(id))
            .collect()
    }

    fn selected_project(&self) -> Option<&Project> {
        self.layout
            .selected_project()
            .and_then(|id| self.catalog.project(id))
    }

    fn composition(&self) -> Composition {
        let title = self.selected_project().map(|p| p.title.as_str());
        Composition::compose(&self.layout, title)
    }

    /// Feed an action through the layout state machine and reset the scroll of
    /// any pane whose content changed.
    fn dispatch(&mut self, action: LayoutAction) {
        let before_project = self.layout.selected_project().map(str::to_owned);
        let before_medium = self.layout.selected_medium().map(str::to_owned);
        let layout = std::mem::take(&mut self.layout);
        self.layout = layout.apply(action);
        if self.layout.selected_project() != before_project.as_deref() {
            self.project_scroll = 0;
        }
        if self.layout.selected_medium() != before_medium.as_deref() {
            self.medium_scroll = 0;
        }
    }

    fn select_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1).min(self.visible.len() - 1);
        self.table_state.select(Some(self.cursor));
    }

    fn select_prev(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.cursor = self.cursor.saturating_sub(1);
        self.table_state.select(Some(self.cursor));
    }

    fn select_index(&mut self, idx: usize) {
        if idx < self.visible.len() {
            self.cursor = idx;
            self.table_state.select(Some(idx));
        }
    }

    fn open_row(&mut self, idx: usize) {
        let Some(id) = self.visible.get(idx).cloned() else {
            return;
        };
        self.select_index(idx);
        self.dispatch(LayoutAction::OpenProject(id));
    }

    fn open_selected_medium(&mut self) {
        match self.selected_project().map(|p| p.medium.clone()) {
            Some(medium) => self.dispatch(LayoutAction::OpenMedium(medium)),
            None => self.set_status_info(STATUS_NO_PROJECT),
        }
    }

    fn close_pane(&mut self, pane: Pane) {
        if !self.layout.is_pane_open(pane) {
            self.set_status_info(STATUS_PANE_CLOSED);
            return;
        }
        self.dispatch(LayoutState::pane_close_action(pane));
    }

    fn toggle_pane_maximize(&mut self, pane: Pane) {
        match self.layout.pane_maximize_action(pane) {
            Some(action) => self.dispatch(action),
            None => self.set_status_info(STATUS_PANE_CLOSED),
        }
    }

    fn nudge_detail_width(&mut self, delta: f32) {
        if self.layout.selected_project().is_none() && self.layout.selected_medium().is_none() {
            self.set_status_info(STATUS_PANE_CLOSED);
            return;
        }
        self.dispatch(LayoutAction::NudgeDetailWidth(delta));
    }

    /// Step through the open medium's projects, pivoting the project pane.
    fn step_related(&mut self, forward: bool) {
        let Some(medium) = self.layout.selected_medium() else {
            self.set_status_info(STATUS_NO_MEDIUM);
            return;
        };
        let related: Vec<String> = self
            .catalog
            .projects_with_medium(medium)
            .into_iter()
            .map(|p| p.id.clone())
            .collect();
        if related.is_empty() {
            return;
        }
        let len = related.len();
        let current = self
            .layout
            .selected_project()
            .and_then(|id| related.iter().position(|r| r == id));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.dispatch(LayoutAction::SelectRelatedProject(related[next].clone()));
    }

    fn cycle_medium_filter(&mut self, forward: bool) {
        self.params.medium = self.params.medium.cycle(&self.medium_options, forward);
        self.refresh();
        self.set_status_info(format!("Medium filter: {}", self.params.medium.label()));
    }

    fn sort_by(&mut self, key: SortKey) {
        self.params.click_sort(key);
        self.refresh();
        if let Some(spec) = self.params.sort {
            tracing::debug!(key = %spec.key, direction = spec.direction.as_str(), "sort changed");
        }
    }

    fn surface_link(&mut self) {
        let link = match self.selected_project() {
            Some(project) if project.link.trim().is_empty() => None,
            Some(project) => Some(format!("{}: {}", project.title, project.link)),
            None => {
                self.set_status_info(STATUS_NO_PROJECT);
                return;
            }
        };
        match link {
            Some(text) => self.set_status_info(text),
            None => self.set_status_error(STATUS_NO_LINK),
        }
    }

    fn scroll_project(&mut self, delta: i32) {
        self.project_scroll = apply_scroll(self.project_scroll, delta);
    }

    fn scroll_medium(&mut self, delta: i32) {
        self.medium_scroll = apply_scroll(self.medium_scroll, delta);
    }

    /// Keyboard paging targets the project pane when it is on screen.
    fn scroll_detail(&mut self, delta: i32) {
        let panes = self.composition().panes;
        if panes.project_pct > 0 && self.layout.selected_project().is_some() {
            self.scroll_project(delta);
        } else if panes.medium_pct > 0 {
            self.scroll_medium(delta);
        }
    }

    fn begin_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.search.set(self.params.search.clone());
        self.set_status_info(STATUS_SEARCH);
    }

    fn update_search(&mut self) {
        self.params.search = self.search.as_str().to_string();
        self.refresh();
    }

    fn clear_search(&mut self) {
        self.search.clear();
        self.update_search();
        self.input_mode = InputMode::Normal;
        self.status = None;
    }

    fn reset_view(&mut self) {
        self.dispatch(LayoutAction::Reset);
        tracing::debug!("view reset");
    }

    pub(crate) fn set_status_info<T: Into<String>>(&mut self, message: T) {
        let mut text = String::from("› ");
        text.push_str(&message.into());
        self.status = Some(StatusMessage::new(text, StatusKind::Info));
    }

    pub(crate) fn set_status_error<T: Into<String>>(&mut self, message: T) {
        let mut text = String::from("! ");
        text.push_str(&message.into());
        self.status = Some(StatusMessage::new(text, StatusKind::Error));
    }
}

fn apply_scroll(offset: u16, delta: i32) -> u16 {
    let next = i32::from(offset) + delta;
    next.clamp(0, i32::from(u16::MAX)) as u16
}
