use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::layout::{Container, LayoutAction, Pane, ResizeGesture};
use crate::model::SortKey;
use crate::tui::constants::{NUDGE_STEP, PAGE_STEP, SCROLL_STEP, STATUS_HELP};
use crate::tui::helpers::rect_contains;

use super::{App, InputMode};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum NormalAction {
    Quit,
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    OpenRow,
    OpenMedium,
    Search,
    CycleFilter { forward: bool },
    Sort(SortKey),
    ClosePane(Pane),
    MaximizePane(Pane),
    Nudge(f32),
    StepRelated { forward: bool },
    ShowLink,
    Reset,
    ToggleInfo,
    ShowHelp,
    Page(i32),
}

impl NormalAction {
    fn from_event(key: &KeyEvent) -> Option<Self> {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Self::Quit);
        }

        match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Self::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Self::SelectPrev),
            KeyCode::Home => Some(Self::SelectFirst),
            KeyCode::End => Some(Self::SelectLast),
            KeyCode::Enter => Some(Self::OpenRow),
            KeyCode::Char('m') => Some(Self::OpenMedium),
            KeyCode::Char('/') => Some(Self::Search),
            KeyCode::Char('f') => Some(Self::CycleFilter { forward: true }),
            KeyCode::Char('F') => Some(Self::CycleFilter { forward: false }),
            KeyCode::Char('1') => Some(Self::Sort(SortKey::StartDate)),
            KeyCode::Char('2') => Some(Self::Sort(SortKey::Title)),
            KeyCode::Char('3') => Some(Self::Sort(SortKey::Topic)),
            KeyCode::Char('4') => Some(Self::Sort(SortKey::Medium)),
            KeyCode::Char('5') => Some(Self::Sort(SortKey::Client)),
            KeyCode::Char('6') => Some(Self::Sort(SortKey::Audience)),
            KeyCode::Char('x') => Some(Self::ClosePane(Pane::Project)),
            KeyCode::Char('X') => Some(Self::ClosePane(Pane::Medium)),
            KeyCode::Char('z') => Some(Self::MaximizePane(Pane::Project)),
            KeyCode::Char('Z') => Some(Self::MaximizePane(Pane::Medium)),
            KeyCode::Char('<') => Some(Self::Nudge(NUDGE_STEP)),
            KeyCode::Char('>') => Some(Self::Nudge(-NUDGE_STEP)),
            KeyCode::Char('o') => Some(Self::StepRelated { forward: true }),
            KeyCode::Char('O') => Some(Self::StepRelated { forward: false }),
            KeyCode::Char('l') => Some(Self::ShowLink),
            KeyCode::Char('r') => Some(Self::Reset),
            KeyCode::Char('i') => Some(Self::ToggleInfo),
            KeyCode::Char('h') | KeyCode::Char('?') => Some(Self::ShowHelp),
            KeyCode::PageDown => Some(Self::Page(i32::from(PAGE_STEP))),
            KeyCode::PageUp => Some(Self::Page(-i32::from(PAGE_STEP))),
            _ => None,
        }
    }
}

impl App {
    pub(crate) fn on_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode(key),
            InputMode::Search => self.handle_search_mode(key),
            InputMode::Help => self.handle_overlay_mode(key, KeyCode::Char('h')),
            InputMode::Info => self.handle_overlay_mode(key, KeyCode::Char('i')),
        }
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) {
        if let Some(action) = NormalAction::from_event(&key) {
            self.execute_normal_action(action);
        }
    }

    fn execute_normal_action(&mut self, action: NormalAction) {
        match action {
            NormalAction::Quit => self.should_quit = true,
            NormalAction::SelectNext => self.select_next(),
            NormalAction::SelectPrev => self.select_prev(),
            NormalAction::SelectFirst => self.select_index(0),
            NormalAction::SelectLast => {
                if let Some(last) = self.visible.len().checked_sub(1) {
                    self.select_index(last);
                }
            }
            NormalAction::OpenRow => self.open_row(self.cursor),
            NormalAction::OpenMedium => self.open_selected_medium(),
            NormalAction::Search => self.begin_search(),
            NormalAction::CycleFilter { forward } => self.cycle_medium_filter(forward),
            NormalAction::Sort(key) => self.sort_by(key),
            NormalAction::ClosePane(pane) => self.close_pane(pane),
            NormalAction::MaximizePane(pane) => self.toggle_pane_maximize(pane),
            NormalAction::Nudge(delta) => self.nudge_detail_width(delta),
            NormalAction::StepRelated { forward } => self.step_related(forward),
            NormalAction::ShowLink => self.surface_link(),
            NormalAction::Reset => self.reset_view(),
            NormalAction::ToggleInfo => self.input_mode = InputMode::Info,
            NormalAction::ShowHelp => {
                self.input_mode = InputMode::Help;
                self.set_status_info(STATUS_HELP);
            }
            NormalAction::Page(delta) => self.scroll_detail(delta),
        }
    }

    fn handle_search_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                self.status = None;
            }
            KeyCode::Esc => self.clear_search(),
            KeyCode::Backspace => {
                self.search.backspace();
                self.update_search();
            }
            KeyCode::Delete => {
                self.search.delete_char();
                self.update_search();
            }
            KeyCode::Char(c) => {
                self.search.insert_char(c);
                self.update_search();
            }
            KeyCode::Left => self.search.move_left(),
            KeyCode::Right => self.search.move_right(),
            KeyCode::Home => self.search.move_home(),
            KeyCode::End => self.search.move_end(),
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_prev(),
            _ => {}
        }
    }

    fn handle_overlay_mode(&mut self, key: KeyEvent, toggle: KeyCode) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) || key.code == toggle {
            self.input_mode = InputMode::Normal;
            self.status = None;
        }
    }

    pub(crate) fn on_mouse(&mut self, event: MouseEvent) {
        if self.resize.is_some() {
            self.handle_resize_mouse(&event);
            return;
        }

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(event.column, event.row),
            MouseEventKind::ScrollDown => {
                self.handle_wheel(event.column, event.row, i32::from(SCROLL_STEP))
            }
            MouseEventKind::ScrollUp => {
                self.handle_wheel(event.column, event.row, -i32::from(SCROLL_STEP))
            }
            _ => {}
        }
    }

    /// While a gesture is live every pointer event belongs to it; release
    /// anywhere ends it.
    fn handle_resize_mouse(&mut self, event: &MouseEvent) {
        match event.kind {
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                if let Some(gesture) = self.resize.as_mut() {
                    let width = gesture.update(f32::from(event.column));
                    self.dispatch(LayoutAction::SetDetailWidth(width));
                }
            }
            MouseEventKind::Up(_) => {
                if let Some(gesture) = self.resize.take() {
                    let width = gesture.finish();
                    self.dispatch(LayoutAction::SetDetailWidth(width));
                }
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        if self.input_mode != InputMode::Normal {
            if self.input_mode == InputMode::Search
                && self.hits.search.is_some_and(|r| rect_contains(r, column, row))
            {
                return;
            }
            self.input_mode = InputMode::Normal;
            self.status = None;
        }

        let hit = |area: Option<Rect>| {
            area.is_some_and(|r| rect_contains(r, column, row))
        };

        if hit(self.hits.resizer) {
            if let Some(main) = self.hits.main {
                let container = Container {
                    left: f32::from(main.x),
                    width: f32::from(main.width),
                };
                self.resize = Some(ResizeGesture::begin(
                    container,
                    self.layout.detail_width_raw(),
                ));
            }
            return;
        }
        if hit(self.hits.brand) {
            self.reset_view();
            return;
        }
        if hit(self.hits.info_badge) {
            self.input_mode = InputMode::Info;
            return;
        }
        if hit(self.hits.search) {
            self.begin_search();
            return;
        }
        if hit(self.hits.filter) {
            self.cycle_medium_filter(true);
            return;
        }
        if let Some(action) = self
            .hits
            .pane_controls
            .iter()
            .find(|(r, _)| rect_contains(*r, column, row))
            .map(|(_, action)| action.clone())
        {
            self.dispatch(action);
            return;
        }
        if let Some(medium) = self
            .hits
            .medium_badge
            .as_ref()
            .filter(|(r, _)| rect_contains(*r, column, row))
            .map(|(_, medium)| medium.clone())
        {
            self.dispatch(LayoutAction::OpenMedium(medium));
            return;
        }
        if let Some(id) = self
            .hits
            .related_rows
            .iter()
            .find(|(r, _)| rect_contains(*r, column, row))
            .map(|(_, id)| id.clone())
        {
            self.dispatch(LayoutAction::SelectRelatedProject(id));
            return;
        }
        if let Some(key) = self
            .hits
            .sort_headers
            .iter()
            .find(|(r, _)| rect_contains(*r, column, row))
            .map(|(_, key)| *key)
        {
            self.sort_by(key);
            return;
        }
        if let Some(body) = self.hits.table_body.filter(|r| rect_contains(*r, column, row)) {
            let row_height = self.hits.row_height.max(1);
            let idx = self.table_state.offset() + usize::from((row - body.y) / row_height);
            self.open_row(idx);
        }
    }

    fn handle_wheel(&mut self, column: u16, row: u16, delta: i32) {
        let inside = |area: Option<Rect>| {
            area.is_some_and(|r| rect_contains(r, column, row))
        };
        if inside(self.hits.project_pane) {
            self.scroll_project(delta);
        } else if inside(self.hits.medium_pane) {
            self.scroll_medium(delta);
        } else if inside(self.hits.table_body) {
            if delta > 0 {
                self.select_next();
            } else {
                self.select_prev();
            }
        }
    }
}
