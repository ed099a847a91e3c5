use std::cmp::min;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, HighlightSpacing, Paragraph, Row, Table, Wrap,
};
use ratatui::Frame;

use crate::compose::{ColumnSet, Composition};
use crate::layout::{Focus, LayoutState, Pane, MAXIMIZED_ABOVE};
use crate::links::{self, LinkCategory};
use crate::model::{Project, SortKey};
use crate::tui::constants::{
    APP_VERSION, BRAND, HINT_NORMAL, HINT_OVERLAY, HINT_SEARCH, INFO_NOTE,
};
use crate::tui::helpers::{
    accent_title, body_style, build_help_lines, centered_rect, display_title, inset_rect,
    section_heading, sort_indicator, BG_ACCENT, BG_BASE, BG_PANEL, FG_ACCENT, FG_MUTED,
};

use super::{App, HitMap, InputMode};

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const COLUMN_SPACING: u16 = 1;
const CONTROL_WIDTH: u16 = 7;

const DATE_WIDTH: u16 = 10;
const TOPIC_WIDTH: u16 = 12;
const MEDIUM_WIDTH: u16 = 17;
const CLIENT_WIDTH: u16 = 18;
const REACH_WIDTH: u16 = 10;
const MIN_TITLE_WIDTH: u16 = 8;

/// One list column as laid out for the current width.
struct ListColumn {
    key: SortKey,
    label: &'static str,
    width: u16,
}

fn list_columns(columns: ColumnSet, available: u16) -> Vec<ListColumn> {
    let mut fixed = Vec::new();
    if columns.date {
        fixed.push((0, SortKey::StartDate, "DATE", DATE_WIDTH));
    }
    if columns.topic {
        fixed.push((2, SortKey::Topic, "TOPIC", TOPIC_WIDTH));
    }
    if columns.medium {
        fixed.push((3, SortKey::Medium, "MEDIUM", MEDIUM_WIDTH));
    }
    if columns.client {
        fixed.push((4, SortKey::Client, "CLIENT", CLIENT_WIDTH));
    }
    if columns.audience {
        fixed.push((5, SortKey::Audience, "REACH", REACH_WIDTH));
    }
    let used: u16 = fixed.iter().map(|(_, _, _, w)| *w).sum::<u16>()
        + COLUMN_SPACING * fixed.len() as u16;
    let title_width = available.saturating_sub(used).max(MIN_TITLE_WIDTH);
    fixed.push((1, SortKey::Title, "PROJECT", title_width));
    fixed.sort_by_key(|(order, _, _, _)| *order);
    fixed
        .into_iter()
        .map(|(_, key, label, width)| ListColumn { key, label, width })
        .collect()
}

impl App {
    pub(crate) fn draw(&mut self, f: &mut Frame<'_>) {
        self.hits = HitMap::default();
        let size = f.size();
        f.render_widget(Clear, size);
        f.render_widget(Block::default().style(Style::default().bg(BG_BASE)), size);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(size);

        let composition = self.composition();
        self.draw_header(f, chunks[0]);
        self.draw_control_bar(f, chunks[1], &composition);
        self.draw_main(f, chunks[2], &composition);
        self.draw_footer(f, chunks[3], &composition);
        self.draw_status_line(f, chunks[4]);

        match self.input_mode {
            InputMode::Help => self.draw_help_overlay(f, size),
            InputMode::Info => self.draw_info_overlay(f, size),
            InputMode::Normal | InputMode::Search => {}
        }
    }

    fn draw_header(&mut self, f: &mut Frame<'_>, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(16)])
            .split(area);

        let brand = format!(" {BRAND} ");
        let brand_width = min(brand.chars().count() as u16, cols[0].width);
        self.hits.brand = Some(Rect {
            width: brand_width,
            ..cols[0]
        });
        let left = Line::from(vec![
            Span::styled(
                brand,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ),
            Span::styled(format!("v{APP_VERSION}"), Style::default().fg(FG_MUTED)),
        ]);
        f.render_widget(
            Paragraph::new(left).style(Style::default().bg(BG_BASE)),
            cols[0],
        );

        let badge_style = if self.input_mode == InputMode::Info {
            Style::default()
                .fg(Color::Black)
                .bg(FG_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(FG_MUTED)
        };
        let badge = " [i] ";
        let badge_width = min(badge.len() as u16, cols[1].width);
        self.hits.info_badge = Some(Rect {
            x: cols[1].right().saturating_sub(badge_width),
            width: badge_width,
            ..cols[1]
        });
        f.render_widget(
            Paragraph::new(Line::from(vec![Span::styled(badge, badge_style)]))
                .alignment(Alignment::Right)
                .style(Style::default().bg(BG_BASE)),
            cols[1],
        );
    }

    fn draw_control_bar(&mut self, f: &mut Frame<'_>, area: Rect, composition: &Composition) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(10),
                Constraint::Length(30),
                Constraint::Length(24),
            ])
            .split(inner);

        let path = Line::from(vec![
            Span::styled(
                "PATH: ",
                Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                composition.status.to_uppercase(),
                Style::default().fg(Color::Gray),
            ),
        ]);
        f.render_widget(Paragraph::new(path), cols[0]);

        self.hits.search = Some(cols[1]);
        let searching = self.input_mode == InputMode::Search;
        let search_text = if searching {
            self.search.as_str().to_string()
        } else {
            self.params.search.clone()
        };
        let search_line = if search_text.is_empty() && !searching {
            Line::from(vec![
                Span::styled("⌕ ", Style::default().fg(FG_MUTED)),
                Span::styled("SEARCH", Style::default().fg(Color::DarkGray)),
            ])
        } else {
            let style = if searching {
                Style::default().fg(Color::White).bg(BG_ACCENT)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(vec![
                Span::styled("⌕ ", Style::default().fg(FG_ACCENT)),
                Span::styled(search_text, style),
            ])
        };
        f.render_widget(Paragraph::new(search_line), cols[1]);
        if searching {
            let cursor_x = cols[1].x + 2 + self.search.cursor_column() as u16;
            if cursor_x < cols[1].right() {
                f.set_cursor(cursor_x, cols[1].y);
            }
        }

        self.hits.filter = Some(cols[2]);
        let filter = Line::from(vec![
            Span::styled("◆ ", Style::default().fg(FG_MUTED)),
            Span::styled(
                self.params.medium.label().to_uppercase(),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(" ▾", Style::default().fg(FG_MUTED)),
        ]);
        f.render_widget(Paragraph::new(filter), cols[2]);
    }

    fn draw_main(&mut self, f: &mut Frame<'_>, area: Rect, composition: &Composition) {
        self.hits.main = Some(area);
        let total = area.width;
        let (table_w, resizer_w) = if composition.detail_pct <= 0.0 {
            (total, 0)
        } else if composition.table_pct <= 0.0 {
            (0, 0)
        } else {
            let resizer_w = u16::from(composition.show_resizer);
            let share = f32::from(total.saturating_sub(resizer_w)) * composition.table_pct / 100.0;
            (share.round() as u16, resizer_w)
        };
        let detail_w = total.saturating_sub(table_w + resizer_w);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(table_w),
                Constraint::Length(resizer_w),
                Constraint::Length(detail_w),
            ])
            .split(area);

        if table_w > 0 {
            self.draw_list(f, cols[0], composition);
        }
        if resizer_w > 0 {
            self.draw_resizer(f, cols[1]);
        }
        if detail_w > 0 {
            self.draw_detail(f, cols[2], composition);
        }
    }

    fn draw_list(&mut self, f: &mut Frame<'_>, area: Rect, composition: &Composition) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(area);

        if self.visible.is_empty() {
            f.render_widget(block, area);
            let lines = vec![
                Line::from(vec![Span::styled(
                    "No entries match",
                    Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD),
                )]),
                Line::default(),
                Line::from(vec![Span::styled(
                    "Press '/' then Esc to clear the search, or 'f' to change the medium.",
                    Style::default().fg(Color::Gray),
                )]),
            ];
            let height = min(lines.len() as u16 + 2, inner.height);
            let content_area = centered_rect(inner.width, height, inner);
            f.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: true })
                    .alignment(Alignment::Center),
                content_area,
            );
            return;
        }

        let symbol_width = HIGHLIGHT_SYMBOL.chars().count() as u16;
        let columns = list_columns(
            composition.columns,
            inner.width.saturating_sub(symbol_width),
        );
        let topic_inline = composition.columns.topic_inline();
        let row_height: u16 = if topic_inline { 2 } else { 1 };

        let mut x = inner.x + symbol_width;
        for column in &columns {
            let width = min(column.width, inner.right().saturating_sub(x));
            if width > 0 {
                self.hits
                    .sort_headers
                    .push((Rect::new(x, inner.y, width, 1), column.key));
            }
            x = x.saturating_add(column.width + COLUMN_SPACING);
        }
        self.hits.table_body = Some(Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1),
            ..inner
        });
        self.hits.row_height = row_height;

        let sort = self.params.sort;
        let header = Row::new(
            columns
                .iter()
                .map(|c| Cell::from(format!("{}{}", c.label, sort_indicator(sort, c.key))))
                .collect::<Vec<_>>(),
        )
        .style(Style::default().fg(FG_MUTED).add_modifier(Modifier::BOLD));

        let projects = self.visible_projects();
        let open_id = self.layout.selected_project();
        let title_style = body_style(composition.row_title);
        let rows: Vec<Row> = projects
            .iter()
            .map(|project| {
                let is_open = open_id == Some(project.id.as_str());
                let cells = columns.iter().map(|column| {
                    list_cell(project, column.key, is_open, topic_inline, title_style)
                });
                Row::new(cells.collect::<Vec<_>>()).height(row_height)
            })
            .collect();

        let widths: Vec<Constraint> = columns.iter().map(|c| Constraint::Length(c.width)).collect();
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(COLUMN_SPACING)
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_style(Style::default().bg(BG_ACCENT))
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn draw_resizer(&mut self, f: &mut Frame<'_>, area: Rect) {
        self.hits.resizer = Some(area);
        let style = if self.resize.is_some() {
            Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let lines: Vec<Line> = (0..area.height)
            .map(|row| {
                let glyph = if row == area.height / 2 { "┋" } else { "│" };
                Line::from(vec![Span::styled(glyph, style)])
            })
            .collect();
        f.render_widget(Paragraph::new(lines).style(Style::default().bg(BG_BASE)), area);
    }

    fn draw_detail(&mut self, f: &mut Frame<'_>, area: Rect, composition: &Composition) {
        let panes = composition.panes;
        let show_project = panes.project_pct > 0 && self.layout.selected_project().is_some();
        let show_medium = panes.medium_pct > 0 && self.layout.selected_medium().is_some();

        let (project_area, medium_area) = match (show_project, show_medium) {
            (true, true) => {
                let halves = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Percentage(panes.project_pct),
                        Constraint::Percentage(panes.medium_pct),
                    ])
                    .split(area);
                (Some(halves[0]), Some(halves[1]))
            }
            (true, false) => (Some(area), None),
            (false, true) => (None, Some(area)),
            (false, false) => (None, None),
        };

        if let Some(pane_area) = project_area {
            self.draw_project_pane(f, pane_area, composition);
        }
        if let Some(pane_area) = medium_area {
            self.draw_medium_pane(f, pane_area, composition);
        }
    }

    /// Draws the pane frame and its maximize/close controls; returns the inner area.
    fn draw_pane_frame(&mut self, f: &mut Frame<'_>, area: Rect, pane: Pane) -> Rect {
        let label = match pane {
            Pane::Project => " PROJECT ",
            Pane::Medium => " MEDIUM ",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title(label))
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if inner.width <= CONTROL_WIDTH || inner.height == 0 {
            return inner;
        }
        let controls = Rect::new(inner.right() - CONTROL_WIDTH, inner.y, CONTROL_WIDTH, 1);
        let restore = is_restore_control(&self.layout, pane);
        let maximize_label = if restore { "[-]" } else { "[+]" };
        let control_style = Style::default().fg(Color::Gray).bg(BG_ACCENT);
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(maximize_label, control_style),
                Span::raw(" "),
                Span::styled("[x]", control_style),
            ])),
            controls,
        );
        if let Some(action) = self.layout.pane_maximize_action(pane) {
            self.hits
                .pane_controls
                .push((Rect::new(controls.x, controls.y, 3, 1), action));
        }
        self.hits.pane_controls.push((
            Rect::new(controls.x + 4, controls.y, 3, 1),
            LayoutState::pane_close_action(pane),
        ));
        inner
    }

    fn draw_project_pane(&mut self, f: &mut Frame<'_>, area: Rect, composition: &Composition) {
        self.hits.project_pane = Some(area);
        let inner = self.draw_pane_frame(f, area, Pane::Project);
        let Some(project) = self.selected_project().cloned() else {
            f.render_widget(
                Paragraph::new("Project unavailable").style(Style::default().fg(FG_MUTED)),
                inset_rect(inner, 1),
            );
            return;
        };
        if inner.height < 2 {
            return;
        }
        let content = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };

        let badge_text = format!("( {} )", project.medium.to_uppercase());
        let badge_width = min(
            badge_text.chars().count() as u16,
            content.width.saturating_sub(CONTROL_WIDTH + 1),
        );
        let badge_area = Rect::new(content.x, content.y, badge_width, 1);
        self.hits.medium_badge = Some((badge_area, project.medium.clone()));
        f.render_widget(
            Paragraph::new(Span::styled(
                badge_text,
                Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD),
            )),
            badge_area,
        );

        let mut lines: Vec<Line> = vec![
            Line::default(),
            display_title(&project.title, composition.detail_title),
            Line::from(vec![Span::styled(
                project.second_title.clone(),
                body_style(composition.detail_subtitle).add_modifier(Modifier::ITALIC),
            )]),
            Line::default(),
        ];
        lines.extend(project_body_lines(&project));

        let body = Rect {
            y: content.y + 1,
            height: content.height.saturating_sub(1),
            ..content
        };
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        self.project_scroll = clamp_scroll(self.project_scroll, &paragraph, body);
        f.render_widget(paragraph.scroll((self.project_scroll, 0)), body);
    }

    fn draw_medium_pane(&mut self, f: &mut Frame<'_>, area: Rect, composition: &Composition) {
        self.hits.medium_pane = Some(area);
        let inner = self.draw_pane_frame(f, area, Pane::Medium);
        let Some(medium) = self.layout.selected_medium().map(str::to_owned) else {
            return;
        };
        if inner.height < 2 {
            return;
        }
        let content = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            y: inner.y + 1,
            height: inner.height - 1,
        };

        let meta = self.catalog.medium_or_empty(&medium);
        let related: Vec<(String, String, String)> = self
            .catalog
            .projects_with_medium(&medium)
            .into_iter()
            .map(|p| (p.id.clone(), p.title.clone(), p.thema.clone()))
            .collect();

        let table_height = min(related.len() as u16 + 3, content.height / 2);
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(table_height)])
            .split(content);

        let mut lines = vec![
            display_title(&meta.title, composition.detail_title),
            Line::default(),
        ];
        if !meta.description.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                meta.description.clone(),
                body_style(composition.detail_subtitle).add_modifier(Modifier::ITALIC),
            )]));
            lines.push(Line::default());
        }
        lines.push(section_heading("Approach"));
        lines.push(Line::from(meta.approach.clone()));
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        self.medium_scroll = clamp_scroll(self.medium_scroll, &paragraph, sections[0]);
        f.render_widget(paragraph.scroll((self.medium_scroll, 0)), sections[0]);

        if sections[1].height < 3 {
            return;
        }
        let heading_area = Rect {
            height: 1,
            ..sections[1]
        };
        f.render_widget(
            Paragraph::new(section_heading(&format!(
                "Related Projects ({})",
                related.len()
            ))),
            heading_area,
        );
        let table_area = Rect {
            y: sections[1].y + 1,
            height: sections[1].height - 1,
            ..sections[1]
        };
        let open_id = self.layout.selected_project().map(str::to_owned);
        let first_row_y = table_area.y + 1;
        for (idx, (id, _, _)) in related.iter().enumerate() {
            let y = first_row_y + idx as u16;
            if y >= table_area.bottom() {
                break;
            }
            self.hits
                .related_rows
                .push((Rect::new(table_area.x, y, table_area.width, 1), id.clone()));
        }
        let rows: Vec<Row> = related
            .iter()
            .map(|(id, title, topic)| {
                let style = if open_id.as_deref() == Some(id.as_str()) {
                    Style::default().fg(FG_ACCENT).bg(BG_ACCENT)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Row::new(vec![Cell::from(title.clone()), Cell::from(topic.clone())]).style(style)
            })
            .collect();
        let table = Table::new(rows, [Constraint::Percentage(60), Constraint::Percentage(40)])
            .header(
                Row::new(vec!["PROJECT", "TOPIC"])
                    .style(Style::default().fg(FG_MUTED).add_modifier(Modifier::BOLD)),
            )
            .column_spacing(COLUMN_SPACING);
        f.render_widget(table, table_area);
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect, composition: &Composition) {
        let style = Style::default()
            .fg(Color::Black)
            .bg(FG_ACCENT)
            .add_modifier(Modifier::BOLD);
        let left = Line::from(vec![
            Span::raw(" ● VAULT_READY   "),
            Span::raw(format!("ENTRIES: {}", self.visible.len())),
        ]);
        f.render_widget(Paragraph::new(left).style(style), area);
        f.render_widget(
            Paragraph::new(format!("{} ", composition.footer_mode))
                .alignment(Alignment::Right)
                .style(style),
            area,
        );
    }

    fn draw_status_line(&self, f: &mut Frame<'_>, area: Rect) {
        let line = match &self.status {
            Some(status) => Line::from(vec![Span::styled(status.text.clone(), status.style())]),
            None => {
                let hint = match self.input_mode {
                    InputMode::Normal => HINT_NORMAL,
                    InputMode::Search => HINT_SEARCH,
                    InputMode::Help | InputMode::Info => HINT_OVERLAY,
                };
                Line::from(vec![Span::styled(hint, Style::default().fg(Color::DarkGray))])
            }
        };
        f.render_widget(Paragraph::new(line), area);
    }

    fn draw_help_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = build_help_lines();
        let width = min(area.width.saturating_sub(10), 80);
        let height = min(lines.len() as u16 + 4, area.height.saturating_sub(2)).max(10);
        let popup_area = centered_rect(width, height, area);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("Keyboard Reference"))
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let help_lines: Vec<Line> = lines
            .into_iter()
            .map(|(combo, desc)| {
                Line::from(vec![
                    Span::styled(format!("{combo:<16}"), Style::default().fg(Color::Cyan)),
                    Span::raw(desc),
                ])
            })
            .collect();

        if inner.width < 3 || inner.height < 3 {
            return;
        }
        f.render_widget(
            Paragraph::new(help_lines).wrap(Wrap { trim: true }),
            inset_rect(inner, 1),
        );
    }

    fn draw_info_overlay(&self, f: &mut Frame<'_>, area: Rect) {
        let width = min(area.width, 44);
        let height = min(area.height, 8);
        let popup_area = Rect::new(area.right().saturating_sub(width), area.y + 1, width, height);
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title("System_Note"))
            .border_style(Style::default().fg(FG_ACCENT))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);
        f.render_widget(
            Paragraph::new(INFO_NOTE)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::Gray)),
            inset_rect(inner, 1),
        );
    }
}

/// Largest offset that still fills `area`, counted in wrapped rows.
fn clamp_scroll(offset: u16, paragraph: &Paragraph<'_>, area: Rect) -> u16 {
    let rows = paragraph.line_count(area.width);
    let max = rows.saturating_sub(usize::from(area.height));
    offset.min(u16::try_from(max).unwrap_or(u16::MAX))
}

/// `[-]` shows while the control would restore rather than maximize.
fn is_restore_control(layout: &LayoutState, pane: Pane) -> bool {
    if layout.is_dual() {
        layout.focus() == Focus::from(pane)
    } else {
        layout.effective_detail_width() > MAXIMIZED_ABOVE
    }
}

fn list_cell(
    project: &Project,
    key: SortKey,
    is_open: bool,
    topic_inline: bool,
    title_style: Style,
) -> Cell<'static> {
    let muted = Style::default().fg(FG_MUTED);
    match key {
        SortKey::Title => {
            let style = if is_open {
                title_style.fg(FG_ACCENT)
            } else {
                title_style
            };
            let mut lines = vec![Line::from(Span::styled(project.title.clone(), style))];
            if topic_inline {
                lines.push(Line::from(Span::styled(
                    format!("  # {}", project.thema.to_uppercase()),
                    muted,
                )));
            }
            Cell::from(lines)
        }
        SortKey::Medium => {
            let style = if is_open {
                Style::default().fg(FG_ACCENT)
            } else {
                Style::default().fg(Color::Gray)
            };
            Cell::from(Span::styled(format!("({})", project.medium), style))
        }
        SortKey::Topic => Cell::from(Span::styled(project.thema.to_uppercase(), muted)),
        other => Cell::from(Span::styled(project.sort_text(other).to_string(), muted)),
    }
}

fn project_body_lines(project: &Project) -> Vec<Line<'static>> {
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let prose = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("TOPIC     ", Style::default().fg(FG_MUTED)),
            Span::styled(project.thema.to_uppercase(), value),
        ]),
        Line::from(vec![
            Span::styled("CLIENT    ", Style::default().fg(FG_MUTED)),
            Span::styled(project.client.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("DURATION  ", Style::default().fg(FG_MUTED)),
            Span::styled(project.start_date.clone(), value),
            Span::styled(" → ", Style::default().fg(FG_ACCENT)),
            Span::styled(project.end_date.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("REACH     ", Style::default().fg(FG_MUTED)),
            Span::styled(project.total_audience.clone(), value),
        ]),
        Line::default(),
        section_heading("Caption"),
        Line::from(Span::styled(project.description.clone(), prose)),
        Line::default(),
    ];

    if !project.link.trim().is_empty() {
        lines.push(Line::from(vec![
            Span::styled(
                " ↗ VIEW CONTENT ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {} (l)", project.link), Style::default().fg(FG_MUTED)),
        ]));
        lines.push(Line::default());
    }

    for (heading, body) in [("Context", &project.context), ("Outcome", &project.impact_analysis)] {
        lines.push(section_heading(heading));
        lines.push(Line::from(Span::styled(body.clone(), prose)));
        lines.push(Line::default());
    }

    if !project.credits.is_empty() {
        lines.push(section_heading("Credits"));
        let role_width = project
            .credits
            .iter()
            .map(|c| c.role.chars().count())
            .max()
            .unwrap_or(0);
        for credit in &project.credits {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<role_width$}  ", credit.role.to_uppercase()),
                    Style::default().fg(FG_MUTED),
                ),
                Span::styled(credit.name.clone(), Style::default().fg(Color::Gray)),
            ]));
        }
        lines.push(Line::default());
    }

    let groups = links::partition(project.related_links());
    if !groups.is_empty() {
        for (category, group) in [
            (LinkCategory::LearnMore, &groups.learn_more),
            (LinkCategory::YouMightLove, &groups.you_might_love),
        ] {
            lines.push(section_heading(category.heading()));
            for link in group.iter() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {} ", links::clean_label(&link.label).to_uppercase()),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(format!("↗ {}", link.url), Style::default().fg(FG_MUTED)),
                ]));
            }
            lines.push(Line::default());
        }
    }

    lines
}
