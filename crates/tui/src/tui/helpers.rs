use std::cmp::min;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::compose::{BodyScale, DisplayScale};
use crate::model::{SortDirection, SortKey, SortSpec};

pub const BG_BASE: Color = Color::Rgb(8, 8, 10);
pub const BG_PANEL: Color = Color::Rgb(18, 18, 22);
pub const BG_ACCENT: Color = Color::Rgb(40, 28, 18);
pub const FG_ACCENT: Color = Color::Rgb(255, 106, 0);
pub const FG_MUTED: Color = Color::Rgb(113, 113, 122);

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = min(width, area.width);
    let h = min(height, area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

pub fn inset_rect(area: Rect, padding: u16) -> Rect {
    if area.width == 0 || area.height == 0 {
        return area;
    }
    let px = padding.min(area.width / 2);
    let py = padding.min(area.height / 2);
    Rect {
        x: area.x + px,
        y: area.y + py,
        width: area.width.saturating_sub(px * 2),
        height: area.height.saturating_sub(py * 2),
    }
}

pub fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

pub fn accent_title(text: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text.to_owned(),
        Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD),
    )])
}

pub fn section_heading(text: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text.to_uppercase(),
        Style::default().fg(FG_MUTED).add_modifier(Modifier::BOLD),
    )])
}

/// Terminal stand-in for the display type scale: posters are letter-spaced.
pub fn display_title(text: &str, scale: DisplayScale) -> Line<'static> {
    let base = Style::default().fg(FG_ACCENT);
    let (content, style) = match scale {
        DisplayScale::Poster => (
            letter_spaced(text),
            base.add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ),
        DisplayScale::Headline => (text.to_owned(), base.add_modifier(Modifier::BOLD)),
        DisplayScale::Standard => (text.to_owned(), base),
    };
    Line::from(vec![Span::styled(content, style)])
}

pub fn body_style(scale: BodyScale) -> Style {
    match scale {
        BodyScale::Large => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        BodyScale::Medium => Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        BodyScale::Small => Style::default().fg(Color::Gray),
    }
}

pub fn letter_spaced(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (idx, ch) in text.chars().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

pub fn sort_indicator(current: Option<SortSpec>, key: SortKey) -> &'static str {
    match current {
        Some(spec) if spec.key == key => match spec.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => "",
    }
}

pub fn build_help_lines() -> Vec<(&'static str, &'static str)> {
    vec![
        ("j / k or ↓ / ↑", "Move the row cursor"),
        ("Home / End", "Jump to first / last row"),
        ("Enter", "Open the project under the cursor"),
        ("m", "Open the open project's medium (dual view)"),
        ("/", "Search titles, clients and writeups"),
        ("f / F", "Next / previous medium filter"),
        ("1-6", "Sort by Date, Project, Topic, Medium, Client, Reach"),
        ("x / X", "Close the project / medium pane"),
        ("z / Z", "Maximize or restore the project / medium pane"),
        ("< / >", "Widen / narrow the detail area"),
        ("o / O", "Next / previous related project in the medium pane"),
        ("l", "Show the open project's external link"),
        ("PgUp / PgDn", "Scroll the detail pane"),
        ("r", "Reset to the full list"),
        ("i", "Toggle the system note"),
        ("h", "Toggle this help overlay"),
        ("Mouse", "Click rows, headers and badges; drag the divider"),
        ("q / Ctrl+C", "Quit"),
    ]
}
