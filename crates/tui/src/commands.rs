use std::fmt;
use std::io::Write;

use anyhow::{anyhow, Result};

use crate::catalog::Catalog;
use crate::cli::{CliCommand, ListArgs, ShowArgs};
use crate::config::AppConfig;
use crate::links::{self, LinkCategory};
use crate::model::Project;
use crate::query::QueryParams;

pub fn execute<W: Write>(config: &AppConfig, command: CliCommand, mut writer: W) -> Result<()> {
    match command {
        CliCommand::List(args) => handle_list(config, &args, &mut writer),
        CliCommand::Show(args) => handle_show(config, &args, &mut writer),
        CliCommand::Mediums => handle_mediums(config, &mut writer),
        CliCommand::Tui => Err(anyhow!("launch interactive surfaces directly")),
    }
}

fn handle_list<W: Write>(config: &AppConfig, args: &ListArgs, mut writer: W) -> Result<()> {
    let catalog = config.load_catalog()?;
    let params = QueryParams::from(args);
    let projects = params.run(catalog.projects());
    tracing::debug!(
        search = params.search.as_str(),
        medium = params.medium.label(),
        matches = projects.len(),
        "listing projects"
    );
    ProjectTable::new(&projects).write_to(&mut writer)?;
    writeln!(writer, "{}", EntryCount(projects.len()))?;
    Ok(())
}

fn handle_show<W: Write>(config: &AppConfig, args: &ShowArgs, mut writer: W) -> Result<()> {
    let catalog = config.load_catalog()?;
    match catalog.project(&args.id) {
        Some(project) => ProjectReport { project }.write_to(&mut writer),
        None => {
            writeln!(writer, "Project not found: {}", args.id)?;
            Ok(())
        }
    }
}

fn handle_mediums<W: Write>(config: &AppConfig, mut writer: W) -> Result<()> {
    let catalog = config.load_catalog()?;
    write_mediums(&catalog, &mut writer)
}

fn write_mediums<W: Write>(catalog: &Catalog, mut writer: W) -> Result<()> {
    for (idx, medium) in catalog.mediums().iter().enumerate() {
        if idx > 0 {
            writeln!(writer)?;
        }
        let meta = catalog.medium_or_empty(medium);
        let count = catalog.projects_with_medium(medium).len();
        writeln!(
            writer,
            "{} ({} project{})",
            meta.title,
            count,
            if count == 1 { "" } else { "s" }
        )?;
        if !meta.approach.is_empty() {
            writeln!(writer, "  {}", meta.approach)?;
        }
    }
    Ok(())
}

struct EntryCount(usize);

impl fmt::Display for EntryCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "No matching projects"),
            1 => write!(f, "1 entry"),
            n => write!(f, "{n} entries"),
        }
    }
}

const LIST_HEADERS: [&str; 7] = ["ID", "DATE", "PROJECT", "TOPIC", "MEDIUM", "CLIENT", "REACH"];

struct ProjectTable<'a> {
    rows: Vec<[&'a str; 7]>,
}

impl<'a> ProjectTable<'a> {
    fn new(projects: &[&'a Project]) -> Self {
        let rows = projects
            .iter()
            .map(|p| {
                [
                    p.id.as_str(),
                    p.start_date.as_str(),
                    p.title.as_str(),
                    p.thema.as_str(),
                    p.medium.as_str(),
                    p.client.as_str(),
                    p.total_audience.as_str(),
                ]
            })
            .collect();
        Self { rows }
    }

    fn widths(&self) -> [usize; 7] {
        let mut widths = LIST_HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let widths = self.widths();
        write_row(&mut writer, &LIST_HEADERS, &widths)?;
        for row in &self.rows {
            write_row(&mut writer, row, &widths)?;
        }
        Ok(())
    }
}

fn write_row<W: Write>(mut writer: W, cells: &[&str; 7], widths: &[usize; 7]) -> Result<()> {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(writer, "{}", line.trim_end())?;
    Ok(())
}

struct ProjectReport<'a> {
    project: &'a Project,
}

impl ProjectReport<'_> {
    fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let p = self.project;
        writeln!(writer, "{}", p.title)?;
        if !p.second_title.is_empty() {
            writeln!(writer, "{}", p.second_title)?;
        }
        writeln!(writer)?;

        let facts = [
            ("Medium", p.medium.clone()),
            ("Topic", p.thema.clone()),
            ("Client", p.client.clone()),
            ("Duration", format!("{} -> {}", p.start_date, p.end_date)),
            ("Reach", p.total_audience.clone()),
            ("Link", p.link.clone()),
        ];
        for (label, value) in facts {
            writeln!(writer, "{label:<10}{value}")?;
        }

        let sections = [
            ("Caption", &p.description),
            ("Context", &p.context),
            ("Goal", &p.goal),
            ("Outcome", &p.impact_analysis),
            ("Learnings", &p.learnings),
        ];
        for (heading, body) in sections {
            if body.trim().is_empty() {
                continue;
            }
            writeln!(writer)?;
            writeln!(writer, "{heading}")?;
            writeln!(writer, "  {body}")?;
        }

        if !p.credits.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "Credits")?;
            let role_width = p
                .credits
                .iter()
                .map(|c| c.role.chars().count())
                .max()
                .unwrap_or(0);
            for credit in &p.credits {
                writeln!(writer, "  {:<role_width$}  {}", credit.role, credit.name)?;
            }
        }

        let groups = links::partition(p.related_links());
        for (category, group) in [
            (LinkCategory::LearnMore, &groups.learn_more),
            (LinkCategory::YouMightLove, &groups.you_might_love),
        ] {
            if group.is_empty() {
                continue;
            }
            writeln!(writer)?;
            writeln!(writer, "{}", category.heading())?;
            for link in group {
                writeln!(writer, "  - {} <{}>", links::clean_label(&link.label), link.url)?;
            }
        }
        Ok(())
    }
}
