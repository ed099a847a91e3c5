use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Label shown for the medium filter option that matches every project.
pub const ALL_MEDIUM_LABEL: &str = "ALL MEDIUM";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    pub role: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub second_title: String,
    #[serde(default)]
    pub thema: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub total_audience: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub impact_analysis: String,
    #[serde(default)]
    pub learnings: String,
    #[serde(default)]
    pub credits: Vec<Credit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_links: Option<Vec<RelatedLink>>,
}

impl Project {
    /// Text value used when this project is ordered by `key`.
    pub fn sort_text(&self, key: SortKey) -> &str {
        match key {
            SortKey::StartDate => &self.start_date,
            SortKey::EndDate => &self.end_date,
            SortKey::Title => &self.title,
            SortKey::SecondTitle => &self.second_title,
            SortKey::Topic => &self.thema,
            SortKey::Medium => &self.medium,
            SortKey::Client => &self.client,
            SortKey::Audience => &self.total_audience,
        }
    }

    /// Every field the free-text search looks at, in match order.
    pub fn searchable_fields(&self) -> [&str; 10] {
        [
            &self.title,
            &self.second_title,
            &self.client,
            &self.description,
            &self.thema,
            &self.medium,
            &self.context,
            &self.goal,
            &self.impact_analysis,
            &self.learnings,
        ]
    }

    pub fn related_links(&self) -> &[RelatedLink] {
        self.related_links.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediumMeta {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub approach: String,
}

impl MediumMeta {
    /// Placeholder for a medium without catalog metadata: titled, nothing else.
    pub fn untitled(name: &str) -> Self {
        Self {
            title: name.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    StartDate,
    EndDate,
    Title,
    SecondTitle,
    Topic,
    Medium,
    Client,
    Audience,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::StartDate => "date",
            SortKey::EndDate => "end-date",
            SortKey::Title => "title",
            SortKey::SecondTitle => "second-title",
            SortKey::Topic => "topic",
            SortKey::Medium => "medium",
            SortKey::Client => "client",
            SortKey::Audience => "reach",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date" | "start" | "start-date" | "startdate" => Ok(SortKey::StartDate),
            "end" | "end-date" | "enddate" => Ok(SortKey::EndDate),
            "title" | "project" => Ok(SortKey::Title),
            "second-title" | "subtitle" => Ok(SortKey::SecondTitle),
            "topic" | "thema" => Ok(SortKey::Topic),
            "medium" => Ok(SortKey::Medium),
            "client" => Ok(SortKey::Client),
            "reach" | "audience" => Ok(SortKey::Audience),
            other => Err(anyhow!(
                "Unknown sort key '{}': expected date|end-date|title|second-title|topic|medium|client|reach",
                other
            )),
        }
    }
}

impl ValueEnum for SortKey {
    fn value_variants<'a>() -> &'a [Self] {
        const VARIANTS: [SortKey; 8] = [
            SortKey::StartDate,
            SortKey::EndDate,
            SortKey::Title,
            SortKey::SecondTitle,
            SortKey::Topic,
            SortKey::Medium,
            SortKey::Client,
            SortKey::Audience,
        ];
        &VARIANTS
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }

    /// Ordering the browser opens with: newest start date first.
    pub fn initial() -> Self {
        Self::desc(SortKey::StartDate)
    }

    /// Header-click rule: the same key flips asc to desc, anything else starts at asc.
    pub fn clicked(current: Option<SortSpec>, key: SortKey) -> Self {
        match current {
            Some(spec) if spec.key == key && spec.direction == SortDirection::Asc => {
                Self::desc(key)
            }
            _ => Self::asc(key),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MediumFilter {
    #[default]
    All,
    Only(String),
}

impl MediumFilter {
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case(ALL_MEDIUM_LABEL) || label.eq_ignore_ascii_case("all") {
            MediumFilter::All
        } else {
            MediumFilter::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MediumFilter::All => ALL_MEDIUM_LABEL,
            MediumFilter::Only(medium) => medium,
        }
    }

    pub fn matches(&self, medium: &str) -> bool {
        match self {
            MediumFilter::All => true,
            MediumFilter::Only(wanted) => wanted == medium,
        }
    }

    /// Step to the neighbouring entry of `options` (as produced by
    /// `Catalog::medium_filter_options`), wrapping at both ends.
    pub fn cycle(&self, options: &[MediumFilter], forward: bool) -> MediumFilter {
        if options.is_empty() {
            return MediumFilter::All;
        }
        let len = options.len();
        let idx = options.iter().position(|o| o == self);
        let next = match (idx, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % len,
            (Some(0), false) => len - 1,
            (Some(i), false) => i - 1,
        };
        options[next].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, SortKey::Title, SortSpec::asc(SortKey::Title))]
    #[case(Some(SortSpec::asc(SortKey::Title)), SortKey::Title, SortSpec::desc(SortKey::Title))]
    #[case(Some(SortSpec::desc(SortKey::Title)), SortKey::Title, SortSpec::asc(SortKey::Title))]
    #[case(Some(SortSpec::asc(SortKey::Title)), SortKey::Client, SortSpec::asc(SortKey::Client))]
    #[case(Some(SortSpec::desc(SortKey::StartDate)), SortKey::Client, SortSpec::asc(SortKey::Client))]
    fn clicked_follows_header_rule(
        #[case] current: Option<SortSpec>,
        #[case] key: SortKey,
        #[case] expected: SortSpec,
    ) {
        assert_eq!(SortSpec::clicked(current, key), expected);
    }

    #[test]
    fn sort_key_parses_aliases() {
        assert_eq!("Reach".parse::<SortKey>().unwrap(), SortKey::Audience);
        assert_eq!("thema".parse::<SortKey>().unwrap(), SortKey::Topic);
        assert!("colour".parse::<SortKey>().is_err());
    }

    #[test]
    fn medium_filter_cycles_and_wraps() {
        let options = vec![
            MediumFilter::All,
            MediumFilter::Only("Print Media".into()),
            MediumFilter::Only("3D Installation".into()),
        ];
        let next = MediumFilter::All.cycle(&options, true);
        assert_eq!(next, MediumFilter::Only("Print Media".into()));
        assert_eq!(MediumFilter::All.cycle(&options, false), options[2]);
        assert_eq!(options[2].cycle(&options, true), MediumFilter::All);
        assert_eq!(
            MediumFilter::Only("gone".into()).cycle(&options, true),
            MediumFilter::All
        );
    }

    #[test]
    fn medium_filter_label_round_trips_sentinel() {
        assert_eq!(MediumFilter::from_label("ALL MEDIUM"), MediumFilter::All);
        assert_eq!(MediumFilter::All.label(), ALL_MEDIUM_LABEL);
        assert!(MediumFilter::All.matches("anything"));
        assert!(!MediumFilter::Only("Print Media".into()).matches("print media"));
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let project: Project = serde_json::from_str(r#"{"id":"x","title":"T"}"#).unwrap();
        assert_eq!(project.client, "");
        assert!(project.related_links().is_empty());
        assert!(project.credits.is_empty());
    }
}
