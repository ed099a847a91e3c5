//! Filter/sort engine that turns the catalog into the list the browser displays.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::model::{MediumFilter, Project, SortDirection, SortKey, SortSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub search: String,
    pub medium: MediumFilter,
    pub sort: Option<SortSpec>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            medium: MediumFilter::All,
            sort: Some(SortSpec::initial()),
        }
    }
}

impl QueryParams {
    pub fn run<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        query(projects, &self.search, &self.medium, self.sort)
    }

    /// Apply a column-header click to the current sort.
    pub fn click_sort(&mut self, key: SortKey) {
        self.sort = Some(SortSpec::clicked(self.sort, key));
    }
}

/// Filter `projects` by free text and medium, then order them by `sort`.
///
/// Matching is a case-insensitive substring test over the searchable fields
/// joined by spaces; an empty (or all-whitespace) search matches everything.
/// Without a sort spec the catalog order is kept. Sorting is stable.
pub fn query<'a>(
    projects: &'a [Project],
    search: &str,
    medium: &MediumFilter,
    sort: Option<SortSpec>,
) -> Vec<&'a Project> {
    let needle = search.trim().to_lowercase();
    let mut results: Vec<&Project> = projects
        .iter()
        .filter(|project| matches_search(project, &needle) && medium.matches(&project.medium))
        .collect();

    if let Some(spec) = sort {
        sort_projects(&mut results, spec);
    }

    results
}

fn matches_search(project: &Project, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    project
        .searchable_fields()
        .join(" ")
        .to_lowercase()
        .contains(needle)
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Date(Option<NaiveDate>),
    Text(String),
}

impl SortValue {
    fn of(project: &Project, key: SortKey) -> Self {
        let raw = project.sort_text(key);
        match key {
            SortKey::StartDate => SortValue::Date(parse_day_month_year(raw)),
            _ => SortValue::Text(raw.to_lowercase()),
        }
    }
}

pub fn sort_projects(projects: &mut Vec<&Project>, spec: SortSpec) {
    let mut keyed: Vec<(SortValue, &Project)> = projects
        .iter()
        .map(|project| (SortValue::of(project, spec.key), *project))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| directed(a.cmp(b), spec.direction));

    projects.clear();
    projects.extend(keyed.into_iter().map(|(_, project)| project));
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Parse a `DD/MM/YYYY` date. Anything that is not three integers forming a
/// real calendar day yields `None`.
pub fn parse_day_month_year(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.trim().split('/');
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn project(id: &str, title: &str, start: &str) -> Project {
        let mut p: Project = serde_json::from_str(&format!(r#"{{"id":"{id}"}}"#)).unwrap();
        p.title = title.to_string();
        p.start_date = start.to_string();
        p
    }

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn start_date_sorts_chronologically() {
        let projects = vec![
            project("a", "A", "15/01/2024"),
            project("b", "B", "01/08/2023"),
            project("c", "C", "10/10/2023"),
        ];
        let asc = query(&projects, "", &MediumFilter::All, Some(SortSpec::asc(SortKey::StartDate)));
        assert_eq!(ids(&asc), vec!["b", "c", "a"]);

        let desc = query(&projects, "", &MediumFilter::All, Some(SortSpec::desc(SortKey::StartDate)));
        assert_eq!(ids(&desc), vec!["a", "c", "b"]);
    }

    #[test]
    fn day_month_order_is_not_lexical() {
        // Lexically "02/01/2024" < "15/12/2023", chronologically it is later.
        let projects = vec![project("new", "N", "02/01/2024"), project("old", "O", "15/12/2023")];
        let asc = query(&projects, "", &MediumFilter::All, Some(SortSpec::asc(SortKey::StartDate)));
        assert_eq!(ids(&asc), vec!["old", "new"]);
    }

    #[rstest]
    #[case(SortDirection::Asc)]
    #[case(SortDirection::Desc)]
    fn equal_keys_keep_catalog_order(#[case] direction: SortDirection) {
        let projects = vec![
            project("first", "Same", "01/01/2024"),
            project("second", "same", "01/01/2024"),
            project("third", "SAME", "01/01/2024"),
        ];
        for key in [SortKey::StartDate, SortKey::Title] {
            let sorted = query(&projects, "", &MediumFilter::All, Some(SortSpec { key, direction }));
            assert_eq!(ids(&sorted), vec!["first", "second", "third"]);
        }
    }

    #[test]
    fn text_keys_compare_lowercased() {
        let projects = vec![
            project("1", "beta", ""),
            project("2", "Alpha", ""),
            project("3", "", ""),
        ];
        let asc = query(&projects, "", &MediumFilter::All, Some(SortSpec::asc(SortKey::Title)));
        assert_eq!(ids(&asc), vec!["3", "2", "1"]);
    }

    #[test]
    fn no_sort_keeps_input_order() {
        let catalog = Catalog::builtin().unwrap();
        let all = query(catalog.projects(), "", &MediumFilter::All, None);
        assert_eq!(ids(&all), vec!["001", "002", "003"]);
    }

    #[rstest]
    #[case("synth")]
    #[case("SYNTH")]
    #[case("SynthWave Rec")]
    fn search_is_case_insensitive_substring(#[case] needle: &str) {
        let catalog = Catalog::builtin().unwrap();
        let found = query(catalog.projects(), needle, &MediumFilter::All, None);
        assert_eq!(ids(&found), vec!["001"]);
    }

    #[test]
    fn blank_search_matches_everything() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(query(catalog.projects(), "   ", &MediumFilter::All, None).len(), 3);
    }

    #[test]
    fn search_and_medium_filter_compose_with_and() {
        let catalog = Catalog::builtin().unwrap();
        let print = MediumFilter::Only("Print Media".into());
        let both = query(catalog.projects(), "halftone", &print, None);
        assert_eq!(ids(&both), vec!["002"]);

        let motion = MediumFilter::Only("Motion Graphics".into());
        assert!(query(catalog.projects(), "halftone", &motion, None).is_empty());
    }

    #[test]
    fn search_reaches_narrative_fields() {
        let catalog = Catalog::builtin().unwrap();
        let found = query(catalog.projects(), "oslo", &MediumFilter::All, None);
        assert_eq!(ids(&found), vec!["003"]);
    }

    #[test]
    fn toggling_same_key_reverses_order() {
        let catalog = Catalog::builtin().unwrap();
        let mut params = QueryParams {
            sort: None,
            ..QueryParams::default()
        };
        params.click_sort(SortKey::Title);
        let asc = ids(&params.run(catalog.projects()));
        params.click_sort(SortKey::Title);
        let desc = ids(&params.run(catalog.projects()));
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);

        params.click_sort(SortKey::Client);
        assert_eq!(params.sort, Some(SortSpec::asc(SortKey::Client)));
    }

    #[test]
    fn default_params_sort_newest_first() {
        let catalog = Catalog::builtin().unwrap();
        let listed = QueryParams::default().run(catalog.projects());
        assert_eq!(ids(&listed), vec!["001", "003", "002"]);
    }

    #[rstest]
    #[case("15/01/2024", NaiveDate::from_ymd_opt(2024, 1, 15))]
    #[case(" 1/8/2023 ", NaiveDate::from_ymd_opt(2023, 8, 1))]
    #[case("31/02/2024", None)]
    #[case("2024-01-15", None)]
    #[case("", None)]
    #[case("1/2/3/4", None)]
    fn parses_day_month_year(#[case] raw: &str, #[case] expected: Option<NaiveDate>) {
        assert_eq!(parse_day_month_year(raw), expected);
    }

    #[test]
    fn unparseable_dates_sort_first_ascending() {
        let projects = vec![project("dated", "D", "01/01/2020"), project("blank", "B", "")];
        let asc = query(&projects, "", &MediumFilter::All, Some(SortSpec::asc(SortKey::StartDate)));
        assert_eq!(ids(&asc), vec!["blank", "dated"]);
    }
}
