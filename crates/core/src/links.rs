//! Related-link grouping for the project pane.
//!
//! Links carry no explicit category, so they are bucketed by label text. All
//! of that heuristic lives in [`classify`] and [`clean_label`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::RelatedLink;

static LABEL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(learn more about |learn more: |you might love: |you might love )")
        .expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkCategory {
    LearnMore,
    YouMightLove,
}

impl LinkCategory {
    pub fn heading(&self) -> &'static str {
        match self {
            LinkCategory::LearnMore => "Learn More",
            LinkCategory::YouMightLove => "You Might Love",
        }
    }
}

/// Any label mentioning "learn" is a learn-more link; everything else lands in
/// the recommendations bucket.
pub fn classify(label: &str) -> LinkCategory {
    if label.to_lowercase().contains("learn") {
        LinkCategory::LearnMore
    } else {
        LinkCategory::YouMightLove
    }
}

/// Strip the category phrase from the front of a label for display.
pub fn clean_label(label: &str) -> &str {
    match LABEL_PREFIX.find(label) {
        Some(prefix) => &label[prefix.end()..],
        None => label,
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RelatedLinkGroups<'a> {
    pub learn_more: Vec<&'a RelatedLink>,
    pub you_might_love: Vec<&'a RelatedLink>,
}

impl RelatedLinkGroups<'_> {
    pub fn is_empty(&self) -> bool {
        self.learn_more.is_empty() && self.you_might_love.is_empty()
    }
}

pub fn partition(links: &[RelatedLink]) -> RelatedLinkGroups<'_> {
    let mut groups = RelatedLinkGroups::default();
    for link in links {
        match classify(&link.label) {
            LinkCategory::LearnMore => groups.learn_more.push(link),
            LinkCategory::YouMightLove => groups.you_might_love.push(link),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn link(label: &str) -> RelatedLink {
        RelatedLink {
            label: label.to_string(),
            url: "#".to_string(),
        }
    }

    #[rstest]
    #[case("Learn more about Synthwave Branding", LinkCategory::LearnMore)]
    #[case("LEARN MORE: kerning", LinkCategory::LearnMore)]
    #[case("Where I learned halftone", LinkCategory::LearnMore)]
    #[case("You might love: DIGITAL RUSH", LinkCategory::YouMightLove)]
    #[case("Print Process Documentation", LinkCategory::YouMightLove)]
    fn classify_buckets_by_learn(#[case] label: &str, #[case] expected: LinkCategory) {
        assert_eq!(classify(label), expected);
    }

    #[rstest]
    #[case("Learn more about Synthwave Branding", "Synthwave Branding")]
    #[case("learn more: Kerning", "Kerning")]
    #[case("You might love: DIGITAL RUSH", "DIGITAL RUSH")]
    #[case("YOU MIGHT LOVE BLUE VOID", "BLUE VOID")]
    #[case("Architectural Deep Dive", "Architectural Deep Dive")]
    fn clean_label_strips_known_prefixes(#[case] label: &str, #[case] expected: &str) {
        assert_eq!(clean_label(label), expected);
    }

    #[test]
    fn partition_preserves_order_within_groups() {
        let links = vec![
            link("You might love: A"),
            link("Learn more about B"),
            link("Docs C"),
            link("learn more: D"),
        ];
        let groups = partition(&links);
        let learn: Vec<&str> = groups.learn_more.iter().map(|l| l.label.as_str()).collect();
        let love: Vec<&str> = groups.you_might_love.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(learn, vec!["Learn more about B", "learn more: D"]);
        assert_eq!(love, vec!["You might love: A", "Docs C"]);
    }

    #[test]
    fn empty_links_make_empty_groups() {
        assert!(partition(&[]).is_empty());
    }
}
