use crate::config::{ADMISSION_PATH, HOME_PATH, NEWS_LIST_PATH, STUDENT_LIFE_PATH};

/// Page the navigation bar is embedded in. Selects which link set applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavContext {
    #[default]
    Home,
    StudentLife,
    Admission,
    NewsList,
    /// Any page without a link set of its own. Renders no links.
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Scrolls to a section, either on this page (`programmes`) or on the
    /// home page (`/#programmes`).
    Anchor,
    Route,
    /// Call-to-action, styled as a prominent button.
    Button,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub target: &'static str,
    pub label: &'static str,
    pub kind: LinkKind,
}

impl NavEntry {
    const fn new(target: &'static str, label: &'static str, kind: LinkKind) -> Self {
        Self { target, label, kind }
    }

    /// True for anchors pointing at a section of another page.
    pub fn is_cross_page(&self) -> bool {
        self.target.starts_with('/')
    }

    /// Section id this entry scrolls to on the current page, if any.
    pub fn section_id(&self) -> Option<&'static str> {
        match self.kind {
            LinkKind::Anchor if !self.is_cross_page() => Some(self.target),
            _ => None,
        }
    }

    /// Value for the rendered `href` attribute.
    pub fn href(&self) -> String {
        match self.section_id() {
            Some(id) => format!("#{id}"),
            None => self.target.to_string(),
        }
    }
}

const HOME_LINKS: &[NavEntry] = &[
    NavEntry::new("accueil", "Accueil", LinkKind::Anchor),
    NavEntry::new("a-propos", "À propos", LinkKind::Anchor),
    NavEntry::new("programmes", "Programmes", LinkKind::Anchor),
    NavEntry::new("partenariat", "Partenaires", LinkKind::Anchor),
    NavEntry::new(STUDENT_LIFE_PATH, "Vie étudiante", LinkKind::Route),
    NavEntry::new(ADMISSION_PATH, "S'inscrire", LinkKind::Button),
];

/// Shared by every page other than home: sections link back to the home page.
const INNER_PAGE_LINKS: &[NavEntry] = &[
    NavEntry::new(HOME_PATH, "Accueil", LinkKind::Route),
    NavEntry::new("/#a-propos", "À propos", LinkKind::Anchor),
    NavEntry::new("/#programmes", "Programmes", LinkKind::Anchor),
    NavEntry::new("/#partenariat", "Partenaires", LinkKind::Anchor),
    NavEntry::new(STUDENT_LIFE_PATH, "Vie étudiante", LinkKind::Route),
    NavEntry::new(ADMISSION_PATH, "S'inscrire", LinkKind::Button),
];

impl NavContext {
    /// Context for a router pathname. Unrecognized paths get `Unknown`.
    pub fn for_path(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => HOME_PATH,
            trimmed => trimmed,
        };
        match path {
            HOME_PATH => NavContext::Home,
            STUDENT_LIFE_PATH => NavContext::StudentLife,
            ADMISSION_PATH => NavContext::Admission,
            NEWS_LIST_PATH => NavContext::NewsList,
            _ => NavContext::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavContext::Home => "home",
            NavContext::StudentLife => "studentLife",
            NavContext::Admission => "admission",
            NavContext::NewsList => "newsList",
            NavContext::Unknown => "unknown",
        }
    }

    /// Ordered navigation entries for this context.
    pub fn entries(&self) -> &'static [NavEntry] {
        match self {
            NavContext::Home => HOME_LINKS,
            NavContext::StudentLife | NavContext::Admission | NavContext::NewsList => {
                INNER_PAGE_LINKS
            }
            NavContext::Unknown => &[],
        }
    }

    /// Ids of the in-page sections whose visibility drives the active link.
    pub fn observed_sections(&self) -> Vec<&'static str> {
        self.entries().iter().filter_map(NavEntry::section_id).collect()
    }

    pub fn tracks_sections(&self) -> bool {
        self.entries().iter().any(|entry| entry.section_id().is_some())
    }

    /// Active anchor right after mounting or switching to this context.
    pub fn initial_anchor(&self) -> &'static str {
        self.entries()
            .iter()
            .find_map(NavEntry::section_id)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CONTEXTS: [NavContext; 5] = [
        NavContext::Home,
        NavContext::StudentLife,
        NavContext::Admission,
        NavContext::NewsList,
        NavContext::Unknown,
    ];

    #[test]
    fn test_default_context_is_home() {
        assert_eq!(NavContext::default(), NavContext::Home);
    }

    #[test]
    fn test_link_counts() {
        assert_eq!(NavContext::Home.entries().len(), 6);
        assert_eq!(NavContext::StudentLife.entries().len(), 6);
        assert_eq!(NavContext::Admission.entries().len(), 6);
        assert_eq!(NavContext::NewsList.entries().len(), 6);
        assert_eq!(NavContext::Unknown.entries().len(), 0);
    }

    #[test]
    fn test_unknown_context_has_no_links() {
        assert!(NavContext::Unknown.entries().is_empty());
        assert!(!NavContext::Unknown.tracks_sections());
        assert_eq!(NavContext::Unknown.initial_anchor(), "");
    }

    #[test]
    fn test_every_known_context_ends_with_admission_button() {
        for context in ALL_CONTEXTS.iter().filter(|c| **c != NavContext::Unknown) {
            let last = context.entries().last().expect("known contexts have links");
            assert_eq!(last.kind, LinkKind::Button);
            assert_eq!(last.target, "/admission");
        }
    }

    #[test]
    fn test_home_observes_its_sections_in_order() {
        assert_eq!(
            NavContext::Home.observed_sections(),
            vec!["accueil", "a-propos", "programmes", "partenariat"]
        );
        assert_eq!(NavContext::Home.initial_anchor(), "accueil");
    }

    #[test]
    fn test_inner_pages_observe_nothing() {
        for context in [NavContext::StudentLife, NavContext::Admission, NavContext::NewsList] {
            assert!(context.observed_sections().is_empty(), "{:?}", context);
            assert!(!context.tracks_sections());
            assert_eq!(context.initial_anchor(), "");
        }
    }

    #[test]
    fn test_cross_page_anchor_is_not_a_section() {
        let entry = NavContext::Admission.entries()[1];
        assert_eq!(entry.kind, LinkKind::Anchor);
        assert!(entry.is_cross_page());
        assert_eq!(entry.section_id(), None);
        assert_eq!(entry.href(), "/#a-propos");
    }

    #[test]
    fn test_same_page_anchor_href_gets_hash() {
        let entry = NavContext::Home.entries()[2];
        assert_eq!(entry.section_id(), Some("programmes"));
        assert_eq!(entry.href(), "#programmes");
    }

    #[test]
    fn test_route_href_is_target() {
        let entry = NavContext::Home.entries()[4];
        assert_eq!(entry.kind, LinkKind::Route);
        assert_eq!(entry.href(), "/vie-etudiante");
    }

    #[test]
    fn test_for_path() {
        assert_eq!(NavContext::for_path("/"), NavContext::Home);
        assert_eq!(NavContext::for_path(""), NavContext::Home);
        assert_eq!(NavContext::for_path("/vie-etudiante"), NavContext::StudentLife);
        assert_eq!(NavContext::for_path("/vie-etudiante/"), NavContext::StudentLife);
        assert_eq!(NavContext::for_path("/admission"), NavContext::Admission);
        assert_eq!(NavContext::for_path("/actualites"), NavContext::NewsList);
        assert_eq!(NavContext::for_path("/nowhere"), NavContext::Unknown);
        assert_eq!(NavContext::for_path("/admission/extra"), NavContext::Unknown);
    }

    #[test]
    fn test_entry_targets_are_unique_per_context() {
        for context in ALL_CONTEXTS {
            let mut targets: Vec<_> = context.entries().iter().map(|e| e.target).collect();
            targets.sort();
            targets.dedup();
            assert_eq!(targets.len(), context.entries().len(), "{}", context.as_str());
        }
    }
}
