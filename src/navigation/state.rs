use leptos::*;

use super::links::{LinkKind, NavContext, NavEntry};
use crate::config::{COMPACT_SCROLL_THRESHOLD_PX, CTA_SENTINEL};

/// Whether the header should use its compact style at this scroll offset.
pub fn is_compact_offset(offset_px: f64) -> bool {
    offset_px > COMPACT_SCROLL_THRESHOLD_PX
}

/// UI state owned by one `NavBar` instance.
///
/// Each event source writes only its own field: the scroll watcher sets
/// `compact`, the section observer sets `active_anchor`, clicks set
/// `menu_open` (and `active_anchor` for anchors and the call-to-action).
#[derive(Debug, Clone, Copy)]
pub struct NavState {
    pub menu_open: RwSignal<bool>,
    pub compact: RwSignal<bool>,
    pub active_anchor: RwSignal<String>,
}

impl NavState {
    pub fn new(context: NavContext) -> Self {
        Self {
            menu_open: create_rw_signal(false),
            compact: create_rw_signal(false),
            active_anchor: create_rw_signal(context.initial_anchor().to_string()),
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }

    /// Recompute the compact flag. Only notifies subscribers when it flips.
    pub fn record_scroll(&self, offset_px: f64) {
        let compact = is_compact_offset(offset_px);
        if self.compact.get_untracked() != compact {
            self.compact.set(compact);
        }
    }

    pub fn section_visible(&self, id: String) {
        self.active_anchor.set(id);
    }

    /// Click on any rendered link. Always closes the drawer.
    ///
    /// Returns the section the caller must scroll to. The router ignores a
    /// click on a hash that is already in the URL, so same-page anchors are
    /// scrolled explicitly on every click.
    pub fn activate(&self, entry: &NavEntry) -> Option<&'static str> {
        let scroll_target = match (entry.kind, entry.section_id()) {
            (LinkKind::Anchor, Some(id)) => {
                self.active_anchor.set(id.to_string());
                Some(id)
            }
            (LinkKind::Button, _) => {
                self.active_anchor.set(CTA_SENTINEL.to_string());
                None
            }
            _ => None,
        };
        self.close_menu();
        scroll_target
    }

    /// Reset on context change. Menu and compact flags carry over.
    pub fn reset_for(&self, context: NavContext) {
        self.active_anchor.set(context.initial_anchor().to_string());
    }

    pub fn is_active(&self, entry: &NavEntry) -> bool {
        match entry.section_id() {
            Some(id) => self.active_anchor.with(|active| active == id),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_state(context: NavContext, f: impl FnOnce(NavState)) {
        let runtime = create_runtime();
        f(NavState::new(context));
        runtime.dispose();
    }

    fn entry(context: NavContext, label: &str) -> NavEntry {
        *context
            .entries()
            .iter()
            .find(|e| e.label == label)
            .expect("label exists")
    }

    #[test]
    fn test_threshold() {
        assert!(!is_compact_offset(0.0));
        assert!(!is_compact_offset(20.0));
        assert!(is_compact_offset(20.5));
        assert!(is_compact_offset(400.0));
    }

    #[test]
    fn test_initial_state() {
        with_state(NavContext::Home, |state| {
            assert!(!state.menu_open.get_untracked());
            assert!(!state.compact.get_untracked());
            assert_eq!(state.active_anchor.get_untracked(), "accueil");
        });
        with_state(NavContext::NewsList, |state| {
            assert_eq!(state.active_anchor.get_untracked(), "");
        });
    }

    #[test]
    fn test_toggle_alternates_from_closed() {
        with_state(NavContext::Home, |state| {
            let mut seen = Vec::new();
            for _ in 0..4 {
                state.toggle_menu();
                seen.push(state.menu_open.get_untracked());
            }
            assert_eq!(seen, vec![true, false, true, false]);
        });
    }

    #[test]
    fn test_scroll_sets_and_clears_compact() {
        with_state(NavContext::Home, |state| {
            state.record_scroll(21.0);
            assert!(state.compact.get_untracked());
            state.record_scroll(21.0);
            state.record_scroll(300.0);
            assert!(state.compact.get_untracked());
            state.record_scroll(20.0);
            assert!(!state.compact.get_untracked());
            state.record_scroll(0.0);
            assert!(!state.compact.get_untracked());
        });
    }

    #[test]
    fn test_repeated_scroll_does_not_notify() {
        with_state(NavContext::Home, |state| {
            let runs = create_rw_signal(0);
            create_isomorphic_effect(move |_| {
                let _ = state.compact.get();
                runs.update_untracked(|n| *n += 1);
            });
            let after_first_run = runs.get_untracked();
            state.record_scroll(50.0);
            state.record_scroll(60.0);
            state.record_scroll(70.0);
            assert_eq!(runs.get_untracked(), after_first_run + 1);
        });
    }

    #[test]
    fn test_any_link_closes_menu() {
        for context in [NavContext::Home, NavContext::StudentLife] {
            with_state(context, |state| {
                for entry in context.entries() {
                    state.menu_open.set(true);
                    state.activate(entry);
                    assert!(!state.menu_open.get_untracked(), "{}", entry.label);

                    state.menu_open.set(false);
                    state.activate(entry);
                    assert!(!state.menu_open.get_untracked(), "{}", entry.label);
                }
            });
        }
    }

    #[test]
    fn test_same_page_anchor_click_activates_section() {
        with_state(NavContext::Home, |state| {
            let programmes = entry(NavContext::Home, "Programmes");
            assert_eq!(state.activate(&programmes), Some("programmes"));
            assert_eq!(state.active_anchor.get_untracked(), "programmes");
            assert!(state.is_active(&programmes));
            assert!(!state.is_active(&entry(NavContext::Home, "Accueil")));
        });
    }

    #[test]
    fn test_repeated_anchor_click_scrolls_every_time() {
        with_state(NavContext::Home, |state| {
            let accueil = entry(NavContext::Home, "Accueil");
            assert_eq!(state.activate(&accueil), Some("accueil"));
            // Visitor scrolls down, the observer moves the highlight
            state.section_visible("partenariat".to_string());
            assert_eq!(state.activate(&accueil), Some("accueil"));
            assert_eq!(state.active_anchor.get_untracked(), "accueil");
        });
    }

    #[test]
    fn test_cross_page_anchor_and_route_leave_active_anchor() {
        with_state(NavContext::Admission, |state| {
            assert_eq!(state.activate(&entry(NavContext::Admission, "À propos")), None);
            assert_eq!(state.active_anchor.get_untracked(), "");
            assert_eq!(state.activate(&entry(NavContext::Admission, "Vie étudiante")), None);
            assert_eq!(state.active_anchor.get_untracked(), "");
        });
    }

    #[test]
    fn test_cta_sets_sentinel() {
        with_state(NavContext::Home, |state| {
            let cta = entry(NavContext::Home, "S'inscrire");
            assert_eq!(cta.href(), "/admission");
            state.menu_open.set(true);
            assert_eq!(state.activate(&cta), None);
            assert_eq!(state.active_anchor.get_untracked(), CTA_SENTINEL);
            assert!(!state.menu_open.get_untracked());
            // The sentinel never highlights a link
            assert!(NavContext::Home.entries().iter().all(|e| !state.is_active(e)));
        });
    }

    #[test]
    fn test_section_visible_then_context_change_clears() {
        with_state(NavContext::Home, |state| {
            state.section_visible("a-propos".to_string());
            assert_eq!(state.active_anchor.get_untracked(), "a-propos");

            state.reset_for(NavContext::Admission);
            assert_eq!(state.active_anchor.get_untracked(), "");
        });
    }

    #[test]
    fn test_reset_keeps_menu_and_compact() {
        with_state(NavContext::Home, |state| {
            state.menu_open.set(true);
            state.record_scroll(100.0);
            state.reset_for(NavContext::NewsList);
            assert!(state.menu_open.get_untracked());
            assert!(state.compact.get_untracked());

            state.reset_for(NavContext::Home);
            assert_eq!(state.active_anchor.get_untracked(), "accueil");
        });
    }
}
