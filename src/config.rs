use std::time::Duration;

/// Vertical scroll offset (px) past which the header switches to its compact style.
pub const COMPACT_SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Collapses the observed viewport to its horizontal midline, so a section
/// becomes active when it crosses the middle of the screen.
pub const SECTION_ROOT_MARGIN: &str = "-50% 50px -50% 50px";
pub const SECTION_THRESHOLD: f64 = 0.0;

/// Value written to the active anchor when the call-to-action is clicked.
/// It never matches a section id, so no anchor link stays highlighted.
pub const CTA_SENTINEL: &str = "admissions";

/// Length of the drawer and backdrop exit transitions.
pub const DRAWER_TRANSITION: Duration = Duration::from_millis(300);

pub const INSTITUTION_NAME: &str = "Université Privée d'Ambohidratrimo";
pub const INSTITUTION_SHORT_NAME: &str = "UPA";
pub const TAGLINE: &str = "Toujours Plus Haut";
pub const LOGO_SRC: &str = "/assets/logo.png";
pub const LOGO_ALT: &str = "Logo UPA";

pub const HOME_PATH: &str = "/";
pub const STUDENT_LIFE_PATH: &str = "/vie-etudiante";
pub const ADMISSION_PATH: &str = "/admission";
pub const NEWS_LIST_PATH: &str = "/actualites";

pub const SCROLL_KEY: &str = "upa_scroll";
