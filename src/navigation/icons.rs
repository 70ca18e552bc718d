/// Outline icons used by the navigation bar (lucide, 24×24 viewbox).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Info,
    BookOpen,
    Users,
    GraduationCap,
    /// Fallback for labels without a dedicated icon.
    FileText,
    Menu,
    Close,
}

impl NavIcon {
    /// Icon shown next to a link label in the mobile drawer.
    ///
    /// Labels without an entry fall back to [`NavIcon::FileText`], so a new
    /// link always renders with some icon.
    pub fn for_label(label: &str) -> Self {
        match label {
            "Accueil" => NavIcon::Home,
            "À propos" => NavIcon::Info,
            "Programmes" => NavIcon::BookOpen,
            "Partenaires" | "Vie étudiante" => NavIcon::Users,
            "S'inscrire" => NavIcon::GraduationCap,
            _ => NavIcon::FileText,
        }
    }

    /// SVG path data, one string per `<path>` element.
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            NavIcon::Home => &[
                "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8",
                "M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
            ],
            NavIcon::Info => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M12 16v-4",
                "M12 8h.01",
            ],
            NavIcon::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            NavIcon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            NavIcon::GraduationCap => &[
                "M22 10v6",
                "M2 10l10-5 10 5-10 5z",
                "M6 12v5c3 3 9 3 12 0v-5",
            ],
            NavIcon::FileText => &[
                "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z",
                "M14 2v4a2 2 0 0 0 2 2h4",
                "M10 9H8",
                "M16 13H8",
                "M16 17H8",
            ],
            NavIcon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            NavIcon::Close => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}
