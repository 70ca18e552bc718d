//! Tailwind class selection for the navigation bar.

/// Which half of the responsive layout a link is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Horizontal row in the header, `lg` screens and up.
    Desktop,
    /// Vertical list inside the drawer, below `lg`.
    Mobile,
}

const TRANSITION: &str = "transition-all duration-300";

pub fn header(compact: bool) -> &'static str {
    if compact {
        "sticky top-0 z-50 transition-all duration-500 bg-white/95 dark:bg-gray-900/95 backdrop-blur-lg shadow-lg"
    } else {
        "sticky top-0 z-50 transition-all duration-500 bg-white/90 dark:bg-gray-900/90 backdrop-blur-md shadow-md"
    }
}

pub fn logo_frame(compact: bool) -> &'static str {
    if compact {
        "relative transition-all duration-300 w-12"
    } else {
        "relative transition-all duration-300 w-14"
    }
}

pub fn title(compact: bool) -> &'static str {
    if compact {
        "font-bold bg-gradient-to-r from-blue-600 to-blue-800 dark:from-blue-400 dark:to-blue-600 bg-clip-text text-transparent transition-all duration-300 text-base sm:text-lg"
    } else {
        "font-bold bg-gradient-to-r from-blue-600 to-blue-800 dark:from-blue-400 dark:to-blue-600 bg-clip-text text-transparent transition-all duration-300 text-lg sm:text-xl"
    }
}

pub fn tagline(compact: bool) -> &'static str {
    if compact {
        "uppercase font-semibold text-gray-500 dark:text-gray-400 transition-all duration-300 text-[0.6rem]"
    } else {
        "uppercase font-semibold text-gray-500 dark:text-gray-400 transition-all duration-300 text-xs"
    }
}

/// Plain text or icon+label link. Highlighting only applies to same-page anchors.
pub fn link(variant: Variant, active: bool) -> String {
    let (layout, tone) = match variant {
        Variant::Desktop => (
            "hidden lg:block px-4 py-2 rounded-lg text-sm font-medium",
            if active {
                "text-blue-600 dark:text-blue-400 bg-blue-50 dark:bg-blue-900/20"
            } else {
                "text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 hover:bg-gray-100 dark:hover:bg-gray-800"
            },
        ),
        Variant::Mobile => (
            "flex lg:hidden items-center gap-3 px-5 py-4 rounded-xl text-base font-medium",
            if active {
                "text-blue-600 dark:text-blue-400 bg-blue-50 dark:bg-blue-900/30"
            } else {
                "text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 hover:bg-gray-50 dark:hover:bg-gray-700/50"
            },
        ),
    };
    format!("{layout} {TRANSITION} {tone}")
}

pub fn call_to_action(variant: Variant) -> &'static str {
    match variant {
        Variant::Desktop => {
            "hidden lg:inline-flex items-center gap-2 px-6 py-2.5 bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 text-white text-sm font-semibold rounded-lg shadow-lg hover:shadow-xl transition-all duration-300 hover:scale-105"
        }
        Variant::Mobile => {
            "flex lg:hidden items-center justify-center gap-3 w-full px-6 py-4 bg-gradient-to-r from-blue-600 to-blue-700 text-white text-base font-semibold rounded-xl shadow-lg transition-all duration-300 mt-4"
        }
    }
}

pub fn icon_size(variant: Variant) -> &'static str {
    match variant {
        Variant::Desktop => "w-4 h-4",
        Variant::Mobile => "w-5 h-5",
    }
}
