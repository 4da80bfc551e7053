//! Theme-specific style helpers for consistent styling across pages.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Midnight,
    Garden,
    Harvest,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Midnight, Theme::Garden, Theme::Harvest];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Midnight => "Midnight",
            Theme::Garden => "Garden",
            Theme::Harvest => "Harvest",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Theme::Midnight => "🌙",
            Theme::Garden => "🌱",
            Theme::Harvest => "🎃",
        }
    }
}

// ============================================
// LAYOUT
// ============================================

pub fn page(theme: Theme) -> &'static str {
    match theme {
        Theme::Midnight => "min-h-screen bg-gray-900 text-white",
        Theme::Garden => "min-h-screen bg-garden-950 text-garden-100",
        Theme::Harvest => "min-h-screen bg-harvest-950 text-harvest-100",
    }
}

pub fn header(theme: Theme) -> &'static str {
    match theme {
        Theme::Midnight => "border-b border-gray-700 bg-gray-900 px-6 py-4",
        Theme::Garden => "border-b border-garden-700 bg-garden-950 px-6 py-4",
        Theme::Harvest => "border-b border-harvest-700 bg-harvest-950 px-6 py-4",
    }
}

pub fn heading(theme: Theme) -> &'static str {
    match theme {
        Theme::Midnight => "text-xl font-semibold text-white flex items-center gap-2",
        Theme::Garden => "text-xl font-semibold text-garden-100 flex items-center gap-2",
        Theme::Harvest => "text-xl font-semibold text-harvest-100 flex items-center gap-2",
    }
}

pub fn text_muted(theme: Theme) -> &'static str {
    match theme {
        Theme::Midnight => "text-gray-400",
        Theme::Garden => "text-garden-300",
        Theme::Harvest => "text-harvest-300",
    }
}

pub fn accent(theme: Theme) -> &'static str {
    match theme {
        Theme::Midnight => "text-blue-400",
        Theme::Garden => "text-garden-400",
        Theme::Harvest => "text-harvest-400",
    }
}

// ============================================
// PANELS / CARDS
// ============================================

pub fn modal(theme: Theme) -> &'static str {
    match theme {
        Theme::Midnight => "max-w-4xl max-h-80vh overflow-y-auto rounded-xl border border-gray-700 bg-gray-900 text-white p-6",
        Theme::Garden => "max-w-4xl max-h-80vh overflow-y-auto rounded-xl border border-garden-700 bg-garden-950 text-garden-100 p-6",
        Theme::Harvest => "max-w-4xl max-h-80vh overflow-y-auto rounded-xl border border-harvest-700 bg-harvest-950 text-harvest-100 p-6",
    }
}

pub fn card(theme: Theme, selected: bool) -> &'static str {
    match (theme, selected) {
        (Theme::Midnight, true) => "cursor-pointer transition rounded-lg border bg-gray-800 p-4 text-center ring-blue",
        (Theme::Midnight, false) => "cursor-pointer transition rounded-lg border border-gray-600 bg-gray-800 p-4 text-center",
        (Theme::Garden, true) => "cursor-pointer transition rounded-lg border bg-garden-900 p-4 text-center ring-garden",
        (Theme::Garden, false) => "cursor-pointer transition rounded-lg border border-garden-700 bg-garden-900 p-4 text-center",
        (Theme::Harvest, true) => "cursor-pointer transition rounded-lg border bg-harvest-900 p-4 text-center ring-harvest",
        (Theme::Harvest, false) => "cursor-pointer transition rounded-lg border border-harvest-700 bg-harvest-900 p-4 text-center",
    }
}

// ============================================
// INPUTS / BUTTONS
// ============================================

pub fn picker_button(theme: Theme) -> &'static str {
    match theme {
        Theme::Midnight => "w-full h-16 text-left text-lg rounded-lg border border-gray-600 bg-gray-800 px-4 text-white",
        Theme::Garden => "w-full h-16 text-left text-lg rounded-lg border border-garden-700 bg-garden-900 px-4 text-garden-100",
        Theme::Harvest => "w-full h-16 text-left text-lg rounded-lg border border-harvest-700 bg-harvest-900 px-4 text-harvest-100",
    }
}

pub fn input(theme: Theme) -> &'static str {
    match theme {
        Theme::Midnight => "w-full h-16 text-lg rounded-lg border border-gray-600 bg-gray-800 px-4 text-white",
        Theme::Garden => "w-full h-16 text-lg rounded-lg border border-garden-700 bg-garden-900 px-4 text-garden-100",
        Theme::Harvest => "w-full h-16 text-lg rounded-lg border border-harvest-700 bg-harvest-900 px-4 text-harvest-100",
    }
}

pub fn btn(theme: Theme, active: bool) -> &'static str {
    match (theme, active) {
        (Theme::Midnight, true) => "rounded-lg border border-gray-600 bg-gray-700 px-3 py-2 text-sm font-semibold text-blue-400",
        (Theme::Midnight, false) => "rounded-lg border border-gray-700 px-3 py-2 text-sm text-gray-400",
        (Theme::Garden, true) => "rounded-lg border border-garden-700 bg-garden-800 px-3 py-2 text-sm font-semibold text-garden-400",
        (Theme::Garden, false) => "rounded-lg border border-garden-700 px-3 py-2 text-sm text-garden-300",
        (Theme::Harvest, true) => "rounded-lg border border-harvest-700 bg-harvest-800 px-3 py-2 text-sm font-semibold text-harvest-400",
        (Theme::Harvest, false) => "rounded-lg border border-harvest-700 px-3 py-2 text-sm text-harvest-300",
    }
}
