use casino_access::Icon;

/// Glyph rendered for a navigation icon
pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "🏠",
        Icon::Building => "🏢",
        Icon::Users => "👥",
        Icon::Puzzle => "🧩",
        Icon::Gift => "🎁",
        Icon::Megaphone => "📣",
        Icon::Calendar => "📅",
        Icon::Academic => "🎓",
        Icon::ChartPie => "📊",
        Icon::ChartBar => "📈",
        Icon::Cog => "⚙",
        Icon::Search => "🔍",
        Icon::Help => "❓",
    }
}
