//! Icon Component
//!
//! Maps the icon references used in the catalog to glyphs.

use leptos::*;

/// Glyph for an icon reference
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "phone" => "📞",
        "file-text" => "📄",
        "package" => "📦",
        "palette" => "🎨",
        "user-plus" => "👤",
        "book-open" => "📖",
        "grid" => "🪑",
        "mic" => "🎤",
        "sparkles" => "✨",
        "trending-up" => "📈",
        "folder" => "📁",
        "shopping-cart" => "🛒",
        _ => "•",
    }
}

#[component]
pub fn Icon(
    #[prop(into)]
    name: String,
    #[prop(default = "text-xl")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class=class aria-hidden="true">{icon_glyph(&name)}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_icons() {
        assert_eq!(icon_glyph("phone"), "📞");
        assert_eq!(icon_glyph("not-an-icon"), "•");
    }
}
