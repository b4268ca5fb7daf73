//! Inline styles derived from view state. Components keep a `hovered` flag
//! and ask these functions for the matching style string instead of touching
//! element styles from event handlers.

use crate::content::ColorOption;

pub const CARBON_BLACK: &str = "#0C0F12";
pub const WARM_WHITE: &str = "#F3F4F2";
pub const TAB_IDLE: &str = "#98A0AD";

pub const PARALLAX_FACTOR: f64 = 0.5;

const GLASS_BLUR: &str = "backdrop-filter: blur(20px) saturate(180%); -webkit-backdrop-filter: blur(20px) saturate(180%);";
const PANEL_BLUR: &str = "backdrop-filter: blur(30px) saturate(180%); -webkit-backdrop-filter: blur(30px) saturate(180%);";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlassTone {
    /// Main call to action.
    Primary,
    Secondary,
    /// Buttons sitting on an already translucent panel.
    Solid,
}

pub fn glass_button(tone: GlassTone, hovered: bool) -> String {
    let (background, border, border_hover, shadow, shadow_hover) = match tone {
        GlassTone::Primary => (
            0.35,
            0.2,
            0.4,
            "0 8px 32px rgba(0, 0, 0, 0.4), inset 0 1px 0 rgba(243, 244, 242, 0.15)",
            "0 0 20px rgba(243, 244, 242, 0.3), 0 12px 48px rgba(0, 0, 0, 0.5), inset 0 1px 0 rgba(243, 244, 242, 0.3)",
        ),
        GlassTone::Secondary => (
            0.25,
            0.15,
            0.3,
            "0 8px 32px rgba(0, 0, 0, 0.3), inset 0 1px 0 rgba(243, 244, 242, 0.1)",
            "0 0 15px rgba(243, 244, 242, 0.2), 0 12px 48px rgba(0, 0, 0, 0.4), inset 0 1px 0 rgba(243, 244, 242, 0.25)",
        ),
        GlassTone::Solid => (
            0.5,
            0.3,
            0.5,
            "0 8px 32px rgba(0, 0, 0, 0.4), inset 0 1px 0 rgba(243, 244, 242, 0.2)",
            "0 0 20px rgba(243, 244, 242, 0.3), 0 12px 48px rgba(0, 0, 0, 0.5), inset 0 1px 0 rgba(243, 244, 242, 0.3)",
        ),
    };
    let (border, shadow, transform) = if hovered {
        (border_hover, shadow_hover, "translateY(-2px) scale(1.02)")
    } else {
        (border, shadow, "translateY(0) scale(1)")
    };
    format!(
        "background: rgba(12, 15, 18, {}); {} border: 1px solid rgba(243, 244, 242, {}); box-shadow: {}; transform: {};",
        background, GLASS_BLUR, border, shadow, transform
    )
}

pub fn glass_panel(border_alpha: f64) -> String {
    format!(
        "background: rgba(12, 15, 18, 0.3); {} border: 1px solid rgba(243, 244, 242, {}); box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4), inset 0 1px 0 rgba(243, 244, 242, 0.1);",
        PANEL_BLUR, border_alpha
    )
}

pub fn color_swatch(option: &ColorOption, selected: bool, hovered: bool) -> String {
    let (r, g, b) = option.glow_rgb;
    let (background, border, shadow) = if selected {
        (
            0.5,
            0.6,
            format!(
                "0 0 25px rgba({r}, {g}, {b}, 0.6), 0 0 50px rgba({r}, {g}, {b}, 0.4), 0 0 75px rgba({r}, {g}, {b}, 0.2), 0 8px 32px rgba(0, 0, 0, 0.5), inset 0 1px 0 rgba(243, 244, 242, 0.3)"
            ),
        )
    } else if hovered {
        (
            0.3,
            0.4,
            "0 0 10px rgba(243, 244, 242, 0.3), 0 12px 48px rgba(0, 0, 0, 0.4), inset 0 1px 0 rgba(243, 244, 242, 0.2)".to_string(),
        )
    } else {
        (
            0.3,
            0.2,
            "0 8px 32px rgba(0, 0, 0, 0.3), inset 0 1px 0 rgba(243, 244, 242, 0.1)".to_string(),
        )
    };
    format!(
        "background: rgba(12, 15, 18, {}); {} border: 2px solid rgba(243, 244, 242, {}); box-shadow: {};",
        background, GLASS_BLUR, border, shadow
    )
}

pub fn spec_tab(active: bool, hovered: bool) -> String {
    if active {
        format!(
            "color: {}; background: rgba(243, 244, 242, 0.9); border: 1px solid rgba(243, 244, 242, 0.6); box-shadow: 0 0 20px rgba(243, 244, 242, 0.3);",
            CARBON_BLACK
        )
    } else {
        let color = if hovered { WARM_WHITE } else { TAB_IDLE };
        format!(
            "color: {}; background: rgba(12, 15, 18, 0.3); {} border: 1px solid rgba(243, 244, 242, 0.15);",
            color, GLASS_BLUR
        )
    }
}

/// Vertical lift applied to hoverable cards.
pub fn lift(hovered: bool, lift_px: u32, scale: Option<f64>) -> String {
    match (hovered, scale) {
        (true, Some(scale)) => format!("transform: translateY(-{}px) scale({});", lift_px, scale),
        (true, None) => format!("transform: translateY(-{}px);", lift_px),
        (false, Some(_)) => "transform: translateY(0) scale(1);".to_string(),
        (false, None) => "transform: translateY(0);".to_string(),
    }
}

pub fn parallax(scroll_y: f64) -> String {
    format!("transform: translateY({}px);", scroll_y.max(0.0) * PARALLAX_FACTOR)
}

pub fn reveal(visible: bool, delay_secs: f64) -> String {
    if visible {
        format!(
            "opacity: 1; transform: translateY(0); transition: opacity 0.5s cubic-bezier(0.2, 0.9, 0.2, 1) {0}s, transform 0.5s cubic-bezier(0.2, 0.9, 0.2, 1) {0}s;",
            delay_secs
        )
    } else {
        "opacity: 0; transform: translateY(12px);".to_string()
    }
}

pub fn product_image_filter(color_id: &str) -> &'static str {
    match color_id {
        "phantom-black" => "filter: brightness(0.7);",
        _ => "filter: none;",
    }
}

pub const BASE_CSS: &str = r#"
    @import url('https://fonts.googleapis.com/css2?family=Oswald:wght@400;500;600&family=Inter:wght@400;500;600&display=swap');

    * {
        box-sizing: border-box;
    }

    html {
        scroll-behavior: smooth;
    }

    body {
        margin: 0;
        background: #0C0F12;
        color: #F3F4F2;
        font-family: 'Inter', system-ui, sans-serif;
        overflow-x: hidden;
    }

    h1, h2, h3 {
        font-family: 'Oswald', 'Bebas Neue', sans-serif;
        font-weight: 500;
        margin: 0;
    }

    .container {
        max-width: 1100px;
        margin: 0 auto;
        padding: 0 1.5rem;
    }

    .section {
        padding: 120px 0;
    }

    .section-title {
        font-size: 48px;
        line-height: 1.1;
        letter-spacing: -0.02em;
        text-align: center;
        margin-bottom: 3rem;
    }

    .muted {
        color: #B8BDC3;
    }

    .glass-button {
        color: #F3F4F2;
        font-family: 'Inter', system-ui, sans-serif;
        font-weight: 600;
        font-size: 1.05rem;
        padding: 1.25rem 2.5rem;
        border-radius: 12px;
        cursor: pointer;
        transition: all 0.3s ease;
        text-decoration: none;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
    }

    .icon {
        width: 1.25rem;
        height: 1.25rem;
    }

    .modal-overlay {
        position: fixed;
        inset: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        background: rgba(12, 15, 18, 0.85);
        backdrop-filter: blur(20px);
        -webkit-backdrop-filter: blur(20px);
    }

    .modal-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        z-index: 2;
        padding: 0.75rem;
        border-radius: 9999px;
        color: #F3F4F2;
        cursor: pointer;
        background: rgba(12, 15, 18, 0.5);
        border: 1px solid rgba(243, 244, 242, 0.3);
        transition: transform 0.3s ease;
    }

    .modal-close:hover {
        transform: scale(1.1);
    }

    @media (max-width: 768px) {
        .section {
            padding: 48px 0;
        }

        .section-title {
            font-size: 32px;
        }

        .glass-button {
            width: 100%;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{find_color, COLOR_OPTIONS};

    #[test]
    fn test_selected_swatch_glows_in_its_own_color() {
        let orange = find_color("baja-orange").unwrap();
        let style = color_swatch(orange, true, false);
        assert!(style.contains("rgba(217, 119, 6, 0.6)"));
        assert!(style.contains("rgba(243, 244, 242, 0.6)"));
    }

    #[test]
    fn test_hover_does_not_change_selected_swatch() {
        for option in COLOR_OPTIONS {
            assert_eq!(
                color_swatch(option, true, true),
                color_swatch(option, true, false)
            );
            assert_ne!(
                color_swatch(option, false, true),
                color_swatch(option, false, false)
            );
        }
    }

    #[test]
    fn test_spec_tab_hover_only_affects_inactive() {
        assert_eq!(spec_tab(true, true), spec_tab(true, false));
        assert!(spec_tab(false, false).contains(TAB_IDLE));
        assert!(spec_tab(false, true).contains(WARM_WHITE));
        assert!(spec_tab(true, false).contains(CARBON_BLACK));
    }

    #[test]
    fn test_glass_button_hover() {
        let idle = glass_button(GlassTone::Primary, false);
        let hovered = glass_button(GlassTone::Primary, true);
        assert!(idle.contains("rgba(243, 244, 242, 0.2)"));
        assert!(hovered.contains("rgba(243, 244, 242, 0.4)"));
        assert!(hovered.contains("translateY(-2px) scale(1.02)"));
    }

    #[test]
    fn test_parallax_and_lift() {
        assert_eq!(parallax(0.0), "transform: translateY(0px);");
        assert_eq!(parallax(300.0), "transform: translateY(150px);");
        assert_eq!(parallax(-40.0), "transform: translateY(0px);");
        assert_eq!(lift(true, 4, None), "transform: translateY(-4px);");
        assert_eq!(lift(true, 4, Some(1.02)), "transform: translateY(-4px) scale(1.02);");
        assert_eq!(lift(false, 4, None), "transform: translateY(0);");
    }

    #[test]
    fn test_reveal_and_filter() {
        assert!(reveal(false, 0.0).contains("opacity: 0"));
        assert!(reveal(true, 0.2).contains("0.2s"));
        assert_eq!(product_image_filter("phantom-black"), "filter: brightness(0.7);");
        assert_eq!(product_image_filter("khaki-green"), "filter: none;");
    }
}
