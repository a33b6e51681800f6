//! Presentation settings for overload tables.

use serde::Deserialize;

/// Visual settings for overload rows and standard badges.
///
/// Deserializes from the `[theme]` table of `apiref.toml`; every field is
/// optional and falls back to the default palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverloadTheme {
    /// Badge background colour.
    pub badge_background: String,
    /// Badge text colour.
    pub badge_color: String,
    /// Badge corner radius (CSS length).
    pub badge_radius: String,
    /// Badge padding (CSS length).
    pub badge_padding: String,
    /// Heading level of the number label (1-6).
    pub label_level: u8,
    /// Language tag handed to the code presenter.
    pub language: String,
}

impl Default for OverloadTheme {
    fn default() -> Self {
        Self {
            badge_background: "#00a550".to_owned(),
            badge_color: "#fff".to_owned(),
            badge_radius: "5px".to_owned(),
            badge_padding: "0.3rem".to_owned(),
            label_level: 6,
            language: "cpp".to_owned(),
        }
    }
}

impl OverloadTheme {
    /// Inline style of a standard badge.
    #[must_use]
    pub fn badge_style(&self) -> String {
        format!(
            "background-color: {}; border-radius: {}; color: {}; padding: {};",
            self.badge_background, self.badge_radius, self.badge_color, self.badge_padding
        )
    }

    /// Stylesheet for overload tables and link buttons.
    ///
    /// Rows get a bottom border only, so a table reads as a list of
    /// declarations rather than a grid.
    #[must_use]
    pub fn stylesheet(&self) -> String {
        let level = self.label_level.clamp(1, 6);
        format!(
            "table.overloads {{ border-collapse: collapse; width: 100%; }}\n\
             table.overloads tr {{ background-color: inherit; border-top: 1px solid #dadde1; border-bottom: 1px solid #dadde1; }}\n\
             table.overloads td {{ border-left: 0; border-right: 0; vertical-align: middle; padding: 0.5rem; }}\n\
             table.overloads td.overload-code pre {{ margin-bottom: 0; }}\n\
             table.overloads h{level} {{ margin-bottom: 0; }}\n\
             table.overloads a.hash-link {{ margin-left: 0.3rem; opacity: 0; text-decoration: none; }}\n\
             table.overloads h{level}:hover a.hash-link {{ opacity: 1; }}\n\
             .link-button {{ display: flex; align-items: center; justify-content: flex-end; }}\n"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_badge_style() {
        assert_eq!(
            OverloadTheme::default().badge_style(),
            "background-color: #00a550; border-radius: 5px; color: #fff; padding: 0.3rem;"
        );
    }

    #[test]
    fn test_partial_override() {
        let theme: OverloadTheme = toml::from_str(r##"badge_background = "#2e8555""##).unwrap();
        assert_eq!(theme.badge_background, "#2e8555");
        assert_eq!(theme.badge_radius, "5px");
        assert_eq!(theme.language, "cpp");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<OverloadTheme, _> = toml::from_str("badge_colour = \"red\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_stylesheet_targets_label_level() {
        let theme = OverloadTheme {
            label_level: 4,
            ..OverloadTheme::default()
        };
        let css = theme.stylesheet();
        assert!(css.contains("table.overloads h4 { margin-bottom: 0; }"));
        assert!(css.contains(".link-button"));
    }
}
