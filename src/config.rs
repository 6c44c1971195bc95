//! Static navigation and styling table.

/// Brand label shown at the left of the bar.
pub const BRAND: &str = "StarConnect";

/// Where the brand label links to.
pub const BRAND_HREF: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub label: &'static str,
}

pub const PAGES: [Page; 3] = [
    Page { label: "Demo" },
    Page { label: "Creator" },
    Page { label: "Fan" },
];

/// Visible characters kept when shortening an address for the button label.
pub const TRUNCATE_LEN: usize = 5;
pub const ELLIPSIS: &str = "...";

/// How long the silent probe waits for a provider injected after page load.
pub const DETECT_TIMEOUT_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
}

impl Palette {
    /// Inline style declaring the palette as CSS custom properties.
    pub fn css_vars(&self) -> String {
        format!(
            "--bg-default: {}; --bg-surface: {}; --text-primary: {}; --text-muted: {}; --accent: {};",
            self.background, self.surface, self.text, self.text_muted, self.accent
        )
    }
}

pub const DARK: Palette = Palette {
    background: "#121212",
    surface: "#272727",
    text: "#ffffff",
    text_muted: "rgba(255, 255, 255, 0.7)",
    accent: "#90caf9",
};
