// Folio site content
//
// Copy, links and card colors for the page. Treated as static configuration:
// the defaults reproduce the published portfolio, a JSON file can replace them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Section accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Cyan,
    Purple,
    Pink,
    Emerald,
}

impl Accent {
    /// CSS color value for headings in this accent
    pub fn css_color(&self) -> &'static str {
        match self {
            Accent::Cyan => "#22d3ee",
            Accent::Purple => "#c084fc",
            Accent::Pink => "#f472b6",
            Accent::Emerald => "#34d399",
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accent::Cyan => write!(f, "cyan"),
            Accent::Purple => write!(f, "purple"),
            Accent::Pink => write!(f, "pink"),
            Accent::Emerald => write!(f, "emerald"),
        }
    }
}

/// Two-stop gradient used as a card border
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub from: String,
    pub to: String,
}

impl Gradient {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn to_css(&self) -> String {
        format!("linear-gradient(to bottom right, {}, {})", self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioCard {
    pub title: String,
    pub gradient: Gradient,
    #[serde(default = "placeholder_href")]
    pub href: String,
}

impl PortfolioCard {
    pub fn new(title: impl Into<String>, gradient: Gradient) -> Self {
        Self {
            title: title.into(),
            gradient,
            href: placeholder_href(),
        }
    }
}

fn placeholder_href() -> String {
    "#".to_string()
}

/// Visual weight of a contact button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Filled button
    Primary,
    /// Outlined button
    #[default]
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub kind: LinkKind,
}

impl ContactLink {
    pub fn primary(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            kind: LinkKind::Primary,
        }
    }

    pub fn secondary(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            kind: LinkKind::Secondary,
        }
    }

    /// Links leaving the site open in a new tab
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

/// Everything the page says
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub about: String,
    pub highlights: Vec<String>,
    pub portfolio: Vec<PortfolioCard>,
    pub portfolio_note: Option<String>,
    pub contact: Vec<ContactLink>,
}

impl SiteContent {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        let email = "dev@example.com";
        Self {
            name: "Dev Doshi".to_string(),
            tagline: "Biomedical Engineer • Researcher • Artist".to_string(),
            email: email.to_string(),
            about: "I’m passionate about bridging technology, medicine, and creativity. My \
                    journey spans biomedical research, art, and leadership—blending science \
                    with storytelling to shape the future of healthcare and discovery."
                .to_string(),
            highlights: vec![
                "🏅 Goldwater Scholar & Honors Researcher".to_string(),
                "🧬 Projects in neuroscience, cardiology, and genomics".to_string(),
                "🎨 Nationally recognized artist & creative innovator".to_string(),
                "🌍 President of NJIT HOSA — leading future medical leaders".to_string(),
            ],
            portfolio: vec![
                PortfolioCard::new("🎨 Artwork", Gradient::new("#8b5cf6", "#22d3ee")),
                PortfolioCard::new("🧠 Research", Gradient::new("#ec4899", "#c084fc")),
                PortfolioCard::new("📚 Publications", Gradient::new("#06b6d4", "#60a5fa")),
                PortfolioCard::new("🌍 Leadership", Gradient::new("#374151", "#111827")),
            ],
            portfolio_note: Some(
                "Tip: replace these cards with links to Google Drive folders, PDFs, or \
                 image galleries when you’re ready."
                    .to_string(),
            ),
            contact: vec![
                ContactLink::primary("Email", format!("mailto:{}", email)),
                ContactLink::secondary("LinkedIn", "https://www.linkedin.com/"),
                ContactLink::secondary("GitHub", "https://github.com/devdoshi0919"),
            ],
        }
    }
}
