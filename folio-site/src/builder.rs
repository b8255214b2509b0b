// Site output
//
// Loads content, renders the page and writes it to the output directory.

use crate::error::{SiteError, SiteResult};
use crate::page::{Page, SiteContext};
use crate::render::render_page;
use folio_utils::content::SiteContent;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the rendered page inside the output directory
pub const INDEX_FILE: &str = "index.html";

/// What a build produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub path: PathBuf,
    pub bytes: usize,
    pub animated_elements: usize,
}

/// Read content from `path`, or use the built-in content when no path is given
pub fn load_content(path: Option<&Path>) -> SiteResult<SiteContent> {
    let content = match path {
        Some(path) => {
            debug!("Folio: loading content from {}", path.display());
            let raw = fs::read_to_string(path)
                .map_err(|e| SiteError::Io(format!("{}: {}", path.display(), e)))?;
            serde_json::from_str(&raw)
                .map_err(|e| SiteError::ContentParse(format!("{}: {}", path.display(), e)))?
        },
        None => {
            debug!("Folio: using built-in content");
            SiteContent::default()
        },
    };
    validate(&content)?;
    Ok(content)
}

/// Reject content that cannot produce a usable page
pub fn validate(content: &SiteContent) -> SiteResult<()> {
    if content.name.trim().is_empty() {
        return Err(SiteError::InvalidContent("name must not be empty".to_string()));
    }
    if let Some(link) = content.contact.iter().find(|link| link.href.trim().is_empty()) {
        return Err(SiteError::InvalidContent(format!(
            "contact link '{}' has no target",
            link.label
        )));
    }
    Ok(())
}

/// Render `content` and write `<out_dir>/index.html`
pub fn build(out_dir: &Path, content: &SiteContent, context: SiteContext) -> SiteResult<BuildReport> {
    validate(content)?;

    let page = Page::compose(content, context);
    let html = render_page(&page).into_string();

    fs::create_dir_all(out_dir)
        .map_err(|e| SiteError::Io(format!("{}: {}", out_dir.display(), e)))?;
    let path = out_dir.join(INDEX_FILE);
    fs::write(&path, &html).map_err(|e| SiteError::Io(format!("{}: {}", path.display(), e)))?;

    let report = BuildReport {
        path,
        bytes: html.len(),
        animated_elements: page.animated_elements(),
    };
    info!(
        "Folio: wrote {} ({} bytes, {} animated elements)",
        report.path.display(),
        report.bytes,
        report.animated_elements
    );
    Ok(report)
}
