// Folio site generation
//
// Content goes in, one static `index.html` comes out:
//
// ```text
// SiteContent ──compose──▶ Page ──render──▶ Markup ──build──▶ <out>/index.html
//                  ▲
//            SiteContext (year fixed at startup)
// ```
//
// Every animated element carries its `AnimationProfile`; the inline script in
// the page hands those to the browser's IntersectionObserver.

mod builder;
mod error;
pub mod page;
pub mod render;

pub use builder::{build, load_content, validate, BuildReport, INDEX_FILE};
pub use error::{SiteError, SiteResult};
pub use page::{Page, SiteContext};
pub use render::render_page;

#[cfg(test)]
mod unit;
