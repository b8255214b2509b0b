use anyhow::Context;
use folio_client::animation::{AnimationEngine, RevealAnimation};
use folio_site::{BuildReport, SiteContext};
use folio_utils::reveal::compute_profile_from_tag;
use log::info;
use std::path::Path;

/// Render the site into `out`. The footer year is read from the clock here,
/// once, and handed down to the renderer.
pub(crate) fn build(out: &Path, content: Option<&Path>) -> anyhow::Result<BuildReport> {
    let context = SiteContext::from_clock();
    let content = folio_site::load_content(content).context("Failed to load site content")?;
    let report = folio_site::build(out, &content, context)
        .with_context(|| format!("Failed to build site into {}", out.display()))?;
    info!("Folio: site ready at {}", report.path.display());
    Ok(report)
}

pub(crate) fn profile(direction: Option<&str>, delay: Option<f64>) -> anyhow::Result<String> {
    let profile = compute_profile_from_tag(direction, delay);
    serde_json::to_string_pretty(&profile).context("Failed to serialize profile")
}

/// One line per sampled frame: elapsed seconds, opacity, x and y offset
pub(crate) fn preview(direction: Option<&str>, delay: Option<f64>, fps: u32) -> Vec<String> {
    let mut animation = RevealAnimation::new(compute_profile_from_tag(direction, delay)).with_fps(fps);
    let mut lines = vec!["t(s)\topacity\tx\ty".to_string()];
    while let Some(frame) = animation.next_frame() {
        lines.push(format!(
            "{:.3}\t{:.3}\t{:.2}\t{:.2}",
            frame.elapsed, frame.opacity, frame.offset.x, frame.offset.y
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_json_for_unknown_direction() {
        let sideways = profile(Some("sideways"), None).unwrap();
        let up = profile(Some("up"), Some(0.0)).unwrap();
        assert_eq!(sideways, up);
        assert!(up.contains("\"fireOnce\": true"));
    }

    #[test]
    fn test_preview_starts_hidden_and_ends_at_rest() {
        let lines = preview(Some("left"), None, 10);
        assert_eq!(lines[0], "t(s)\topacity\tx\ty");
        assert_eq!(lines[1], "0.000\t0.000\t24.00\t0.00");
        assert_eq!(lines.last().unwrap(), "0.700\t1.000\t0.00\t0.00");
    }

    #[test]
    fn test_preview_returns_for_non_finite_delay() {
        let lines = preview(Some("up"), Some(f64::NAN), 30);
        assert_eq!(lines.len(), 2);

        let lines = preview(Some("up"), Some(f64::INFINITY), 30);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "0.000\t0.000\t0.00\t24.00");
    }

    #[test]
    fn test_build_into_tempdir() {
        let dir = tempfile::tempdir().unwrap();
        let report = build(dir.path(), None).unwrap();
        assert!(report.path.exists());
        assert!(report.animated_elements > 0);
    }
}
