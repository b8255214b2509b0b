// Unit tests for the rendered document

use crate::page::{Page, SiteContext};
use crate::render::render_page;
use folio_utils::content::SiteContent;
use folio_utils::reveal::AnimationProfile;

fn render(content: &SiteContent) -> String {
    render_page(&Page::compose(content, SiteContext::new(2031))).into_string()
}

/// Decode every `data-reveal` attribute in document order
fn embedded_profiles(html: &str) -> Vec<AnimationProfile> {
    html.split("data-reveal=\"")
        .skip(1)
        .map(|rest| {
            let raw = &rest[..rest.find('"').unwrap()];
            serde_json::from_str(&raw.replace("&quot;", "\"")).unwrap()
        })
        .collect()
}

    #[test]
    fn test_one_reveal_attribute_per_animated_element() {
        let content = SiteContent::default();
        let page = Page::compose(&content, SiteContext::new(2031));
        let html = render_page(&page).into_string();

        assert_eq!(embedded_profiles(&html), page.profiles());
    }

    #[test]
    fn test_footer_year_from_context() {
        let html = render(&SiteContent::default());
        assert!(html.contains("© 2031 Dev Doshi — All Rights Reserved"));
    }

    #[test]
    fn test_nav_links_to_sections() {
        let html = render(&SiteContent::default());
        for anchor in ["#about", "#highlights", "#portfolio", "#contact"] {
            assert!(html.contains(&format!("href=\"{}\"", anchor)), "missing {}", anchor);
        }
        for id in ["about", "highlights", "portfolio", "contact"] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing section {}", id);
        }
    }

    #[test]
    fn test_elements_start_hidden() {
        let html = render(&SiteContent::default());
        assert!(html.contains("opacity: 0; transform: translate(0px, 0px);"));
        assert!(html.contains("opacity: 0; transform: translate(24px, 0px);"));
        assert!(html.contains("opacity: 0; transform: translate(-24px, 0px);"));
        assert!(html.contains("opacity: 0; transform: translate(0px, 24px);"));
    }

    #[test]
    fn test_content_is_escaped() {
        let content = SiteContent {
            about: "<script>alert(1)</script>".to_string(),
            ..SiteContent::default()
        };
        let html = render(&content);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert(1)"));
    }

    #[test]
    fn test_inline_assets_present() {
        let html = render(&SiteContent::default());
        assert!(html.contains("IntersectionObserver"));
        assert!(html.contains("<style>"));
        assert!(html.contains("Art &amp; Portfolio"));
    }
