//! Static HTML rendering of the icon components

use dioxus::prelude::*;

use crate::components::{SocialIcon, SocialIconProps, SocialIcons, SocialIconsProps};
use crate::link::SocialLinkSpec;

/// The SSR writer emits attribute values verbatim, so user supplied urls and
/// classes are escaped before they reach the components.
fn escape_attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

fn escaped_spec(spec: &SocialLinkSpec) -> SocialLinkSpec {
    SocialLinkSpec {
        url: escape_attr(&spec.url),
        site: spec.site.clone(),
    }
}

/// Render one icon link to HTML. Unresolvable specs give an empty string.
pub fn render_icon(spec: &SocialLinkSpec, class: Option<&str>) -> String {
    let spec = escaped_spec(spec);
    let props = SocialIconProps {
        url: spec.url,
        site: spec.site,
        class: class.map(escape_attr),
    };

    let mut dom = VirtualDom::new_with_props(SocialIcon, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a list of icon links to HTML
pub fn render_icons(specs: &[SocialLinkSpec], class: Option<&str>) -> String {
    let props = SocialIconsProps {
        links: specs.iter().map(escaped_spec).collect(),
        class: class.map(escape_attr),
    };

    let mut dom = VirtualDom::new_with_props(SocialIcons, props);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    tracing::debug!(links = specs.len(), bytes = html.len(), "Rendered social icons");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::DEFAULT_CLASS;

    fn count_links(html: &str) -> usize {
        html.matches("<a ").count()
    }

    #[test]
    fn test_missing_site_renders_nothing() {
        let html = render_icon(&SocialLinkSpec::without_site("https://example.com"), None);
        assert_eq!(count_links(&html), 0);
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_unknown_site_renders_nothing() {
        let html = render_icon(&SocialLinkSpec::new("friendster", "https://example.com"), None);
        assert_eq!(count_links(&html), 0);
    }

    #[test]
    fn test_github_icon_link() {
        let html = render_icon(&SocialLinkSpec::new("github", "https://github.com/octo"), None);

        assert_eq!(count_links(&html), 1);
        assert!(html.contains(r#"href="https://github.com/octo""#));
        assert!(html.contains(r#"aria-label="github""#));
        assert!(html.contains(&format!(r#"class="{DEFAULT_CLASS}""#)));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("<svg"));
        assert!(html.contains(r#"viewBox="0 0 24 24""#));
    }

    #[test]
    fn test_twitter_view_box() {
        let html = render_icon(&SocialLinkSpec::new("twitter", "https://twitter.com/x"), None);
        assert!(html.contains(r#"viewBox="5 5 30 30""#));
    }

    #[test]
    fn test_class_override() {
        let spec = SocialLinkSpec::new("linkedin", "https://linkedin.com/in/someone");

        let html = render_icon(&spec, Some("footer-icon"));
        assert!(html.contains(r#"class="footer-icon""#));
        assert!(!html.contains(DEFAULT_CLASS));
    }

    #[test]
    fn test_url_cannot_break_out_of_href() {
        let url = r#"https://x" onmouseover="alert(1)&a=<b>"#;
        let html = render_icon(&SocialLinkSpec::new("github", url), None);

        assert!(!html.contains(r#"" onmouseover=""#));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&quot;"));
        assert!(html.contains("&amp;a="));
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn test_class_is_escaped() {
        let specs = vec![SocialLinkSpec::new("twitter", "https://twitter.com/x")];
        let html = render_icons(&specs, Some(r#"a" data-x="1"#));

        assert!(!html.contains(r#"" data-x=""#));
        assert!(html.contains(r#"class="a&quot; data-x=&quot;1""#));
    }

    #[test]
    fn test_svg_hidden_from_screen_readers() {
        let html = render_icon(&SocialLinkSpec::new("github", "https://github.com/octo"), None);
        assert!(html.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn test_relative_url_has_no_target() {
        let html = render_icon(&SocialLinkSpec::new("github", "/community/github"), None);
        assert!(html.contains(r#"href="/community/github""#));
        assert!(!html.contains("target="));
    }

    #[test]
    fn test_list_skips_unresolved_and_keeps_order() {
        let specs = vec![
            SocialLinkSpec::new("github", "a"),
            SocialLinkSpec::without_site("b"),
            SocialLinkSpec::new("linkedin", "c"),
        ];

        let html = render_icons(&specs, None);
        assert_eq!(count_links(&html), 2);

        let a = html.find(r#"href="a""#).expect("first link");
        let c = html.find(r#"href="c""#).expect("second link");
        assert!(a < c);
        assert!(!html.contains(r#"href="b""#));
    }

    #[test]
    fn test_list_shared_class() {
        let specs = vec![
            SocialLinkSpec::new("github", "a"),
            SocialLinkSpec::new("twitter", "b"),
        ];

        let html = render_icons(&specs, Some("shared"));
        assert_eq!(html.matches(r#"class="shared""#).count(), 2);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(count_links(&render_icons(&[], None)), 0);
    }
}
