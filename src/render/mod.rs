//! Rendering of the introduction page.
//!
//! [`PageRenderer`] turns the site metadata, a page context, and the ORCID badge into a document
//! tree. The tree is then serialized by [`html::to_html`] and wrapped in page chrome by
//! [`layout::Layout`]. Rendering itself can't fail and never touches the filesystem; everything it
//! needs has already been loaded by the time it runs.

pub mod html;
pub mod layout;
pub mod tree;

use crate::site::{Author, ImageAsset, PageContext, SiteMetadata};
use tree::{Element, Node};

/// Label that leads the byline
const BYLINE_LABEL: &str = "Edited by ";

/// Alt text for the ORCID badge
const ORCID_ALT: &str = "ORCID logo";

pub struct PageRenderer;

impl PageRenderer {
    /// Render the page body: title, optional page title, byline, and page content
    pub fn render(site: &SiteMetadata, page: &PageContext, orcid_badge: &ImageAsset) -> Node {
        let mut container = Element::new("main")
            .class("container container-md")
            .child(
                Element::new("h2")
                    .class("typography-h3")
                    .child(Node::markup(&site.html_title)),
            );

        if let Some(title) = page.title() {
            container = container.child(
                Element::new("h3")
                    .class("typography-h4")
                    .child(Node::markup(title)),
            );
        }

        container
            .child(Self::byline(&site.authors, orcid_badge))
            .child(
                Element::new("div")
                    .class("typography-body1")
                    .child(Node::markup(&page.html)),
            )
            .into()
    }

    /// The "Edited by" block, one line per author
    fn byline(authors: &[Author], orcid_badge: &ImageAsset) -> Element {
        let mut byline = Element::new("h4")
            .class("typography-h5")
            .child(Node::text(BYLINE_LABEL));

        // a lone author stays on the same line as the label
        if authors.len() > 1 {
            byline = byline.child(Node::line_break());
        }

        byline.children(
            authors
                .iter()
                .map(|author| Self::author_line(author, orcid_badge)),
        )
    }

    fn author_line(author: &Author, orcid_badge: &ImageAsset) -> Node {
        let mut line = vec![Node::text(author.to_string())];

        if let Some(url) = author.orcid_url() {
            line.push(
                Element::new("a")
                    .attr("href", url)
                    .child(
                        Element::new("img")
                            .attr("src", &orcid_badge.src)
                            .attr("width", orcid_badge.width)
                            .attr("alt", ORCID_ALT),
                    )
                    .into(),
            );
        }
        line.push(Node::line_break());

        Node::fragment(Some(author.last.clone()), line)
    }

    /// Keys that appear more than once in the rendered byline. Authors sharing a key are
    /// indistinguishable to anything consuming the tree by key.
    pub fn duplicate_keys(site: &SiteMetadata) -> Vec<&str> {
        site.duplicate_last_names()
    }
}

#[cfg(test)]
mod test {
    use super::html::to_html;
    use super::*;
    use crate::site::AuthorBuilder;
    use std::path::PathBuf;

    fn badge() -> ImageAsset {
        ImageAsset {
            path: PathBuf::from("assets/orcid.png"),
            src: "static/orcid.png".to_string(),
            width: 16,
        }
    }

    fn smith() -> Author {
        AuthorBuilder::default()
            .first("A")
            .last("Smith")
            .affiliation("X")
            .orcid("0000-0001")
            .build()
            .expect("can build author")
    }

    fn jones() -> Author {
        AuthorBuilder::default()
            .first("B")
            .middle("C.")
            .last("Jones")
            .affiliation("Y")
            .affiliation("Z")
            .build()
            .expect("can build author")
    }

    fn site(authors: Vec<Author>) -> SiteMetadata {
        SiteMetadata {
            html_title: "The <i>Collected</i> Essays".to_string(),
            authors,
        }
    }

    fn byline(node: &Node) -> &Element {
        node.find_all("h4")
            .into_iter()
            .next()
            .expect("page has a byline")
    }

    #[test]
    fn single_author_byline_has_no_leading_break() {
        let page = PageRenderer::render(&site(vec![smith()]), &PageContext::new(""), &badge());
        let byline = byline(&page);

        assert_eq!(byline.children[0], Node::text("Edited by "));
        assert!(matches!(byline.children[1], Node::Fragment { .. }));
        assert_eq!(
            to_html(&byline.clone().into()),
            r#"<h4 class="typography-h5">Edited by A  Smith, X<a href="https://orcid.org/0000-0001"><img src="static/orcid.png" width="16" alt="ORCID logo"/></a><br/></h4>"#
        );
    }

    #[test]
    fn multiple_author_byline_has_leading_break() {
        let page = PageRenderer::render(
            &site(vec![smith(), jones()]),
            &PageContext::new(""),
            &badge(),
        );
        let byline = byline(&page);

        assert_eq!(byline.children[1], Node::line_break());
        assert_eq!(
            to_html(&byline.clone().into()),
            r#"<h4 class="typography-h5">Edited by <br/>A  Smith, X<a href="https://orcid.org/0000-0001"><img src="static/orcid.png" width="16" alt="ORCID logo"/></a><br/>B C. Jones, Y, Z<br/></h4>"#
        );
    }

    #[test]
    fn authors_keep_their_order() {
        let page = PageRenderer::render(
            &site(vec![jones(), smith()]),
            &PageContext::new(""),
            &badge(),
        );
        let byline: Node = byline(&page).clone().into();
        assert_eq!(byline.keys(), vec!["Jones", "Smith"]);
    }

    #[test]
    fn orcid_link_only_for_authors_with_orcid() {
        let page = PageRenderer::render(
            &site(vec![smith(), jones()]),
            &PageContext::new(""),
            &badge(),
        );

        let links = page.find_all("a");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].get_attr("href"), Some("https://orcid.org/0000-0001"));
        assert_eq!(page.find_all("img").len(), 1);
    }

    #[test]
    fn page_title_only_when_present() {
        let site = site(vec![smith()]);

        let page = PageRenderer::render(&site, &PageContext::new("<p/>"), &badge());
        assert!(page.find_all("h3").is_empty());

        let page = PageRenderer::render(&site, &PageContext::new("<p/>").with_title(""), &badge());
        assert!(page.find_all("h3").is_empty());

        let page = PageRenderer::render(
            &site,
            &PageContext::new("<p/>").with_title("Part <b>One</b>"),
            &badge(),
        );
        let headings = page.find_all("h3");
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].children, vec![Node::markup("Part <b>One</b>")]);
    }

    #[test]
    fn title_and_body_are_inserted_verbatim() {
        let page = PageRenderer::render(
            &site(vec![smith()]),
            &PageContext::new("<p>Body & <b>soul</b></p>"),
            &badge(),
        );
        let html = to_html(&page);

        assert!(html.starts_with(
            r#"<main class="container container-md"><h2 class="typography-h3">The <i>Collected</i> Essays</h2><h4"#
        ));
        assert!(html.ends_with(
            r#"<div class="typography-body1"><p>Body & <b>soul</b></p></div></main>"#
        ));
    }

    #[test]
    fn author_names_are_escaped() {
        let mut author = jones();
        author.first = "<script>".to_string();
        let page = PageRenderer::render(&site(vec![author]), &PageContext::new(""), &badge());

        assert!(to_html(&page).contains("&lt;script&gt; C. Jones, Y, Z"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let site = site(vec![smith(), jones()]);
        let page = PageContext::new("<p>Body</p>").with_title("Preface");

        let a = PageRenderer::render(&site, &page, &badge());
        let b = PageRenderer::render(&site, &page, &badge());
        assert_eq!(a, b);
        assert_eq!(to_html(&a), to_html(&b));
    }

    #[test]
    fn empty_orcid_renders_no_link() {
        let author: Author = toml::from_str(
            r#"
first = "A"
last = "Smith"
affiliations = ["X"]
orcid = ""
"#,
        )
        .expect("can parse author");
        let page = PageRenderer::render(&site(vec![author]), &PageContext::new(""), &badge());
        let html = to_html(&page);

        assert!(!html.contains("orcid.org"));
        assert!(page.find_all("img").is_empty());
        assert!(html.contains("Edited by A  Smith, X<br/>"));
    }

    #[test]
    fn no_authors_still_renders_label() {
        let page = PageRenderer::render(&site(Vec::new()), &PageContext::new(""), &badge());
        assert_eq!(
            to_html(&byline(&page).clone().into()),
            r#"<h4 class="typography-h5">Edited by </h4>"#
        );
    }

    #[test]
    fn duplicate_keys_are_reported() {
        let mut other_smith = jones();
        other_smith.last = "Smith".to_string();
        let site = site(vec![smith(), jones(), other_smith]);

        assert_eq!(PageRenderer::duplicate_keys(&site), vec!["Smith"]);
        let page = PageRenderer::render(&site, &PageContext::new(""), &badge());
        let byline: Node = byline(&page).clone().into();
        assert_eq!(byline.keys(), vec!["Smith", "Jones", "Smith"]);
    }
}
