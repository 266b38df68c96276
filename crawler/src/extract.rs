use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"(?u)\p{L}[\p{L}\p{N}_']*").expect("valid regex");
    static ref LINK_SEL: Selector = Selector::parse("a[href]").expect("valid selector");
}

/// Links and word tokens pulled out of one fetched page.
#[derive(Debug, Default)]
pub struct Extraction {
    pub links: Vec<Url>,
    pub words: Vec<String>,
}

/// Parses `body` as HTML and extracts:
///
/// - the target of every `<a href>`, resolved to an absolute URL against
///   `base` (relative, protocol-relative and absolute forms all work) with
///   the fragment stripped; non-http(s) targets are dropped;
/// - the word tokens of the visible text, case preserved, with the contents
///   of `script`, `style` and `noscript` elements excluded.
///
/// The html5ever parser error-corrects whatever it is given, so malformed
/// markup degrades to a smaller (possibly empty) extraction rather than an
/// error.
pub fn extract(base: &Url, body: &str) -> Extraction {
    let doc = Html::parse_document(body);

    let mut links = Vec::new();
    for anchor in doc.select(&LINK_SEL) {
        if let Some(href) = anchor.value().attr("href") {
            if let Ok(mut target) = Url::parse(href).or_else(|_| base.join(href)) {
                if target.scheme().starts_with("http") {
                    target.set_fragment(None);
                    links.push(target);
                }
            }
        }
    }

    let mut text = String::new();
    visible_text(doc.root_element(), &mut text);
    let words = WORD_RE
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect();

    Extraction { links, words }
}

fn visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(text);
                out.push(' ');
            }
            Node::Element(el) => {
                if matches!(el.name(), "script" | "style" | "noscript") {
                    continue;
                }
                if let Some(child_el) = ElementRef::wrap(child) {
                    visible_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://x/dir/page").unwrap()
    }

    fn link_strs(ex: &Extraction) -> Vec<&str> {
        ex.links.iter().map(|u| u.as_str()).collect()
    }

    #[test]
    fn resolves_relative_and_absolute_links() {
        let ex = extract(
            &base(),
            r#"<a href="other">a</a>
               <a href="/top">b</a>
               <a href="//y/over">c</a>
               <a href="http://z/abs">d</a>"#,
        );
        assert_eq!(
            link_strs(&ex),
            vec![
                "http://x/dir/other",
                "http://x/top",
                "http://y/over",
                "http://z/abs",
            ]
        );
    }

    #[test]
    fn strips_fragments_from_links() {
        let ex = extract(&base(), r#"<a href="page2#section1">a</a>"#);
        assert_eq!(link_strs(&ex), vec!["http://x/dir/page2"]);
    }

    #[test]
    fn drops_non_http_links() {
        let ex = extract(
            &base(),
            r#"<a href="mailto:me@x">a</a><a href="javascript:void(0)">b</a>"#,
        );
        assert!(ex.links.is_empty());
    }

    #[test]
    fn collects_visible_words_preserving_case() {
        let ex = extract(&base(), "<p>Rust makes Crawlers fun</p>");
        assert_eq!(ex.words, vec!["Rust", "makes", "Crawlers", "fun"]);
    }

    #[test]
    fn skips_script_and_style_text() {
        let ex = extract(
            &base(),
            r#"<style>body { color: red }</style>
               <script>var hidden = 1;</script>
               <noscript>fallback</noscript>
               <p>shown</p>"#,
        );
        assert_eq!(ex.words, vec!["shown"]);
    }

    #[test]
    fn malformed_markup_yields_empty_extraction() {
        let ex = extract(&base(), "<<<>>><a</");
        assert!(ex.links.is_empty());
        assert!(ex.words.is_empty());
    }
}
