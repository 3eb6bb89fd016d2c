//! Image candidate extraction from a web page.
//!
//! Consumes the page visitor's element-match events and produces the list of
//! candidate image references in first-seen document order. Two rules are
//! registered: OpenGraph `og:image` meta declarations and plain `<img>`
//! elements. Raw attribute values pass through the URL normalizer before
//! being stored and before the display name is derived.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::error::Error;
use crate::model::ImageCandidate;
use crate::page::PageVisitor;
use crate::url_utils::{candidate_name, normalize_image_url};

/// Selector for OpenGraph thumbnail declarations, used by sites such as
/// Facebook and Reddit to pick a page's featured image.
const OG_IMAGE_SELECTOR: &str = r#"meta[property="og:image"][content]"#;

/// Selector for plain image elements.
const IMG_SELECTOR: &str = "img[src]";

/// Fetch `page_url` and collect its image candidates.
///
/// A blank `page_url` yields an empty list without a network round trip. A
/// transport failure during the page fetch is returned alongside whatever
/// candidates were collected before it, as a best-effort partial result.
#[must_use]
pub fn extract_image_nodes(page_url: &str) -> (Vec<ImageCandidate>, Option<Error>) {
    if page_url.trim().is_empty() {
        return (Vec::new(), None);
    }
    collect_candidates(page_url, |visitor| visitor.visit(page_url))
}

/// Collect image candidates from caller-provided HTML, no network.
#[must_use]
pub fn image_nodes_from_html(page_url: &str, html: &str) -> Vec<ImageCandidate> {
    let (candidates, _) = collect_candidates(page_url, |visitor| visitor.visit_html(html));
    candidates
}

fn collect_candidates<F>(page_url: &str, drive: F) -> (Vec<ImageCandidate>, Option<Error>)
where
    F: FnOnce(&mut PageVisitor),
{
    let candidates = Rc::new(RefCell::new(Vec::new()));
    let failure = Rc::new(RefCell::new(None));

    {
        let mut visitor = PageVisitor::new();

        let sink = Rc::clone(&candidates);
        let page = page_url.to_string();
        visitor.on_match(OG_IMAGE_SELECTOR, "content", move |element| {
            if let Some(content) = element.attr("content") {
                let url = normalize_image_url(&page, &content);
                sink.borrow_mut().push(ImageCandidate {
                    name: candidate_name(&url),
                    alt_text: String::new(),
                    url,
                    is_open_graph_image: true,
                });
            }
        });

        let sink = Rc::clone(&candidates);
        let page = page_url.to_string();
        visitor.on_match(IMG_SELECTOR, "src", move |element| {
            if let Some(src) = element.attr("src") {
                let url = normalize_image_url(&page, &src);
                sink.borrow_mut().push(ImageCandidate {
                    name: candidate_name(&url),
                    alt_text: element.attr("alt").unwrap_or_default(),
                    url,
                    is_open_graph_image: false,
                });
            }
        });

        let sink = Rc::clone(&failure);
        visitor.on_error(move |err| {
            *sink.borrow_mut() = Some(err);
        });

        drive(&mut visitor);
    }

    let candidates = candidates.take();
    debug!("extracted {} image candidates from {page_url}", candidates.len());
    (candidates, failure.take())
}
