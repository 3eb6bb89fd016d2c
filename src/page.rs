//! Page fetching and DOM matching.
//!
//! `PageVisitor` is the page-fetch/DOM-match collaborator: it performs one
//! HTTP GET, parses the response HTML, and invokes registered match callbacks
//! once per matching element. Elements are walked in document order and every
//! rule is tested against each element, so callbacks for different rules
//! interleave in first-seen document order. Terminal failures are signalled
//! through a separate error callback rather than a return value.

use std::time::Duration;

use dom_query::{Document, Selection};
use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::error::Error;

/// Default timeout applied to the page request.
const PAGE_TIMEOUT: Duration = Duration::from_secs(30);

/// Attribute access for an element handed to a match callback.
pub struct MatchedElement<'a, 'b> {
    selection: &'a Selection<'b>,
}

impl MatchedElement<'_, '_> {
    /// Get an attribute value of the matched element.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<String> {
        self.selection.attr(name).map(|value| value.to_string())
    }
}

type MatchCallback<'a> = Box<dyn FnMut(&MatchedElement) + 'a>;
type ErrorCallback<'a> = Box<dyn FnMut(Error) + 'a>;

struct MatchRule<'a> {
    selector: String,
    attribute: String,
    callback: MatchCallback<'a>,
}

/// One-shot page visitor with `(selector, attribute) -> callback` match rules.
pub struct PageVisitor<'a> {
    rules: Vec<MatchRule<'a>>,
    error_handler: Option<ErrorCallback<'a>>,
}

impl Default for PageVisitor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PageVisitor<'a> {
    /// Visitor with no rules registered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            error_handler: None,
        }
    }

    /// Register a match rule. The callback fires once per element matching
    /// `selector` that carries `attribute`.
    pub fn on_match(
        &mut self,
        selector: &str,
        attribute: &str,
        callback: impl FnMut(&MatchedElement) + 'a,
    ) {
        self.rules.push(MatchRule {
            selector: selector.to_string(),
            attribute: attribute.to_string(),
            callback: Box::new(callback),
        });
    }

    /// Register the error handler invoked on a terminal fetch failure.
    pub fn on_error(&mut self, handler: impl FnMut(Error) + 'a) {
        self.error_handler = Some(Box::new(handler));
    }

    /// Fetch `page_url` and run the registered rules over the response HTML.
    ///
    /// Failures are delivered to the error handler; rules already matched
    /// before the failure keep whatever they produced.
    pub fn visit(&mut self, page_url: &str) {
        debug!("visiting page {page_url}");
        match fetch_page(page_url) {
            Ok(html) => self.visit_html(&html),
            Err(err) => self.report(err),
        }
    }

    /// Run the registered rules over caller-provided HTML, no network.
    pub fn visit_html(&mut self, html: &str) {
        let doc = Document::from(html);
        for node in doc.select("*").nodes() {
            let sel = Selection::from(*node);
            for rule in &mut self.rules {
                if sel.is(&rule.selector) && sel.has_attr(&rule.attribute) {
                    (rule.callback)(&MatchedElement { selection: &sel });
                }
            }
        }
    }

    fn report(&mut self, err: Error) {
        match &mut self.error_handler {
            Some(handler) => handler(err),
            None => warn!("page visit failed with no error handler registered: {err}"),
        }
    }
}

fn fetch_page(page_url: &str) -> Result<String, Error> {
    let client = Client::builder()
        .timeout(PAGE_TIMEOUT)
        .build()
        .map_err(|err| Error::Client(err.to_string()))?;

    let response = client.get(page_url).send().map_err(|err| Error::Transport {
        url: page_url.to_string(),
        reason: err.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            url: page_url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().map_err(|err| Error::Transport {
        url: page_url.to_string(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn rules_fire_in_document_order_across_selectors() {
        let html = r#"
            <html><head><meta property="og:image" content="/og.png"></head>
            <body><img src="/a.png"><meta property="og:image" content="/late.png"><img src="b.png"></body></html>
        "#;

        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let mut visitor = PageVisitor::new();

            let sink = Rc::clone(&seen);
            visitor.on_match(r#"meta[property="og:image"][content]"#, "content", move |el| {
                if let Some(content) = el.attr("content") {
                    sink.borrow_mut().push(format!("og:{content}"));
                }
            });

            let sink = Rc::clone(&seen);
            visitor.on_match("img[src]", "src", move |el| {
                if let Some(src) = el.attr("src") {
                    sink.borrow_mut().push(format!("img:{src}"));
                }
            });

            visitor.visit_html(html);
        }
        assert_eq!(
            seen.take(),
            vec!["og:/og.png", "img:/a.png", "og:/late.png", "img:b.png"]
        );
    }

    #[test]
    fn attribute_must_be_present_for_rule_to_fire() {
        let html = r#"<img src="/a.png"><img alt="no source">"#;
        let mut count = 0;
        {
            let mut visitor = PageVisitor::new();
            visitor.on_match("img", "src", |_| count += 1);
            visitor.visit_html(html);
        }
        assert_eq!(count, 1);
    }

    #[test]
    fn missing_attribute_reads_as_none() {
        let html = r#"<img src="/a.png">"#;
        let mut alt: Option<Option<String>> = None;
        {
            let mut visitor = PageVisitor::new();
            visitor.on_match("img[src]", "src", |el| alt = Some(el.attr("alt")));
            visitor.visit_html(html);
        }
        assert_eq!(alt, Some(None));
    }
}
