use scraper::ElementRef;

use crate::error::StructuralError;

const REQUEST_HEADER: &str = "Request:";
const RESPONSE_HEADER: &str = "Response:";
const ERRORS_HEADER: &str = "Errors:";

/// Classification bucket for sample nodes. A header child re-arms the tag;
/// every `<pre>` child lands in whichever bucket is armed when it is seen.
#[derive(Clone, Copy)]
enum Section {
    Request,
    Response,
    Error,
}

#[derive(Debug, Default)]
pub struct Samples {
    pub requests: Vec<String>,
    pub responses: Vec<String>,
    pub errors: Vec<String>,
}

/// Single forward pass over the block's non-text children, anchored at the
/// first `Request:` header. Headers may repeat; samples accumulate per bucket
/// in document order. Everything that is neither a header nor a `<pre>` is
/// ignored.
pub fn collect(block: ElementRef, endpoint: &str) -> Result<Samples, StructuralError> {
    let children: Vec<ElementRef> = block.children().filter_map(ElementRef::wrap).collect();

    let anchor = children
        .iter()
        .position(|el| el.text().collect::<String>() == REQUEST_HEADER)
        .ok_or_else(|| StructuralError::MissingRequestAnchor {
            endpoint: endpoint.to_string(),
        })?;

    let mut section = Section::Request;
    let mut samples = Samples::default();

    for el in &children[anchor..] {
        match el.text().collect::<String>().as_str() {
            REQUEST_HEADER => section = Section::Request,
            RESPONSE_HEADER => section = Section::Response,
            ERRORS_HEADER => section = Section::Error,
            _ => {}
        }

        if el.value().name() != "pre" {
            continue;
        }

        let text = el.text().collect::<String>();
        match section {
            Section::Request => samples.requests.push(text),
            Section::Response => samples.responses.push(text),
            Section::Error => samples.errors.push(text),
        }
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn collect_from(children: &str) -> Result<Samples, StructuralError> {
        let html = format!("<div>{children}</div>");
        let doc = Html::parse_fragment(&html);
        let sel = Selector::parse("div").unwrap();
        let block = doc.select(&sel).next().unwrap();
        collect(block, "test")
    }

    #[test]
    fn one_sample_per_section() {
        let s = collect_from(concat!(
            "<b>Request:</b><pre>GET /api/salt/</pre>",
            "<b>Response:</b><pre>200 OK</pre>",
            "<b>Errors:</b><pre>FATAL_1 = Bad password</pre>",
        ))
        .unwrap();
        assert_eq!(s.requests, ["GET /api/salt/"]);
        assert_eq!(s.responses, ["200 OK"]);
        assert_eq!(s.errors, ["FATAL_1 = Bad password"]);
    }

    #[test]
    fn missing_anchor_is_fatal() {
        let err = collect_from("<b>Response:</b><pre>200 OK</pre>").unwrap_err();
        assert!(matches!(err, StructuralError::MissingRequestAnchor { .. }));
    }

    #[test]
    fn repeated_headers_accumulate() {
        let s = collect_from(concat!(
            "<b>Request:</b>",
            "<b>Response:</b><pre>first</pre>",
            "<b>Errors:</b><pre>oops</pre>",
            "<b>Response:</b><pre>second</pre>",
        ))
        .unwrap();
        assert!(s.requests.is_empty());
        assert_eq!(s.responses, ["first", "second"]);
        assert_eq!(s.errors, ["oops"]);
    }

    #[test]
    fn samples_keep_document_order() {
        let s = collect_from(concat!(
            "<b>Request:</b><pre>one</pre><pre>two</pre><pre>three</pre>",
        ))
        .unwrap();
        assert_eq!(s.requests, ["one", "two", "three"]);
    }

    #[test]
    fn samples_before_anchor_never_collected() {
        let s = collect_from("<pre>stray</pre><b>Request:</b><pre>real</pre>").unwrap();
        assert_eq!(s.requests, ["real"]);
    }

    #[test]
    fn header_match_is_exact() {
        // "Response" without the colon is just an ignored child.
        let s = collect_from(concat!(
            "<b>Request:</b><pre>one</pre>",
            "<b>Response</b><pre>two</pre>",
        ))
        .unwrap();
        assert_eq!(s.requests, ["one", "two"]);
        assert!(s.responses.is_empty());
    }

    #[test]
    fn non_pre_children_ignored() {
        let s = collect_from(concat!(
            "<b>Request:</b>",
            "<span>curl example below</span>",
            "<pre>GET /api/login/</pre>",
            "<div>trailing note</div>",
        ))
        .unwrap();
        assert_eq!(s.requests, ["GET /api/login/"]);
    }

    #[test]
    fn sample_text_comes_out_decoded() {
        let s = collect_from("<b>Request:</b><pre>&lt;request type=\"salt\"/&gt;</pre>").unwrap();
        assert_eq!(s.requests, ["<request type=\"salt\"/>"]);
    }
}
