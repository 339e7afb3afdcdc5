//! Locate elements in a parsed document by tag, attributes and contained text.
//!
//! Lookups never fail: absence is `None` (or an empty `Vec`) and the caller
//! decides whether that is a `ShapeMismatch`.

use scraper::{ElementRef, Html};

/// Attribute filter: every `(name, value)` pair must match.
///
/// For `class` the value is a whitespace-separated list of class tokens that
/// must all be present on the element, so both `"body-table"` and the full
/// `"table etf-data-table"` string match. Other attributes compare exactly.
pub type Attrs<'s> = &'s [(&'s str, &'s str)];

/// First element named `tag` (matching `attrs`) whose text contains `text`,
/// after skipping `skip` earlier matches. Elements are scanned in document
/// order.
#[must_use]
pub fn find_by_text<'a>(
    doc: &'a Html,
    tag: &str,
    text: &str,
    attrs: Attrs<'_>,
    skip: usize,
) -> Option<ElementRef<'a>> {
    find_all_in(doc.root_element(), tag, attrs)
        .into_iter()
        .filter(|el| el.text().collect::<String>().contains(text))
        .nth(skip)
}

/// First element named `tag` matching `attrs`, in document order.
#[must_use]
pub fn find_first<'a>(doc: &'a Html, tag: &str, attrs: Attrs<'_>) -> Option<ElementRef<'a>> {
    find_in(doc.root_element(), tag, attrs)
}

/// First descendant of `scope` named `tag` matching `attrs`.
#[must_use]
pub fn find_in<'a>(scope: ElementRef<'a>, tag: &str, attrs: Attrs<'_>) -> Option<ElementRef<'a>> {
    descendants(scope).find(|el| is_match(el, tag, attrs))
}

/// Every descendant of `scope` named `tag` matching `attrs`, in document order.
#[must_use]
pub fn find_all_in<'a>(scope: ElementRef<'a>, tag: &str, attrs: Attrs<'_>) -> Vec<ElementRef<'a>> {
    descendants(scope)
        .filter(|el| is_match(el, tag, attrs))
        .collect()
}

/// Direct element children of `scope` named `tag`.
#[must_use]
pub fn children_named<'a>(scope: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    scope
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name().eq_ignore_ascii_case(tag))
        .collect()
}

/// First element named `tag` that comes after `anchor` in document order.
#[must_use]
pub fn find_next_after<'a>(
    doc: &'a Html,
    anchor: ElementRef<'a>,
    tag: &str,
) -> Option<ElementRef<'a>> {
    doc.root_element()
        .descendants()
        .skip_while(|node| node.id() != anchor.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name().eq_ignore_ascii_case(tag))
}

/// First following sibling element named `tag`.
#[must_use]
pub fn next_sibling_element<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sib| sib.value().name().eq_ignore_ascii_case(tag))
}

/// Concatenated text content with runs of whitespace collapsed and trimmed.
#[must_use]
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Concatenated text content, untouched.
#[must_use]
pub fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

fn descendants(scope: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    scope.descendants().skip(1).filter_map(ElementRef::wrap)
}

fn is_match(el: &ElementRef<'_>, tag: &str, attrs: Attrs<'_>) -> bool {
    el.value().name().eq_ignore_ascii_case(tag) && matches_attrs(el, attrs)
}

fn matches_attrs(el: &ElementRef<'_>, attrs: Attrs<'_>) -> bool {
    attrs.iter().all(|(name, wanted)| {
        if name.eq_ignore_ascii_case("class") {
            let present: Vec<&str> = el.value().classes().collect();
            let mut tokens = wanted.split_whitespace().peekable();
            tokens.peek().is_some() && tokens.all(|t| present.contains(&t))
        } else {
            el.value().attr(name) == Some(*wanted)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <html><body>
          <h3>Top 10 Holdings</h3>
          <div><p>filler</p></div>
          <table id="first"><tr><td>A</td></tr></table>
          <div class="data-overview mt-4 mb-3">
            <div class="vallabel">Fund size</div><span>x</span><div class="val">EUR 90,000 m</div>
          </div>
        </body></html>"#;

    #[test]
    fn next_after_skips_unrelated_elements() {
        let doc = Html::parse_document(DOC);
        let h3 = find_by_text(&doc, "h3", "Top 10", &[], 0).unwrap();
        let table = find_next_after(&doc, h3, "table").unwrap();
        assert_eq!(table.value().attr("id"), Some("first"));
    }

    #[test]
    fn class_filter_accepts_token_or_full_string() {
        let doc = Html::parse_document(DOC);
        assert!(find_first(&doc, "div", &[("class", "data-overview")]).is_some());
        assert!(find_first(&doc, "div", &[("class", "data-overview mt-4 mb-3")]).is_some());
        assert!(find_first(&doc, "div", &[("class", "missing")]).is_none());
    }

    #[test]
    fn sibling_and_text_helpers() {
        let doc = Html::parse_document(DOC);
        let label = find_first(&doc, "div", &[("class", "vallabel")]).unwrap();
        let value = next_sibling_element(label, "div").unwrap();
        assert_eq!(text_of(value), "EUR 90,000 m");
    }
}
