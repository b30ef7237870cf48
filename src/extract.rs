// src/extract.rs
//! Main-content extraction: strip boilerplate regions, pick the content
//! element, normalize its text for the model.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

/// Page regions removed before extraction, wherever they occur.
const REMOVE_CONTENT_SELECTORS: &[&str] = &[
    "[role='navigation']",
    "[role='search']",
    ".headerlink",
    "nav",
    "footer",
    "div.header",
    // Django Packages specific chrome
    "#myrotatingnav",
];

/// Candidate content regions in priority order; first selector with a match
/// wins, and only its first matching element is used.
const MAIN_CONTENT_SELECTORS: &[&str] = &["[role='main']", "main", "body"];

static REMOVE_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    REMOVE_CONTENT_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("boilerplate selector"))
        .collect()
});

static MAIN_SELECTORS: Lazy<Vec<(&'static str, Selector)>> = Lazy::new(|| {
    MAIN_CONTENT_SELECTORS
        .iter()
        .map(|s| (*s, Selector::parse(s).expect("main content selector")))
        .collect()
});

// The parser synthesizes <html>/<body> even for markup that has neither; an
// implicit body is not a content region, so the body fallback only fires when
// the source markup declares one.
static RE_BODY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<body[\s>/]").unwrap());

/// Preprocess HTML into lowercase, normalized plain text of the page's
/// primary content. Returns an empty string when no content region matches.
pub fn preprocess_html(html: &str) -> String {
    let mut document = Html::parse_document(html);

    // Drop boilerplate destructively, regardless of nesting.
    let mut boilerplate = Vec::new();
    for selector in REMOVE_SELECTORS.iter() {
        for element in document.select(selector) {
            boilerplate.push(element.id());
        }
    }
    for id in boilerplate {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }

    for (css, selector) in MAIN_SELECTORS.iter() {
        if *css == "body" && !RE_BODY_TAG.is_match(html) {
            continue;
        }
        if let Some(element) = document.select(selector).next() {
            let text = element.text().collect::<Vec<_>>().join(" ");
            return clean_text(&text);
        }
    }

    String::new()
}

/// Fixed normalization sequence, each stage consuming the previous stage's
/// output: unicode cleanup, punctuation removal, whitespace collapse, stray
/// tag removal. The result is lowercased.
pub fn clean_text(s: &str) -> String {
    // 1) Entity decode + fold typographic characters to ASCII
    let mut out = html_escape::decode_html_entities(s).to_string();
    out = out
        .replace(['\u{201C}', '\u{201D}', '\u{00AB}', '\u{00BB}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'")
        .replace(['\u{2013}', '\u{2014}'], "-")
        .replace('\u{00A0}', " ");

    // 2) Punctuation to spaces. `<` and `>` are symbols, not punctuation,
    //    so stray tags survive into stage 4.
    static RE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{P}+").unwrap());
    out = RE_PUNCT.replace_all(&out, " ").to_string();

    // 3) Collapse whitespace
    static RE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
    out = RE_WS.replace_all(&out, " ").to_string();
    out = out.trim().to_string();

    // 4) Strip stray tags (inline SVGs, *some* malformed HTML)
    static RE_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)</?[^>]+>").unwrap());
    out = RE_TAGS.replace_all(&out, "").to_string();

    out.to_lowercase()
}
