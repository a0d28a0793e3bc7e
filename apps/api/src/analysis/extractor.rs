//! Text extraction: turns a fetched HTML page into one normalized line of visible text.

use encoding_rs::{Encoding, UTF_8};
use scraper::{Html, Node};
use thiserror::Error;

/// Elements whose whole subtree is dropped, text included.
const NON_CONTENT_TAGS: [&str; 2] = ["script", "style"];

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("page is not valid {encoding} markup")]
    Malformed { encoding: &'static str },
}

/// Decodes `raw` and returns its visible text in document order with every
/// whitespace run collapsed to one space and both ends trimmed.
///
/// `charset` is the label from the response's `Content-Type`; UTF-8 is assumed
/// when it is absent or unknown. A byte-order mark overrides both.
pub fn extract_text(raw: &[u8], charset: Option<&str>) -> Result<String, ParseError> {
    let html = decode(raw, charset)?;
    let document = Html::parse_document(&html);

    let mut text = String::with_capacity(html.len() / 2);
    for node in document.tree.root().descendants() {
        if let Node::Text(fragment) = node.value() {
            if !node.ancestors().any(|ancestor| is_non_content(ancestor.value())) {
                text.push_str(fragment);
            }
        }
    }

    Ok(normalize_whitespace(&text))
}

/// Collapses every run of Unicode whitespace into a single space and trims.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode(raw: &[u8], charset: Option<&str>) -> Result<String, ParseError> {
    let declared = charset
        .and_then(|label| Encoding::for_label(label.trim().as_bytes()))
        .unwrap_or(UTF_8);
    let (encoding, bom_len) = Encoding::for_bom(raw).unwrap_or((declared, 0));

    encoding
        .decode_without_bom_handling_and_without_replacement(&raw[bom_len..])
        .map(|cow| cow.into_owned())
        .ok_or(ParseError::Malformed {
            encoding: encoding.name(),
        })
}

fn is_non_content(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|element| NON_CONTENT_TAGS.iter().any(|tag| *tag == element.name()))
}
