//! Query → URL construction.
//!
//! Encoding default: percent-encode every byte except ASCII alphanumerics
//! and `-._~/`. A space becomes `%20`, never `+`.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::core::engines;

/// Characters left alone by the default query encoding
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Path-segment encoding: like QUERY but `/` is escaped too
const SEGMENT: &AsciiSet = &QUERY.add(b'/');

/// How an engine wants its query appended to the base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Percent-encoded query component
    Default,
    /// Appended verbatim (base expects a raw URL)
    Raw,
    /// Standard base64 with padding over the UTF-8 bytes
    Base64,
    /// Percent-encoded with no safe characters
    PathSegment,
}

/// Engines whose encoding differs from the default
const ENCODING_RULES: &[(&str, Encoding)] = &[
    ("archive", Encoding::Raw),
    ("fofa", Encoding::Base64),
    ("hunter", Encoding::PathSegment),
];

pub fn encoding_for(engine: &str) -> Encoding {
    ENCODING_RULES
        .iter()
        .find(|(id, _)| *id == engine)
        .map(|(_, enc)| *enc)
        .unwrap_or(Encoding::Default)
}

impl Encoding {
    pub fn apply(self, query: &str) -> String {
        match self {
            Encoding::Default => utf8_percent_encode(query, QUERY).to_string(),
            Encoding::Raw => query.to_string(),
            Encoding::Base64 => STANDARD.encode(query.as_bytes()),
            Encoding::PathSegment => utf8_percent_encode(query, SEGMENT).to_string(),
        }
    }
}

/// Build the destination URL for `query` on `engine`.
/// Unknown engines use the default engine's base with default encoding.
pub fn build_url(query: &str, engine: &str) -> String {
    let base = engines::base_url(engine);
    let encoded = encoding_for(engine).apply(query);

    let mut url = String::with_capacity(base.len() + encoded.len());
    url.push_str(base);
    url.push_str(&encoded);
    url
}
