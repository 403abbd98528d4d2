//! Country inference from article URLs.
//!
//! Providers other than NewsData.io do not tag articles with a country, so
//! the adapters fall back to a TLD heuristic over the article URL.

use url::Url;

/// Default country for generic TLDs and anything unrecognized.
const DEFAULT_COUNTRY: &str = "US";

/// Country TLD table: last hostname label to ISO-2 code. Second-level
/// qualifiers (`co.uk`, `com.au`) resolve through the same last label.
const COUNTRY_TLDS: &[(&str, &str)] = &[
    ("in", "IN"),
    ("uk", "GB"),
    ("au", "AU"),
    ("ca", "CA"),
    ("jp", "JP"),
    ("de", "DE"),
    ("fr", "FR"),
    ("br", "BR"),
    ("ru", "RU"),
    ("cn", "CN"),
];

/// Infer an ISO-2 uppercase country code from a URL's hostname TLD.
///
/// Deterministic: matches the last hostname label against the fixed
/// country table; generic TLDs (`com`, `net`, `org`, `io`, `ai`) and
/// unparseable URLs return `"US"`.
#[must_use]
pub fn infer_country(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return DEFAULT_COUNTRY.to_string();
    };
    let Some(host) = parsed.host_str() else {
        return DEFAULT_COUNTRY.to_string();
    };

    let tld = host.rsplit('.').next().unwrap_or_default().to_lowercase();
    COUNTRY_TLDS
        .iter()
        .find(|(suffix, _)| *suffix == tld)
        .map_or_else(|| DEFAULT_COUNTRY.to_string(), |(_, code)| (*code).to_string())
}
