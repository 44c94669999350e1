//! Solr query-string and URL construction
//!
//! Parameters are appended to the configured base URL exactly as the GOLR
//! endpoint expects them; values are not percent-encoded here.

use crate::config::NeoConfig;
use crate::dictionary::QueryOptions;
use once_cell::sync::Lazy;
use regex::Regex;

/// Fields requested from the backend (`fl` parameter)
pub const NEO_QUERY_FIELDS: &str =
    "bioentity,bioentity_label,bioentity_name,synonym_searchable,taxon,taxon_label,type";

/// Fields each free-text word is matched against
pub const SEARCH_FIELDS: [&str; 4] = [
    "bioentity_label_searchable",
    "bioentity_name_searchable",
    "synonym_searchable",
    "taxon_label_searchable",
];

/// Entry search is always sorted by canonical identifier
pub const SORT_BY_ID: &str = "bioentity%20asc";

const MIN_START: u64 = 0;

static CURIE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+:\S+").expect("valid CURIE regex"));

static SOLR_RESERVED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[+\-&|!(){}\[\]^"~*?:/]"#).expect("valid reserved-char regex"));

/// Builds search URLs against the configured GOLR endpoints
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder<'a> {
    config: &'a NeoConfig,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(config: &'a NeoConfig) -> Self {
        Self { config }
    }

    /// URL for looking up entries, restricted to the CURIEs in `filter.id`
    /// when there are any
    pub fn entry_search_url(&self, options: &QueryOptions) -> String {
        let mut url = String::from(self.config.entries_url());

        let curies: Vec<&str> = options
            .proper_filter_ids()
            .map(|ids| {
                ids.iter()
                    .map(String::as_str)
                    .filter(|id| CURIE.is_match(id))
                    .collect()
            })
            .unwrap_or_default();

        if !curies.is_empty() {
            url.push_str("&fq=(bioentity:\"");
            url.push_str(&curies.join("\" bioentity:\""));
            url.push_str("\")");
        }

        url.push_str("&fl=");
        url.push_str(NEO_QUERY_FIELDS);
        self.push_pagination(&mut url, options);
        url.push_str("&sort=");
        url.push_str(SORT_BY_ID);
        self.push_format(&mut url);
        url
    }

    /// URL for a free-text search
    pub fn match_search_url(&self, text: &str, options: &QueryOptions) -> String {
        let mut url = String::from(self.config.matches_url());

        url.push_str("&fq=");
        url.push_str(&build_query(text));
        url.push_str("&fl=");
        url.push_str(NEO_QUERY_FIELDS);
        self.push_pagination(&mut url, options);
        self.push_format(&mut url);
        url
    }

    /// `perPage` if valid and within the backend maximum, else the default
    pub fn page_size(&self, options: &QueryOptions) -> u64 {
        options
            .proper_per_page()
            .filter(|per_page| *per_page <= u64::from(self.config.max_page_size))
            .unwrap_or_else(|| u64::from(self.config.per_page_default))
    }

    /// Zero-based offset of the requested page
    pub fn start(&self, options: &QueryOptions, page_size: u64) -> u64 {
        options
            .proper_page()
            .map(|page| (page - 1).saturating_mul(page_size))
            .unwrap_or(MIN_START)
    }

    fn push_pagination(&self, url: &mut String, options: &QueryOptions) {
        let page_size = self.page_size(options);
        let start = self.start(options, page_size);
        url.push_str(&format!("&rows={}&start={}", page_size, start));
    }

    fn push_format(&self, url: &mut String) {
        url.push_str("&wt=");
        url.push_str(&self.config.format);
    }
}

/// Turn free text into a Solr filter query.
///
/// Every space-separated word becomes a prefix query over [`SEARCH_FIELDS`];
/// words are AND-ed. Words containing Solr syntax characters are escaped and
/// quoted, keeping the wildcard inside the quotes.
pub fn build_query(text: &str) -> String {
    text.trim()
        .split(' ')
        .map(|word| {
            let word = prefix_term(word);
            let fields: Vec<String> = SEARCH_FIELDS
                .iter()
                .map(|field| format!("{}:{}", field, word))
                .collect();
            format!("({})", fields.join(" "))
        })
        .collect::<Vec<_>>()
        .join(" AND ")
}

fn prefix_term(word: &str) -> String {
    if SOLR_RESERVED.is_match(word) {
        format!("\"{}*\"", SOLR_RESERVED.replace_all(word, r"\$0"))
    } else {
        format!("{}*", word)
    }
}
