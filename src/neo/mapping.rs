//! Mapping of GOLR bioentity documents to dictionary entries and matches
//!
//! Every document produces exactly one output object, in backend order.

use crate::models::{BioentityDocument, Entry, MatchCandidate, MatchType, SolrResponse, Term, ZProps};

const TAXON_PREFIX: &str = "NCBITaxon:";

/// Converts Solr responses into dictionary objects
#[derive(Debug, Clone)]
pub struct ResponseMapper {
    dict_id: String,
    optimap: bool,
}

impl ResponseMapper {
    pub fn new(dict_id: impl Into<String>, optimap: bool) -> Self {
        Self {
            dict_id: dict_id.into(),
            optimap,
        }
    }

    pub fn map_to_entries(&self, response: &SolrResponse) -> Vec<Entry> {
        response
            .response
            .docs
            .iter()
            .map(|doc| self.to_entry(doc))
            .collect()
    }

    pub fn map_to_matches(&self, response: &SolrResponse, text: &str) -> Vec<MatchCandidate> {
        response
            .response
            .docs
            .iter()
            .map(|doc| self.to_match(doc, text))
            .collect()
    }

    pub fn to_entry(&self, doc: &BioentityDocument) -> Entry {
        let terms = doc_terms(doc);
        Entry {
            id: doc.bioentity.clone(),
            dict_id: self.dict_id.clone(),
            descr: self.doc_descr(doc, &terms),
            z: Some(doc_z(doc)),
            terms,
        }
    }

    pub fn to_match(&self, doc: &BioentityDocument, text: &str) -> MatchCandidate {
        let terms = doc_terms(doc);
        // terms always holds the main term first
        let main = terms[0].str.clone();
        let match_type = if main.starts_with(text) {
            MatchType::Prefix
        } else {
            MatchType::Other
        };

        MatchCandidate {
            id: doc.bioentity.clone(),
            dict_id: self.dict_id.clone(),
            str: main,
            descr: self.doc_descr(doc, &terms),
            match_type,
            z: Some(doc_z(doc)),
            terms,
        }
    }

    fn doc_descr(&self, doc: &BioentityDocument, terms: &[Term]) -> String {
        build_descr(
            doc.bioentity_name.as_deref(),
            doc.taxon_label.as_deref(),
            doc.entity_type.as_deref(),
            terms,
            self.optimap,
        )
    }
}

fn doc_terms(doc: &BioentityDocument) -> Vec<Term> {
    build_terms(
        doc.bioentity_label.as_deref(),
        doc.synonym_searchable.as_deref(),
        &doc.bioentity,
    )
}

fn doc_z(doc: &BioentityDocument) -> ZProps {
    ZProps {
        entity_type: doc.entity_type.clone(),
        species: Some(build_species(doc.taxon.as_deref(), doc.taxon_label.as_deref())),
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Preferred display name: label, then first synonym, then the identifier
pub fn main_term<'a>(label: Option<&'a str>, synonyms: Option<&'a [String]>, id: &'a str) -> &'a str {
    non_empty(label)
        .or_else(|| synonyms.and_then(|s| s.first()).map(String::as_str))
        .unwrap_or(id)
}

/// Main term followed by every other distinct synonym, the label and the id
pub fn build_terms(label: Option<&str>, synonyms: Option<&[String]>, id: &str) -> Vec<Term> {
    let main = main_term(label, synonyms, id);

    let mut pool: Vec<&str> = synonyms
        .unwrap_or_default()
        .iter()
        .map(String::as_str)
        .collect();
    pool.extend(non_empty(label));
    pool.push(id);

    std::iter::once(main)
        .chain(remove_duplicates(pool).into_iter().filter(|s| *s != main))
        .map(Term::new)
        .collect()
}

/// Drop repeated items, keeping the first occurrence of each
pub fn remove_duplicates<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

/// `"{label}; {number}"`, with whichever parts are known
pub fn build_species(taxon: Option<&str>, taxon_label: Option<&str>) -> String {
    let number = non_empty(taxon).map(|t| t.replacen(TAXON_PREFIX, "", 1));

    match (non_empty(taxon_label), number) {
        (Some(label), Some(number)) => format!("{}; {}", label, number),
        (Some(label), None) => label.to_string(),
        (None, Some(number)) => format!("No label; {}", number),
        (None, None) => "No taxon label or number given".to_string(),
    }
}

/// Entry description.
///
/// Plain mode returns the bioentity name. Optimized mode packs taxon, type,
/// all terms and the name into one line for curators; separators inside
/// values are not escaped.
pub fn build_descr(
    name: Option<&str>,
    taxon_label: Option<&str>,
    entity_type: Option<&str>,
    terms: &[Term],
    optimap: bool,
) -> String {
    let name = name.unwrap_or_default();
    if !optimap {
        return name.to_string();
    }

    let joined = terms
        .iter()
        .map(|t| t.str.as_str())
        .collect::<Vec<_>>()
        .join("|");
    let base = if name.is_empty() {
        joined
    } else {
        format!("{}; {}", joined, name)
    };
    let entity_type = entity_type.unwrap_or_default();

    match non_empty(taxon_label) {
        Some(label) => format!("{}; {}; {}", label, entity_type, base),
        None => format!("{}; {}", entity_type, base),
    }
}
