//! Wire shapes of the GOLR/Solr `select` response

use serde::{Deserialize, Serialize};

/// Solr response envelope; only `response.docs` is read
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolrResponse {
    pub response: SolrDocs,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolrDocs {
    #[serde(default)]
    pub docs: Vec<BioentityDocument>,
}

/// One bioentity document. Only `bioentity` is guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioentityDocument {
    pub bioentity: String,
    #[serde(default)]
    pub bioentity_label: Option<String>,
    #[serde(default)]
    pub bioentity_name: Option<String>,
    #[serde(default)]
    pub synonym_searchable: Option<Vec<String>>,
    #[serde(default)]
    pub taxon: Option<String>,
    #[serde(default)]
    pub taxon_label: Option<String>,
    #[serde(rename = "type", default)]
    pub entity_type: Option<String>,
}
