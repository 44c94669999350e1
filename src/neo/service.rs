use crate::config::{NeoConfig, NEO_DICT_ID};
use crate::dictionary::{z_prop_prune, Dictionary, QueryOptions};
use crate::error::DictionaryResult;
use crate::models::{DictInfo, Entry, ItemList, MatchCandidate, SolrResponse};
use crate::neo::mapping::ResponseMapper;
use crate::neo::query::QueryBuilder;
use crate::transport::{request_json, HttpTransport, ReqwestTransport};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

pub const NEO_ABBREV: &str = "NEO";
pub const NEO_NAME: &str = "Noctua Entity Ontology";

/// The NEO dictionary: GOLR bioentity search behind the dictionary contract
#[derive(Clone)]
pub struct DictionaryNeo {
    config: NeoConfig,
    mapper: ResponseMapper,
    transport: Arc<dyn HttpTransport>,
}

impl DictionaryNeo {
    /// Create a dictionary that talks HTTP through `reqwest`
    pub fn new(config: NeoConfig) -> DictionaryResult<Self> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a dictionary with an injected transport
    pub fn with_transport(config: NeoConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let mapper = ResponseMapper::new(NEO_DICT_ID, config.optimap);
        Self {
            config,
            mapper,
            transport,
        }
    }

    pub fn config(&self) -> &NeoConfig {
        &self.config
    }

    pub fn query_builder(&self) -> QueryBuilder<'_> {
        QueryBuilder::new(&self.config)
    }

    pub fn mapper(&self) -> &ResponseMapper {
        &self.mapper
    }

    /// The fixed descriptor of this dictionary
    pub fn dict_info() -> DictInfo {
        DictInfo {
            id: NEO_DICT_ID.to_string(),
            abbrev: NEO_ABBREV.to_string(),
            name: NEO_NAME.to_string(),
        }
    }

    async fn search(&self, url: &str) -> DictionaryResult<SolrResponse> {
        if self.config.log {
            info!(url = %url, "NEO search request");
        }

        let value = request_json(self.transport.as_ref(), url).await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl Dictionary for DictionaryNeo {
    async fn get_dict_infos(&self, options: &QueryOptions) -> DictionaryResult<ItemList<DictInfo>> {
        match options.proper_filter_ids() {
            Some(ids) if !ids.iter().any(|id| id == NEO_DICT_ID) => {
                debug!("Dictionary excluded by filter.id");
                Ok(ItemList::empty())
            }
            _ => Ok(ItemList::new(vec![Self::dict_info()])),
        }
    }

    async fn get_entries(&self, options: &QueryOptions) -> DictionaryResult<ItemList<Entry>> {
        if options.excludes_dictionary(NEO_DICT_ID) {
            debug!("Dictionary excluded by filter.dictID");
            return Ok(ItemList::empty());
        }

        let url = self.query_builder().entry_search_url(options);
        let response = self.search(&url).await?;
        let entries = self.mapper.map_to_entries(&response);
        debug!(count = entries.len(), "Mapped NEO entries");

        Ok(ItemList::new(z_prop_prune(entries, &options.z)))
    }

    async fn get_entry_matches_for_string(
        &self,
        text: &str,
        options: &QueryOptions,
    ) -> DictionaryResult<ItemList<MatchCandidate>> {
        if text.trim().is_empty() {
            return Ok(ItemList::empty());
        }

        if options.excludes_dictionary(NEO_DICT_ID) {
            debug!("Dictionary excluded by filter.dictID");
            return Ok(ItemList::empty());
        }

        let url = self.query_builder().match_search_url(text, options);
        let response = self.search(&url).await?;
        let matches = self.mapper.map_to_matches(&response, text);
        debug!(count = matches.len(), query = %text, "Mapped NEO matches");

        Ok(ItemList::new(z_prop_prune(matches, &options.z)))
    }
}
