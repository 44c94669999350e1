//! The generic dictionary contract
//!
//! A dictionary answers three questions: which dictionaries it serves
//! (`get_dict_infos`), which entries exist for a set of identifiers
//! (`get_entries`), and which entries match a free-text string
//! (`get_entry_matches_for_string`). Every operation resolves to a result or
//! an error, never both.

mod options;
mod prune;

pub use options::{Filter, QueryOptions, ZSelection};
pub use prune::{trim_entry_array, z_prop_prune};

use crate::error::DictionaryResult;
use crate::models::{DictInfo, Entry, ItemList, MatchCandidate};
use async_trait::async_trait;

/// Capability set implemented by concrete dictionaries
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// Describe this dictionary, unless `filter.id` excludes it
    async fn get_dict_infos(&self, options: &QueryOptions) -> DictionaryResult<ItemList<DictInfo>>;

    /// Look up entries, optionally restricted to `filter.id`
    async fn get_entries(&self, options: &QueryOptions) -> DictionaryResult<ItemList<Entry>>;

    /// Find entries whose terms match `text`
    async fn get_entry_matches_for_string(
        &self,
        text: &str,
        options: &QueryOptions,
    ) -> DictionaryResult<ItemList<MatchCandidate>>;
}
