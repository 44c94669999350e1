//! NEO (Noctua Entity Ontology) dictionary, served by GOLR
//!
//! ```no_run
//! use vsm_dictionary_neo::dictionary::{Dictionary, QueryOptions};
//! use vsm_dictionary_neo::{DictionaryNeo, NeoConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dict = DictionaryNeo::new(NeoConfig::default())?;
//!
//!     let options = QueryOptions::new().with_page(1).with_per_page(10);
//!     let matches = dict.get_entry_matches_for_string("Catenin beta-1", &options).await?;
//!     println!("Found {} matches", matches.len());
//!
//!     Ok(())
//! }
//! ```

mod mapping;
mod query;
mod service;

pub use mapping::{build_descr, build_species, build_terms, main_term, remove_duplicates, ResponseMapper};
pub use query::{build_query, QueryBuilder, NEO_QUERY_FIELDS, SEARCH_FIELDS, SORT_BY_ID};
pub use service::{DictionaryNeo, NEO_ABBREV, NEO_NAME};
