//! NEO dictionary adapter
//!
//! Exposes the Noctua Entity Ontology, as indexed by the GOLR Solr service,
//! through the generic VSM dictionary interface:
//!
//! - [`dictionary`]: the contract (`Dictionary` trait, options, z-pruning)
//! - [`neo`]: query construction, response mapping and the `DictionaryNeo`
//!   implementation
//! - [`transport`]: the injected HTTP GET capability

pub mod config;
pub mod dictionary;
pub mod error;
pub mod models;
pub mod neo;
pub mod transport;

pub use config::{NeoConfig, NeoConfigBuilder, NEO_DICT_ID};
pub use error::{DictionaryError, DictionaryResult};
pub use neo::DictionaryNeo;
