pub mod entry;
pub mod solr;

pub use entry::*;
pub use solr::*;
