//! Post-processing applied to mapped results

use crate::dictionary::options::{QueryOptions, ZSelection};
use crate::models::{HasZProps, ZProps};

/// Strip `z` properties the caller did not ask for.
///
/// Items whose `z` ends up empty lose it entirely.
pub fn z_prop_prune<T: HasZProps>(mut items: Vec<T>, selection: &ZSelection) -> Vec<T> {
    if *selection == ZSelection::All {
        return items;
    }

    for item in items.iter_mut() {
        let z = item.z_mut();
        let Some(current) = z.take() else {
            continue;
        };

        if let ZSelection::Keys(keys) = selection {
            let keep = |key: &str| keys.iter().any(|k| k == key);
            let pruned = ZProps {
                entity_type: current.entity_type.filter(|_| keep("type")),
                species: current.species.filter(|_| keep("species")),
            };
            if !pruned.is_empty() {
                *z = Some(pruned);
            }
        }
    }

    items
}

/// Slice one page out of an already materialized result list.
///
/// Invalid `page` means page 1; invalid `perPage` means `per_page_default`.
/// `DictionaryNeo` pages on the backend and never calls this; it is for
/// callers that hold a full result list.
pub fn trim_entry_array<T: Clone>(items: &[T], options: &QueryOptions, per_page_default: u64) -> Vec<T> {
    let page = options.proper_page().unwrap_or(1);
    let page_size = options.proper_per_page().unwrap_or(per_page_default);

    let start = ((page - 1).saturating_mul(page_size)).min(items.len() as u64) as usize;
    let end = (page.saturating_mul(page_size)).min(items.len() as u64) as usize;

    items[start..end].to_vec()
}
