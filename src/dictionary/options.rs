//! Caller options shared by all dictionary operations
//!
//! Options usually arrive as JSON from a dictionary client. Malformed values
//! are never rejected: a field of the wrong shape deserializes as absent and
//! the operation falls back to its defaults.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Restricts lookups to given entity IDs or dictionary IDs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default, deserialize_with = "lenient_string_list", skip_serializing_if = "Option::is_none")]
    pub id: Option<Vec<String>>,

    #[serde(
        rename = "dictID",
        default,
        deserialize_with = "lenient_string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub dict_id: Option<Vec<String>>,
}

/// Which `z` properties survive in the output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ZSelection {
    /// Keep every z-property (`true` or absent)
    #[default]
    All,
    /// Drop `z` altogether (`false` or `[]`)
    Nothing,
    /// Keep only the listed keys
    Keys(Vec<String>),
}

impl Serialize for ZSelection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ZSelection::All => serializer.serialize_bool(true),
            ZSelection::Nothing => serializer.serialize_bool(false),
            ZSelection::Keys(keys) => keys.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ZSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Bool(false) => ZSelection::Nothing,
            Value::String(key) => ZSelection::Keys(vec![key]),
            Value::Array(items) if items.is_empty() => ZSelection::Nothing,
            Value::Array(items) => ZSelection::Keys(
                items
                    .into_iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect(),
            ),
            _ => ZSelection::All,
        })
    }
}

/// Options accepted by `get_dict_infos`, `get_entries` and
/// `get_entry_matches_for_string`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    #[serde(default, deserialize_with = "lenient_filter")]
    pub filter: Filter,

    #[serde(default)]
    pub z: ZSelection,

    /// 1-based page number
    #[serde(default, deserialize_with = "lenient_integer", skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,

    #[serde(
        rename = "perPage",
        default,
        deserialize_with = "lenient_integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub per_page: Option<i64>,

    /// Accepted for compatibility; entry search always sorts by identifier
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given entity IDs
    pub fn with_ids(mut self, ids: Vec<impl Into<String>>) -> Self {
        self.filter.id = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict to the given dictionary IDs
    pub fn with_dict_ids(mut self, ids: Vec<impl Into<String>>) -> Self {
        self.filter.dict_id = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn with_z(mut self, z: ZSelection) -> Self {
        self.z = z;
        self
    }

    /// `filter.id`, if it is a non-empty list
    pub fn proper_filter_ids(&self) -> Option<&[String]> {
        self.filter.id.as_deref().filter(|ids| !ids.is_empty())
    }

    /// `filter.dictID`, if it is a non-empty list
    pub fn proper_filter_dict_ids(&self) -> Option<&[String]> {
        self.filter.dict_id.as_deref().filter(|ids| !ids.is_empty())
    }

    /// `page`, if it is an integer ≥ 1
    pub fn proper_page(&self) -> Option<u64> {
        self.page.filter(|p| *p >= 1).map(|p| p as u64)
    }

    /// `perPage`, if it is an integer ≥ 1
    pub fn proper_per_page(&self) -> Option<u64> {
        self.per_page.filter(|p| *p >= 1).map(|p| p as u64)
    }

    /// True when a proper `filter.dictID` list leaves out `dict_id`
    pub fn excludes_dictionary(&self, dict_id: &str) -> bool {
        self.proper_filter_dict_ids()
            .map(|ids| !ids.iter().any(|id| id == dict_id))
            .unwrap_or(false)
    }
}

/// Integers (including integral floats such as `2.0`) pass; anything else is absent
fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        _ => None,
    })
}

/// Objects pass through `Filter`'s own lenient fields; anything else is an empty filter
fn lenient_filter<'de, D>(deserializer: D) -> Result<Filter, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
        _ => Filter::default(),
    })
}

/// Arrays pass with their string elements; anything else is absent
fn lenient_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> QueryOptions {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_options() {
        let options = parse(json!({}));
        assert_eq!(options, QueryOptions::default());
        assert!(options.proper_filter_ids().is_none());
        assert!(options.proper_page().is_none());
        assert_eq!(options.z, ZSelection::All);
    }

    #[test]
    fn test_invalid_pagination_is_absent() {
        let options = parse(json!({ "page": "String", "perPage": ["Str"] }));
        assert!(options.page.is_none());
        assert!(options.per_page.is_none());

        let options = parse(json!({ "page": 1.5, "perPage": null }));
        assert!(options.page.is_none());
        assert!(options.per_page.is_none());
    }

    #[test]
    fn test_non_positive_pagination_is_not_proper() {
        let options = parse(json!({ "page": 0, "perPage": -3 }));
        assert_eq!(options.page, Some(0));
        assert!(options.proper_page().is_none());
        assert!(options.proper_per_page().is_none());

        let options = parse(json!({ "page": 3.0, "perPage": 100 }));
        assert_eq!(options.proper_page(), Some(3));
        assert_eq!(options.proper_per_page(), Some(100));
    }

    #[test]
    fn test_filter_lists() {
        let options = parse(json!({ "filter": { "id": [], "dictID": "not-a-list" } }));
        assert!(options.proper_filter_ids().is_none());
        assert!(options.filter.dict_id.is_none());

        let options = parse(json!({ "filter": { "dictID": [""] } }));
        assert_eq!(options.proper_filter_dict_ids(), Some(&[String::new()][..]));
        assert!(options.excludes_dictionary("http://golr-aux.geneontology.io"));

        for filter in [json!("x"), json!(null), json!(7), json!(["UniProtKB:P35222"])] {
            let options = parse(json!({ "filter": filter, "page": 2 }));
            assert_eq!(options.filter, Filter::default());
            assert_eq!(options.proper_page(), Some(2));
            assert!(!options.excludes_dictionary("http://golr-aux.geneontology.io"));
        }
    }

    #[test]
    fn test_excludes_dictionary() {
        let neo = "http://golr-aux.geneontology.io";
        assert!(!QueryOptions::new().excludes_dictionary(neo));
        assert!(!QueryOptions::new()
            .with_dict_ids(vec!["https://www.uniprot.org", neo])
            .excludes_dictionary(neo));
        assert!(QueryOptions::new()
            .with_dict_ids(vec![" ", "https://www.uniprot.org"])
            .excludes_dictionary(neo));
    }

    #[test]
    fn test_z_selection_forms() {
        assert_eq!(parse(json!({ "z": true })).z, ZSelection::All);
        assert_eq!(parse(json!({ "z": false })).z, ZSelection::Nothing);
        assert_eq!(parse(json!({ "z": [] })).z, ZSelection::Nothing);
        assert_eq!(
            parse(json!({ "z": "species" })).z,
            ZSelection::Keys(vec!["species".to_string()])
        );
        assert_eq!(
            parse(json!({ "z": ["type", "species"] })).z,
            ZSelection::Keys(vec!["type".to_string(), "species".to_string()])
        );
    }
}
