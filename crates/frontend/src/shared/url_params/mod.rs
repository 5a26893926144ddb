//! The address bar as the store of list filters, sorting and pagination.
//!
//! Every read parses the current location; every write serializes a bag and
//! replaces the location's query string. Calls are independent
//! read-modify-write cycles, so a multi-field change must go through a single call.

pub mod location;
pub mod query_string;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub use location::{LocationSource, MemoryLocation, RouterLocation};
pub use query_string::ParamBag;

/// Store type provided by the application root
pub type AppUrlParams = UrlParamsStore<RouterLocation>;

#[derive(Clone, Copy)]
pub struct UrlParamsStore<L> {
    location: L,
}

impl<L: LocationSource> UrlParamsStore<L> {
    pub fn new(location: L) -> Self {
        Self { location }
    }

    /// Raw parameters of the current location
    pub fn params(&self) -> ParamBag {
        query_string::parse(&self.location.search())
    }

    /// Parameters decoded into `T`. Keys that do not fit `T` are dropped.
    pub fn url_params<T>(&self) -> T
    where
        T: DeserializeOwned + Default,
    {
        decode_lenient(self.params())
    }

    /// Merges `partial` into the current parameters and replaces the location.
    pub fn update_url_params<P: Serialize>(&self, partial: P) {
        let mut merged = self.params();
        merged.extend(to_bag(partial));
        self.replace(merged);
    }

    /// Replaces all current parameters with `partial`.
    pub fn set_url_params<P: Serialize>(&self, partial: P) {
        self.replace(to_bag(partial));
    }

    fn replace(&self, params: ParamBag) {
        let cleaned = query_string::strip_falsy(params);
        let search = query_string::stringify(&cleaned);
        log::debug!("url params: replace query with '{}'", search);
        self.location.replace_search(&search);
    }
}

/// Current URL parameter store. Provided by `App`.
pub fn use_url_params() -> AppUrlParams {
    expect_context::<AppUrlParams>()
}

/// Serializes a partial update into a bag. Anything but an object counts as empty.
pub fn to_bag<P: Serialize>(partial: P) -> ParamBag {
    match serde_json::to_value(partial) {
        Ok(Value::Object(map)) => map,
        Ok(Value::Null) => ParamBag::new(),
        Ok(other) => {
            log::warn!("url params: ignoring non-object update {}", other);
            ParamBag::new()
        }
        Err(err) => {
            log::warn!("url params: failed to serialize update: {}", err);
            ParamBag::new()
        }
    }
}

/// Decodes `params` into `T`, keeping only the keys that decode.
pub fn decode_lenient<T>(params: ParamBag) -> T
where
    T: DeserializeOwned + Default,
{
    if let Ok(decoded) = serde_json::from_value::<T>(Value::Object(params.clone())) {
        return decoded;
    }

    let mut accepted = ParamBag::new();
    for (key, value) in params {
        let mut candidate = accepted.clone();
        candidate.insert(key.clone(), value);
        if serde_json::from_value::<T>(Value::Object(candidate.clone())).is_ok() {
            accepted = candidate;
        } else {
            log::warn!("url params: dropping undecodable parameter '{}'", key);
        }
    }

    serde_json::from_value(Value::Object(accepted)).unwrap_or_default()
}

/// Value for a single-choice select bound to a list parameter; empty clears it
pub fn select_list_value(code: &str) -> Value {
    if code.is_empty() {
        Value::Null
    } else {
        Value::Array(vec![Value::String(code.to_string())])
    }
}

/// Value for an any/yes/no select bound to a boolean parameter
pub fn select_bool_value(code: &str) -> Value {
    match code {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::Null,
    }
}

/// Select option code of an optional boolean parameter
pub fn bool_code(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "true",
        Some(false) => "false",
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Filters {
        page: Option<u32>,
        page_size: Option<u32>,
        log_types: Vec<String>,
        enabled: Option<bool>,
    }

    fn store(search: &str) -> (UrlParamsStore<MemoryLocation>, MemoryLocation) {
        let location = MemoryLocation::new(search);
        (UrlParamsStore::new(location.clone()), location)
    }

    #[test]
    fn test_update_merges_into_existing_params() {
        let (store, location) = store("?page=1&pageSize=25");
        store.update_url_params(json!({ "logTypes": ["AWS.ALB"] }));

        assert_eq!(location.search(), "logTypes[]=AWS.ALB&page=1&pageSize=25");
        assert_eq!(
            store.params(),
            to_bag(json!({ "page": 1, "pageSize": 25, "logTypes": ["AWS.ALB"] }))
        );
        assert_eq!(
            store.url_params::<Filters>(),
            Filters {
                page: Some(1),
                page_size: Some(25),
                log_types: vec!["AWS.ALB".into()],
                enabled: None,
            }
        );
    }

    #[test]
    fn test_set_discards_unrelated_params() {
        let (store, location) = store("?nameContains=foo&page=2");
        store.set_url_params(json!({ "nameContains": "" }));
        assert_eq!(location.search(), "");
        assert!(store.params().is_empty());
    }

    #[test]
    fn test_writes_replace_the_history_entry() {
        let (store, location) = store("?page=1");
        store.update_url_params(json!({ "page": 2 }));
        store.set_url_params(json!({ "page": 3 }));
        assert_eq!(location.history_len(), 1);
        assert_eq!(location.search(), "page=3");
    }

    #[test]
    fn test_update_with_null_removes_key() {
        let (store, location) = store("?page=4&enabled=true");
        store.update_url_params(json!({ "page": null }));
        assert_eq!(location.search(), "enabled=true");
    }

    #[test]
    fn test_false_and_zero_survive_stripping() {
        let (store, location) = store("");
        store.update_url_params(json!({ "enabled": false, "page": 0, "nameContains": "" }));
        assert_eq!(location.search(), "enabled=false&page=0");
        assert_eq!(store.url_params::<Filters>().enabled, Some(false));
    }

    #[test]
    fn test_typed_partial_update() {
        let (store, location) = store("?enabled=true");
        store.update_url_params(Filters {
            page: Some(3),
            ..Default::default()
        });
        // unset Option fields serialize as null and clear their keys
        assert_eq!(location.search(), "page=3");
    }

    #[test]
    fn test_undecodable_keys_are_dropped() {
        let (store, _) = store("?page=abc&pageSize=50&enabled=maybe");
        let filters = store.url_params::<Filters>();
        assert_eq!(filters.page, None);
        assert_eq!(filters.page_size, Some(50));
        assert_eq!(filters.enabled, None);
    }

    #[test]
    fn test_sequential_updates_each_read_the_latest_location() {
        let (store, location) = store("");
        store.update_url_params(json!({ "page": 2 }));
        store.update_url_params(json!({ "pageSize": 10 }));
        assert_eq!(location.search(), "page=2&pageSize=10");
    }

    #[test]
    fn test_non_object_update_is_ignored() {
        let (store, location) = store("?page=2");
        store.update_url_params(json!(["not", "an", "object"]));
        assert_eq!(location.search(), "page=2");
    }

    #[test]
    fn test_select_values() {
        assert_eq!(select_list_value("HIGH"), json!(["HIGH"]));
        assert_eq!(select_list_value(""), Value::Null);
        assert_eq!(select_bool_value("false"), json!(false));
        assert_eq!(select_bool_value(""), Value::Null);
        assert_eq!(bool_code(Some(false)), "false");
        assert_eq!(bool_code(None), "");
    }

    #[test]
    fn test_select_values_clear_and_keep_through_store() {
        let store = UrlParamsStore::new(MemoryLocation::new("?enabled=true&severity[]=LOW"));
        store.update_url_params(json!({
            "enabled": select_bool_value("false"),
            "severity": select_list_value(""),
        }));
        assert_eq!(store.params(), json!({ "enabled": false }).as_object().cloned().unwrap());
    }
}
