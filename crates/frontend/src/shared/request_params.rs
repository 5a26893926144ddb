//! Typed list inputs on top of the URL parameter store.

use crate::shared::url_params::{
    to_bag, use_url_params, LocationSource, RouterLocation, UrlParamsStore,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::marker::PhantomData;

const PAGE_KEY: &str = "page";

/// Request parameters of a paginated list, decoded as `T`.
pub struct PagedRequestParams<T, L = RouterLocation> {
    store: UrlParamsStore<L>,
    _input: PhantomData<fn() -> T>,
}

impl<T, L: Clone> Clone for PagedRequestParams<T, L> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _input: PhantomData,
        }
    }
}

impl<T, L: Copy> Copy for PagedRequestParams<T, L> {}

impl<T, L> PagedRequestParams<T, L>
where
    T: DeserializeOwned + Default,
    L: LocationSource,
{
    pub fn new(store: UrlParamsStore<L>) -> Self {
        Self {
            store,
            _input: PhantomData,
        }
    }

    pub fn request_params(&self) -> T {
        self.store.url_params()
    }

    /// Merges filter changes and goes back to the first page.
    pub fn update_request_params<P: Serialize>(&self, partial: P) {
        let mut params = to_bag(partial);
        params.insert(PAGE_KEY.to_string(), Value::Null);
        self.store.update_url_params(params);
    }

    /// Moves to another page, keeping every filter.
    pub fn update_paging_params(&self, page: u32) {
        self.store.update_url_params(json!({ "page": page }));
    }

    /// Replaces every filter with `partial` and goes back to the first page.
    pub fn set_request_params_and_reset_paging<P: Serialize>(&self, partial: P) {
        let mut params = to_bag(partial);
        params.remove(PAGE_KEY);
        self.store.set_url_params(params);
    }
}

/// Request parameters of a list that loads everything at once.
pub struct RequestParams<T, L = RouterLocation> {
    store: UrlParamsStore<L>,
    _input: PhantomData<fn() -> T>,
}

impl<T, L: Clone> Clone for RequestParams<T, L> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _input: PhantomData,
        }
    }
}

impl<T, L: Copy> Copy for RequestParams<T, L> {}

impl<T, L> RequestParams<T, L>
where
    T: DeserializeOwned + Default,
    L: LocationSource,
{
    pub fn new(store: UrlParamsStore<L>) -> Self {
        Self {
            store,
            _input: PhantomData,
        }
    }

    pub fn request_params(&self) -> T {
        self.store.url_params()
    }

    pub fn update_request_params<P: Serialize>(&self, partial: P) {
        self.store.update_url_params(partial);
    }

    pub fn set_request_params<P: Serialize>(&self, partial: P) {
        self.store.set_url_params(partial);
    }
}

pub fn use_paged_request_params<T>() -> PagedRequestParams<T>
where
    T: DeserializeOwned + Default,
{
    PagedRequestParams::new(use_url_params())
}

pub fn use_request_params<T>() -> RequestParams<T>
where
    T: DeserializeOwned + Default,
{
    RequestParams::new(use_url_params())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::url_params::MemoryLocation;
    use contracts::domain::a001_detection::aggregate::{DetectionType, ListDetectionsInput};
    use contracts::domain::common::Severity;

    fn paged(search: &str) -> (PagedRequestParams<ListDetectionsInput, MemoryLocation>, MemoryLocation) {
        let location = MemoryLocation::new(search);
        (
            PagedRequestParams::new(UrlParamsStore::new(location.clone())),
            location,
        )
    }

    #[test]
    fn test_filter_change_resets_paging() {
        let (params, location) = paged("?page=3&severity[]=HIGH");
        params.update_request_params(json!({ "nameContains": "cloudtrail" }));
        assert_eq!(location.search(), "nameContains=cloudtrail&severity[]=HIGH");
    }

    #[test]
    fn test_paging_keeps_filters() {
        let (params, location) = paged("?analysisTypes[]=RULE&page=1");
        params.update_paging_params(2);

        let input = params.request_params();
        assert_eq!(input.page, Some(2));
        assert_eq!(input.analysis_types, vec![DetectionType::Rule]);
        assert_eq!(location.search(), "analysisTypes[]=RULE&page=2");
    }

    #[test]
    fn test_set_replaces_filters_and_paging() {
        let (params, location) = paged("?nameContains=foo&page=2&enabled=true");
        params.set_request_params_and_reset_paging(ListDetectionsInput {
            page: Some(5),
            severity: vec![Severity::Critical, Severity::High],
            ..Default::default()
        });
        assert_eq!(location.search(), "severity[]=CRITICAL&severity[]=HIGH");
    }

    #[test]
    fn test_typed_decode_of_url() {
        let (params, _) = paged("?enabled=false&logTypes[]=AWS.ALB&logTypes[]=AWS.S3ServerAccess&sortDir=descending&sortBy=lastModified");
        let input = params.request_params();
        assert_eq!(input.enabled, Some(false));
        assert_eq!(input.log_types.len(), 2);
        assert!(!input.has_no_filters());
    }

    #[test]
    fn test_unpaged_params_merge_and_replace() {
        let location = MemoryLocation::new("?enabled=true");
        let params: RequestParams<ListDetectionsInput, MemoryLocation> =
            RequestParams::new(UrlParamsStore::new(location.clone()));

        params.update_request_params(json!({ "nameContains": "okta" }));
        assert_eq!(location.search(), "enabled=true&nameContains=okta");

        params.set_request_params(json!({ "logTypes": ["Okta.SystemLog"] }));
        assert_eq!(location.search(), "logTypes[]=Okta.SystemLog");
        assert_eq!(params.request_params().log_types, vec!["Okta.SystemLog".to_string()]);
    }
}
