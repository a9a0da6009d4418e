//! Query descriptor and request building.

use reqwest::Url;

/// Parameters driving one fetch.
///
/// A non-empty `category` wins over a non-empty `search`; when both are
/// empty the plain listing is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub skip: u64,
    pub search: String,
    pub category: String,
}

impl ProductQuery {
    /// First page of the unfiltered listing.
    pub fn first_page() -> Self {
        Self::default()
    }

    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            ..Self::default()
        }
    }

    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn with_skip(mut self, skip: u64) -> Self {
        self.skip = skip;
        self
    }

    pub fn endpoint(&self) -> Endpoint {
        if !self.category.is_empty() {
            Endpoint::Category(self.category.clone())
        } else if !self.search.is_empty() {
            Endpoint::Search(self.search.clone())
        } else {
            Endpoint::Listing
        }
    }
}

/// Upstream endpoint selected for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Listing,
    Category(String),
    Search(String),
}

/// A fully built GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub endpoint: Endpoint,
    pub url: Url,
}

impl RequestSpec {
    /// Value of a query parameter, if present.
    pub fn param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

/// Build the request for `query` against `base_url`.
///
/// `limit` and `skip` are always present. Only the search endpoint carries
/// `q`. The category is pushed as a single, percent-encoded path segment.
pub fn build_request(base_url: &Url, query: &ProductQuery, limit: u32) -> RequestSpec {
    let endpoint = query.endpoint();
    let mut url = base_url.clone();
    url.set_query(None);

    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push("products");
        match &endpoint {
            Endpoint::Listing => {}
            Endpoint::Category(category) => {
                segments.push("category").push(category);
            }
            Endpoint::Search(_) => {
                segments.push("search");
            }
        }
    }

    {
        let mut pairs = url.query_pairs_mut();
        if let Endpoint::Search(text) = &endpoint {
            pairs.append_pair("q", text);
        }
        pairs.append_pair("limit", &limit.to_string());
        pairs.append_pair("skip", &query.skip.to_string());
    }

    RequestSpec { endpoint, url }
}
