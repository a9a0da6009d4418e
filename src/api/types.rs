use serde_json::Value;

use super::error::FetchError;

/// One product as delivered by the upstream, kept untyped so the table can
/// show any configured column.
pub type Record = serde_json::Map<String, Value>;

/// One page of records plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageResult {
    pub items: Vec<Record>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

impl PageResult {
    /// Empty page used before the first fetch completes.
    pub fn empty(limit: u64) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            skip: 0,
            limit,
        }
    }

    /// Validate a decoded response body.
    ///
    /// Requires an object with a `products` array of objects and unsigned
    /// integer `total`, `skip` and `limit`. Extra fields are ignored.
    pub fn from_json(body: Value) -> Result<Self, FetchError> {
        let Value::Object(mut body) = body else {
            return Err(FetchError::invalid_response("body is not a JSON object"));
        };

        let items = match body.remove("products") {
            Some(Value::Array(products)) => products
                .into_iter()
                .enumerate()
                .map(|(index, product)| match product {
                    Value::Object(record) => Ok(record),
                    _ => Err(FetchError::invalid_response(format!(
                        "products[{index}] is not an object"
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(FetchError::invalid_response("`products` is not an array")),
            None => return Err(FetchError::invalid_response("missing field `products`")),
        };

        Ok(Self {
            items,
            total: count_field(&body, "total")?,
            skip: count_field(&body, "skip")?,
            limit: count_field(&body, "limit")?,
        })
    }
}

fn count_field(body: &Record, name: &str) -> Result<u64, FetchError> {
    match body.get(name) {
        Some(value) => value.as_u64().ok_or_else(|| {
            FetchError::invalid_response(format!("`{name}` is not a non-negative integer"))
        }),
        None => Err(FetchError::invalid_response(format!("missing field `{name}`"))),
    }
}
