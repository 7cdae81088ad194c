//! Response envelopes and the single normalizing adapter for learning-result
//! payloads. Nothing above this module sees the raw response shapes.

use serde::Deserialize;
use serde_json::Value;

use crate::models::{LearningResult, User};

/// `GET /api/v1/users`. The dashboard reads `meta.total`, the results screen
/// reads `result`; the backend does not guarantee both.
#[derive(Debug, Deserialize)]
pub struct UsersEnvelope {
    #[serde(default)]
    pub meta: Option<UsersMeta>,
    #[serde(default)]
    pub result: Option<Vec<User>>,
}

#[derive(Debug, Deserialize)]
pub struct UsersMeta {
    pub total: u64,
}

/// `{ "data": { "totalElements": n } }`
#[derive(Debug, Deserialize)]
pub struct PageCountEnvelope {
    pub data: PageCount,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCount {
    pub total_elements: u64,
}

/// `{ "data": ... }` wrapper around any learning-result payload.
#[derive(Debug, Deserialize)]
pub struct ResultsEnvelope {
    #[serde(default)]
    pub data: Option<Value>,
}

/// The three shapes the learning-result endpoints return.
#[derive(Debug)]
pub enum ResultsPayload {
    Page { content: Vec<LearningResult> },
    List(Vec<LearningResult>),
    Single(LearningResult),
}

impl ResultsPayload {
    /// Classify a `data` value. Any object carrying `content` is a page,
    /// never a single record, whatever its rows look like.
    pub fn from_value(value: Value) -> Result<Option<Self>, serde_json::Error> {
        match value {
            Value::Null => Ok(None),
            Value::Array(_) => Ok(Some(ResultsPayload::List(serde_json::from_value(value)?))),
            Value::Object(mut fields) => match fields.remove("content") {
                Some(content) => Ok(Some(ResultsPayload::Page {
                    content: serde_json::from_value(content)?,
                })),
                None => Ok(Some(ResultsPayload::Single(serde_json::from_value(
                    Value::Object(fields),
                )?))),
            },
            other => Err(serde::de::Error::custom(format!(
                "unexpected learning-result payload: {}",
                other
            ))),
        }
    }

    pub fn into_results(self) -> Vec<LearningResult> {
        match self {
            ResultsPayload::Page { content } => content,
            ResultsPayload::List(results) => results,
            ResultsPayload::Single(result) => vec![result],
        }
    }
}

/// Decode any learning-result body into a flat list. A missing or null
/// `data` is an empty list.
pub fn normalize_results(body: &[u8]) -> Result<Vec<LearningResult>, serde_json::Error> {
    let envelope: ResultsEnvelope = serde_json::from_slice(body)?;
    let payload = match envelope.data {
        Some(value) => ResultsPayload::from_value(value)?,
        None => None,
    };
    Ok(payload
        .map(ResultsPayload::into_results)
        .unwrap_or_default())
}

/// `meta.total` of the users response.
pub fn users_total(body: &[u8]) -> Result<u64, serde_json::Error> {
    let envelope: UsersEnvelope = serde_json::from_slice(body)?;
    envelope
        .meta
        .map(|meta| meta.total)
        .ok_or_else(|| serde::de::Error::missing_field("meta"))
}

/// `result` of the users response, empty when absent.
pub fn users_list(body: &[u8]) -> Result<Vec<User>, serde_json::Error> {
    let envelope: UsersEnvelope = serde_json::from_slice(body)?;
    Ok(envelope.result.unwrap_or_default())
}

/// `data.totalElements` of a paginated listing.
pub fn total_elements(body: &[u8]) -> Result<u64, serde_json::Error> {
    let envelope: PageCountEnvelope = serde_json::from_slice(body)?;
    Ok(envelope.data.total_elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bytes(value: serde_json::Value) -> Vec<u8> {
        value.to_string().into_bytes()
    }

    #[test]
    fn test_paginated_shape() {
        let body = bytes(json!({
            "data": {
                "content": [{"id": 1, "userId": 4}, {"id": 2, "userId": 5}],
                "totalElements": 2,
                "totalPages": 1
            }
        }));
        let results = normalize_results(&body).unwrap();
        assert_eq!(results.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_plain_array_shape() {
        let body = bytes(json!({"data": [{"id": 7}, {"id": 8}, {"id": 9}]}));
        assert_eq!(normalize_results(&body).unwrap().len(), 3);
    }

    #[test]
    fn test_single_object_shape() {
        let body = bytes(json!({"data": {"id": 5, "readingScore": 3.0}}));
        let results = normalize_results(&body).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].reading_score, 3.0);
    }

    #[test]
    fn test_missing_or_null_data_is_empty() {
        assert!(normalize_results(&bytes(json!({}))).unwrap().is_empty());
        assert!(normalize_results(&bytes(json!({"data": null}))).unwrap().is_empty());
        assert!(normalize_results(&bytes(json!({"data": {"content": []}})))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_row_without_id_keeps_the_page() {
        let body = bytes(json!({
            "data": {
                "content": [{"id": 1, "userId": 4}, {"userId": 5}, {"id": 3, "userId": 6}],
                "totalElements": 3
            }
        }));
        let results = normalize_results(&body).unwrap();
        assert_eq!(results.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 0, 3]);
        assert_eq!(results[1].user_id, Some(5));

        let list = bytes(json!({"data": [{"readingScore": 2.0}, {"id": 9}]}));
        assert_eq!(normalize_results(&list).unwrap().len(), 2);
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(normalize_results(b"not json").is_err());
        assert!(normalize_results(&bytes(json!({"data": "oops"}))).is_err());
        assert!(normalize_results(&bytes(json!({"data": 42}))).is_err());
        assert!(normalize_results(&bytes(json!({"data": {"content": null}}))).is_err());
        assert!(normalize_results(&bytes(json!({"data": {"content": {"id": 1}}}))).is_err());
    }

    #[test]
    fn test_users_total_and_list() {
        let body = bytes(json!({
            "meta": {"page": 1, "pageSize": 10, "pages": 3, "total": 27},
            "result": [{"id": 1, "email": "a@x.vn", "name": "A"}]
        }));
        assert_eq!(users_total(&body).unwrap(), 27);
        assert_eq!(users_list(&body).unwrap().len(), 1);
    }

    #[test]
    fn test_users_shapes_are_independent() {
        let only_list = bytes(json!({"result": []}));
        assert!(users_total(&only_list).is_err());
        assert!(users_list(&only_list).unwrap().is_empty());

        let only_meta = bytes(json!({"meta": {"total": 3}}));
        assert_eq!(users_total(&only_meta).unwrap(), 3);
        assert!(users_list(&only_meta).unwrap().is_empty());
    }

    #[test]
    fn test_total_elements() {
        assert_eq!(
            total_elements(&bytes(json!({"data": {"totalElements": 41, "content": []}}))).unwrap(),
            41
        );
        assert!(total_elements(&bytes(json!({"data": {}}))).is_err());
    }
}
