//! Distance Matrix response body.
//!
//! Only the fields needed to pull the first route's distance are modelled.

use serde::Deserialize;

use crate::RoutingError;

#[derive(Debug, Deserialize)]
pub struct MatrixResponse {
    /// Top-level request status (`OK`, `REQUEST_DENIED`, ...).
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
pub struct MatrixRow {
    #[serde(default)]
    pub elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
pub struct MatrixElement {
    #[serde(default)]
    pub status: Option<String>,
    pub distance: Option<MatrixValue>,
}

#[derive(Debug, Deserialize)]
pub struct MatrixValue {
    /// Metres.
    pub value: u64,
}

impl MatrixResponse {
    /// Distance in metres of the first origin/destination pair.
    pub fn first_distance_meters(&self) -> Result<u64, RoutingError> {
        if let Some(status) = self.status.as_deref().filter(|s| *s != "OK") {
            let detail = self.error_message.as_deref().unwrap_or("no detail");
            return Err(RoutingError::Malformed(format!(
                "request status {status}: {detail}"
            )));
        }

        let element = self
            .rows
            .first()
            .and_then(|row| row.elements.first())
            .ok_or_else(|| RoutingError::Malformed("response has no route elements".into()))?;

        if let Some(status) = element.status.as_deref().filter(|s| *s != "OK") {
            return Err(RoutingError::Malformed(format!("element status {status}")));
        }

        element
            .distance
            .as_ref()
            .map(|d| d.value)
            .ok_or_else(|| RoutingError::Malformed("route element has no distance".into()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> MatrixResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn extracts_first_element_distance() {
        let body = parse(json!({
            "status": "OK",
            "rows": [{ "elements": [
                { "status": "OK", "distance": { "text": "429 km", "value": 429_874 } },
                { "status": "OK", "distance": { "text": "1 km", "value": 1_000 } }
            ]}]
        }));
        assert_eq!(body.first_distance_meters().unwrap(), 429_874);
    }

    #[test]
    fn missing_rows_is_malformed() {
        let body = parse(json!({ "status": "OK", "rows": [] }));
        assert_matches!(body.first_distance_meters(), Err(RoutingError::Malformed(_)));
    }

    #[test]
    fn denied_request_is_malformed() {
        let body = parse(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "rows": []
        }));
        let err = body.first_distance_meters().unwrap_err();
        assert!(err.to_string().contains("REQUEST_DENIED"));
    }

    #[test]
    fn zero_results_element_is_malformed() {
        let body = parse(json!({
            "status": "OK",
            "rows": [{ "elements": [{ "status": "ZERO_RESULTS" }] }]
        }));
        assert_matches!(body.first_distance_meters(), Err(RoutingError::Malformed(_)));
    }
}
