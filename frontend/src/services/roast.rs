//! HTTP service for sending a resume to the roast backend.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::UPLOAD_FIELD;
use crate::types::{AppError, AppResult, RoastResult};

/// Upload a PDF to `endpoint` and decode the backend's answer.
///
/// Non-OK statuses are not errors on their own: the backend reports its
/// failures as `{ "error": ... }` bodies, which decode to
/// [`RoastResult::Failure`].
pub async fn roast_resume(file: &File, endpoint: &str) -> AppResult<RoastResult> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Dom(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| AppError::Dom(format!("Failed to append file: {:?}", e)))?;

    let request = Request::post(endpoint)
        .body(form_data)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

    log::info!("📤 Uploading {} to {}", file.name(), endpoint);

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        log::warn!("Backend answered {} {}", response.status(), response.status_text());
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

    parse_roast_response(&body)
}

/// Decode a `/roast` response body.
pub fn parse_roast_response(body: &str) -> AppResult<RoastResult> {
    serde_json::from_str(body).map_err(|e| AppError::Parse(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScoreTone;

    #[test]
    fn test_parse_success_body() {
        let body = r#"{
            "roast_critique": "Your resume uses Comic Sans. Bold.",
            "professional_suggestions": [
                "Pick one font",
                "Quantify your impact",
                "Cut the objective statement"
            ],
            "rating": 9
        }"#;

        let result = parse_roast_response(body).unwrap();
        let RoastResult::Report(report) = result else {
            panic!("expected a report");
        };
        assert_eq!(report.tone(), ScoreTone::Green);
        assert_eq!(report.professional_suggestions.len(), 3);
        assert_eq!(report.professional_suggestions[0], "Pick one font");
        assert_eq!(report.professional_suggestions[2], "Cut the objective statement");
    }

    #[test]
    fn test_parse_error_body() {
        let body = r#"{"error": "Could not read text. Is this PDF empty or scanned?"}"#;
        let result = parse_roast_response(body).unwrap();
        assert!(matches!(result, RoastResult::Failure { ref error, .. } if error.contains("scanned")));
    }

    #[test]
    fn test_parse_garbage_body() {
        let err = parse_roast_response("Internal Server Error").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));

        let err = parse_roast_response("").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }
}
