use reqwest::Url;
use serde_json::Value;

use super::ApiError;

// ============================================================================
// Helper Functions
// ============================================================================

/// Parse and validate the configured backend base URL
pub fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl(format!("{trimmed}: {e}")))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{trimmed}: unsupported scheme {other}"
            )))
        }
    }

    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidBaseUrl(trimmed.to_string()));
    }

    Ok(url)
}

/// Append path segments to the base URL, percent-encoding each one
pub fn join_segments(base: &Url, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Pull the human-readable `detail` out of an error body.
///
/// Plain `{"detail": "..."}` bodies are used verbatim; validation errors
/// shaped as `{"detail": [{"msg": "..."}]}` yield the first message.
pub fn extract_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let detail = value.get("detail")?;

    let text = match detail {
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))
            .map(|s| s.trim().to_string())?,
        _ => return None,
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
