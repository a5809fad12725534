use crate::shared::http::api_error::ApiError;

/// Parses the `:id` path segment. A segment that is not an integer can never
/// match a record, so it is reported as not found rather than as a bad request.
/// The whole segment must be an integer: `2abc` is not read as `2`.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim().parse::<i64>().map_err(|_| ApiError::NotFound)
}
