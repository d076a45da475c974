use std::time::Duration;

use crate::common::ShapeShiftError;

pub fn create_http_client(timeout: Duration) -> Result<reqwest::Client, ShapeShiftError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::ACCEPT,
                reqwest::header::HeaderValue::from_static("application/json"),
            );
            headers
        })
        .build()?;

    Ok(client)
}
