//! Remote postal pincode query.
//!
//! The service answers with a JSON array whose first element carries a
//! `Status` field and a list of post office records; a resolved PIN has
//! `Status == "Success"` and at least one record with `State`/`District`.

use serde::Deserialize;

use crate::types::{Location, LookupConfig, LookupError};

#[derive(Debug, Deserialize)]
struct PinResponse {
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "PostOffice", default)]
    post_offices: Option<Vec<PostOffice>>,
}

#[derive(Debug, Deserialize)]
struct PostOffice {
    #[serde(rename = "State", default)]
    state: Option<String>,
    #[serde(rename = "District", default)]
    district: Option<String>,
}

pub(crate) async fn remote(pin: &str, config: &LookupConfig) -> Result<Location, LookupError> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()?;

    let url = format!("{}/{pin}", config.endpoint.trim_end_matches('/'));
    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Status(status.as_u16()));
    }

    let body: Vec<PinResponse> = response.json().await.map_err(|err| {
        tracing::debug!(pin, error = %err, "pincode response decode failed");
        LookupError::Malformed
    })?;

    let first = body.first().ok_or(LookupError::Malformed)?;
    if first.status != "Success" {
        return Err(LookupError::NotResolved);
    }

    let office = first
        .post_offices
        .as_deref()
        .and_then(<[PostOffice]>::first)
        .ok_or(LookupError::Malformed)?;

    Ok(Location {
        state: office.state.clone().unwrap_or_default(),
        city: office.district.clone().unwrap_or_default(),
    })
}
