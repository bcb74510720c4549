use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use super::constants::{self, headers};
use super::error::ApiError;
use super::models::AccessToken;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialResponse {
    access_token: String,
}

/// Exchange a personal access token for a session token on `url`
pub async fn authenticate(
    http_client: &reqwest::Client,
    url: &str,
    token: &str,
) -> Result<AccessToken, ApiError> {
    let credential_url = format!("{}/{}", url.trim_end_matches('/'), constants::CREDENTIAL_PATH);
    log::info!("Authenticating to {}", url);

    let response = http_client
        .get(&credential_url)
        .bearer_auth(token)
        .header("Accept", headers::CONTENT_TYPE_JSON)
        .send()
        .await?;

    let status = response.status();
    log::debug!("Token request status: {}", status);

    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status.as_u16(), &error_text));
    }

    let credential: CredentialResponse = response.json().await?;
    let client_space_id = client_space_id(&credential.access_token)?;
    log::info!("Successfully authenticated on client space {}", client_space_id);

    Ok(AccessToken {
        value: credential.access_token,
        client_space_id,
    })
}

/// Read the client space id (`cid` claim) from a session token's JWT payload
pub fn client_space_id(access_token: &str) -> Result<String, ApiError> {
    let payload = access_token
        .split('.')
        .nth(1)
        .ok_or_else(|| ApiError::InvalidResponse("access token is not a JWT".to_string()))?;

    let decoded = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| ApiError::InvalidResponse(format!("access token payload: {}", e)))?;
    let claims: serde_json::Value = serde_json::from_slice(&decoded)?;

    claims
        .get("cid")
        .and_then(|cid| cid.as_str())
        .map(str::to_string)
        .ok_or_else(|| ApiError::InvalidResponse("access token has no cid claim".to_string()))
}
