use serde::Deserialize;

use crate::error::{Error, Result};

/// Metadata returned by the external API for a (group, song) pair.
#[derive(Deserialize, Debug)]
pub struct SongInfo {
    pub artist: String,
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    pub text: String,
    pub link: String,
}

/// Fetches song metadata from `GET {base}/info?group=&song=`.
///
/// Any transport failure, non-200 status, or unparseable body is reported
/// as an external API error; there are no retries.
pub async fn fetch_song_info(base_url: &str, group: &str, song: &str) -> Result<SongInfo> {
    let url = format!("{}/info", base_url);

    tracing::debug!("Fetching song info from external API: {}", url);

    let client = reqwest::Client::new();
    let response = client
        .get(&url)
        .query(&[("group", group), ("song", song)])
        .send()
        .await
        .map_err(|err| Error::ExternalApiError(format!("request failed: {err}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::ExternalApiError(format!(
            "external API returned {status}"
        )));
    }

    response
        .json::<SongInfo>()
        .await
        .map_err(|err| Error::ExternalApiError(format!("invalid response body: {err}")))
}
