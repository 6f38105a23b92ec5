use serde::Deserialize;

use crate::{error::AppResult, models::Movie};

pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    language: String,
}

impl TmdbClient {
    pub fn new(
        client: reqwest::Client,
        api_key: String,
        base_url: String,
        language: String,
    ) -> Self {
        // Warn once on app load; every upstream call will 401 without a key
        if api_key.trim().is_empty() {
            tracing::warn!("no API_KEY provided, TMDB requests will fail");
        }

        Self { client, api_key, base_url, language }
    }

    /// This week's trending titles, reshaped into the display Movie form.
    pub async fn trending(&self) -> AppResult<Vec<Movie>> {
        let url = format!("{}/trending/all/week", self.base_url.trim_end_matches('/'));

        let resp: TrendingResponse = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str()), ("language", self.language.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(map_trending(resp))
    }

    /// Search results, passed through verbatim. The page is pinned to 2, so
    /// page 1 is unreachable. Known defect, kept as-is.
    pub async fn search_by_name(&self, name: &str) -> AppResult<Vec<serde_json::Value>> {
        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));

        let resp: SearchResponse = self
            .client
            .get(url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
                ("query", name),
                ("page", "2"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(resp.results)
    }
}

fn map_trending(resp: TrendingResponse) -> Vec<Movie> {
    resp.results
        .into_iter()
        .map(|item| Movie {
            id: item.id,
            title: item.title,
            release_date: item.release_date,
            poster_path: item.poster_path,
            overview: item.overview,
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct TrendingResponse {
    results: Vec<TrendingItem>,
}

#[derive(Debug, Deserialize)]
struct TrendingItem {
    id: Option<i64>,
    title: Option<String>,
    release_date: Option<String>,
    poster_path: Option<String>,
    overview: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<serde_json::Value>,
}
