// src/core/net.rs

// Blocking HTTP GET for bulletin-board pages.

use std::{error::Error, time::Duration};

use reqwest::blocking::Client;

use crate::config::consts::{PAGE_PARAM, TIMEOUT_SECS, USER_AGENT};

/// One client for the whole run; every page goes through the same endpoint.
pub struct Fetcher {
    client: Client,
    base_url: String,
}

impl Fetcher {
    pub fn new(base_url: &str) -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, base_url: s!(base_url) })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET one listing page and return the body text.
    /// Non-2xx statuses are errors; nothing is retried.
    pub fn fetch_page(
        &self,
        page: u32,
        params: &[(&str, &str)],
    ) -> Result<String, Box<dyn Error>> {
        let page = page.to_string();
        let mut query: Vec<(&str, &str)> = params.to_vec();
        query.push((PAGE_PARAM, &page));

        logd!("GET {} page={page}", self.base_url);
        let resp = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()?
            .error_for_status()?;

        let body = resp.text()?;
        logd!("page={page}: {} bytes", body.len());
        Ok(body)
    }
}
