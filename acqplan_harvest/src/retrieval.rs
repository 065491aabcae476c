/*
 * Copyright © 2024, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! retrieval of index pages and plan documents over HTTP

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use acqplan_common::net::{create_client, get_bytes, get_text};

use crate::errors::Result;
use crate::listing::ListingFetcher;

/// source of plan document bytes
#[async_trait]
pub trait DocumentRetriever {
    async fn retrieve (&self, locator: &Url) -> Result<Vec<u8>>;
}

/// the production [`ListingFetcher`] and [`DocumentRetriever`] that goes to the upstream web server
#[derive(Debug,Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new (timeout: Duration) -> Result<Self> {
        Ok( HttpClient { client: create_client( timeout)? } )
    }
}

#[async_trait]
impl ListingFetcher for HttpClient {
    async fn fetch_index (&self, index_url: &Url) -> Result<String> {
        debug!("fetching index {index_url}");
        Ok( get_text( &self.client, index_url).await? )
    }
}

#[async_trait]
impl DocumentRetriever for HttpClient {
    async fn retrieve (&self, locator: &Url) -> Result<Vec<u8>> {
        debug!("retrieving {locator}");
        let bytes = get_bytes( &self.client, locator).await?;
        debug!("retrieved {} bytes from {locator}", bytes.len());
        Ok(bytes)
    }
}
