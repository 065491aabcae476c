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

///! common utility functions for network operations

use std::time::Duration;
use reqwest::{Client, StatusCode, Response};
use url::Url;

use crate::define_error;

define_error!{ pub NetError =
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    NotFoundError(String) : "not found {0}",
    OpFailed(String) : "operation failed: {0}",
    ParseError(String) : "parse error: {0}"
}

pub type Result<T> = std::result::Result<T, NetError>;

/// create a HTTP client with a per-request timeout
pub fn create_client (timeout: Duration) -> Result<Client> {
    Ok( Client::builder().timeout(timeout).build()? )
}

/// retrieve the body of a HTTP GET response as text
pub async fn get_text (client: &Client, url: &Url) -> Result<String> {
    let response = checked_get( client, url).await?;
    Ok( response.text().await? )
}

/// retrieve the complete body of a HTTP GET response. Retrieve in chunks so that we don't depend
/// on a content-length header
pub async fn get_bytes (client: &Client, url: &Url) -> Result<Vec<u8>> {
    let mut response = checked_get( client, url).await?;
    let mut buf: Vec<u8> = Vec::new();

    while let Some(chunk) = response.chunk().await? {
        buf.extend_from_slice( &chunk);
    }
    Ok(buf)
}

async fn checked_get (client: &Client, url: &Url) -> Result<Response> {
    let response = client.get( url.clone()).send().await?;

    match response.status() {
        StatusCode::OK => Ok(response),
        StatusCode::NOT_FOUND => Err( NetError::NotFoundError(format!("{url}"))),
        other => Err( NetError::OpFailed(format!("response status {other:?}")))
    }
}

/// get filename part (last non-empty path element) of an absolute URL
pub fn url_file_name<'a> (url: &'a Url) -> Option<&'a str> {
    url.path_segments().and_then( |segs| segs.filter( |s| !s.is_empty()).last())
}

/// resolve a (possibly relative) href against the URL of the page it was found in
pub fn resolve_href (base: &Url, href: &str) -> Result<Url> {
    base.join( href).map_err( |e| NetError::ParseError(format!("invalid href '{href}': {e}")))
}
