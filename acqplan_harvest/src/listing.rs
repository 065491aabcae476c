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

//! discovery of acquisition plan links on mission index pages.
//!
//! WATCH OUT - the upstream page layout changes from time to time. Everything that depends on it
//! is kept in [`LinkDiscovery`] configs so that we can adapt without code changes. Current layout (as of 2025):
//! ```text
//! <div class="sentinel-2a"> .. <li><a href="/documents/d/sentinel/s2a_mp_acq__kml_20250102t120000_20250120t150000">..</a></li> .. </div>
//! ```

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize,Deserialize};
use tracing::{debug,warn};
use url::Url;

use acqplan_common::if_let;
use acqplan_common::net::{NetError, resolve_href, url_file_name};

use crate::candidate::CandidateLink;
use crate::errors::Result;

const PLAN_FILE_EXT: &str = ".kml";

lazy_static! {
    // [href,text]
    static ref ANCHOR_RE: Regex = Regex::new( r#"(?is)<a\s[^>]*?\bhref\s*=\s*["']([^"']*)["'][^>]*>(.*?)</a\s*>"#).unwrap();
    // [tag,classes]
    static ref CLASS_ELEM_RE: Regex = Regex::new( r#"(?is)<([a-z][a-z0-9]*)\b[^>]*?\bclass\s*=\s*["']([^"']*)["'][^>]*>"#).unwrap();
    static ref TAG_RE: Regex = Regex::new( r"(?s)<[^>]*>").unwrap();
}

/// the page layout dependent part of finding the plan files of a satellite unit
#[derive(Debug,Clone,Serialize,Deserialize,PartialEq)]
pub struct LinkDiscovery {
    /// CSS class of the page element that holds the links for this unit. None means the whole page
    pub section_class: Option<String>,

    /// URL path prefix of plan file links (e.g. "/documents")
    pub href_prefix: String,

    /// anchors whose text starts with this are not plan files (e.g. links to mission pages)
    pub skip_text_prefix: Option<String>,
}

impl LinkDiscovery {
    pub fn new (section_class: Option<&str>, href_prefix: &str, skip_text_prefix: Option<&str>) -> Self {
        LinkDiscovery {
            section_class: section_class.map( |s| s.to_string()),
            href_prefix: href_prefix.to_string(),
            skip_text_prefix: skip_text_prefix.map( |s| s.to_string())
        }
    }
}

/// source of mission index pages
#[async_trait]
pub trait ListingFetcher {
    async fn fetch_index (&self, index_url: &Url) -> Result<String>;
}

/// get the (filename,locator) pairs of all links in `html` that match `discovery`, in document order.
/// Relative hrefs are resolved against `page_url`
pub fn discover_links (html: &str, page_url: &Url, discovery: &LinkDiscovery) -> Vec<CandidateLink> {
    let scope = match &discovery.section_class {
        Some(class) => match section_content( html, class) {
            Some(content) => content,
            None => {
                warn!("no element with class '{class}' in {page_url}");
                return Vec::new()
            }
        }
        None => html
    };

    let mut links: Vec<CandidateLink> = Vec::new();

    for cap in ANCHOR_RE.captures_iter( scope) {
        let href = cap[1].trim();
        let text = anchor_text( &cap[2]);

        if let Some(prefix) = &discovery.skip_text_prefix {
            if text.starts_with( prefix.as_str()) { continue }
        }

        if_let! {
            Ok(url) = { resolve_href( page_url, href) } else |e: std::result::Result<Url,NetError>| { debug!("ignoring link: {:?}", e.err()) },
            Some(name) = plan_file_name( &url, &discovery.href_prefix) => {
                links.push( CandidateLink::new( name, url))
            }
        }
    }

    links
}

/// the content of the first element that has `class` in its class list. If the element is not
/// closed we return everything up to the end of the page
pub fn section_content<'a> (html: &'a str, class: &str) -> Option<&'a str> {
    for cap in CLASS_ELEM_RE.captures_iter( html) {
        if !cap[2].split_whitespace().any( |c| c == class) { continue }

        let start_tag = cap.get(0)?;
        if start_tag.as_str().ends_with("/>") { return Some("") }

        let body_start = start_tag.end();
        let body = &html[body_start..];
        let tag_re = Regex::new( &format!(r"(?i)<(/?){}\b[^>]*>", regex::escape( &cap[1]))).ok()?;

        let mut depth = 1;
        for t in tag_re.captures_iter( body) {
            let tag = t.get(0)?;
            if t[1].is_empty() {
                if !tag.as_str().ends_with("/>") { depth += 1 }
            } else {
                depth -= 1;
                if depth == 0 { return Some( &body[..tag.start()]) }
            }
        }
        return Some(body)
    }
    None
}

/// the filename of a plan link, which is the last path segment that ends with ".kml" or otherwise the
/// last path segment (some links point to extension-less document ids ending in the validity end).
/// Returns None if the link path does not start with `href_prefix`
pub fn plan_file_name (url: &Url, href_prefix: &str) -> Option<String> {
    if !url.path().starts_with( href_prefix) { return None }

    url.path_segments()
        .and_then( |mut segs| segs.rfind( |s| s.to_ascii_lowercase().ends_with( PLAN_FILE_EXT)))
        .or_else( || url_file_name( url))
        .map( |s| s.to_string())
}

fn anchor_text (inner_html: &str) -> String {
    TAG_RE.replace_all( inner_html, "").trim().to_string()
}
