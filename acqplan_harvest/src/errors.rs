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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarvestError>;

#[derive(Error,Debug)]
pub enum HarvestError {
    /// the index page of a mission could not be fetched
    #[error("listing unavailable {0}")]
    ListingUnavailable(String),

    /// no advertised file covers the current time for a satellite unit
    #[error("no valid candidate {0}")]
    NoValidCandidate(String),

    #[error("retrieval failed {0}")]
    RetrievalFailed(String),

    /// a single filename or footprint could not be parsed. This is local to the candidate/record
    #[error("malformed record {0}")]
    MalformedRecord(String),

    #[error("write failed {0}")]
    WriteFailed(String),

    /// retrieved bytes are not a well formed plan document
    #[error("document error {0}")]
    DocumentError(String),

    #[error("config error {0}")]
    ConfigError( #[from] acqplan_common::config::ConfigError),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("http error {0}")]
    HttpError( #[from] acqplan_common::net::NetError),

    #[error("XML error {0}")]
    XmlError( #[from] quick_xml::Error),

    #[error("URL error {0}")]
    UrlError( #[from] url::ParseError),

    /// a generic error
    #[error("operation failed {0}")]
    OpFailed(String)
}

pub fn op_failed (msg: impl ToString)->HarvestError {
    HarvestError::OpFailed(msg.to_string())
}

pub fn malformed_record (msg: impl ToString)->HarvestError {
    HarvestError::MalformedRecord(msg.to_string())
}

pub fn document_error (msg: impl ToString)->HarvestError {
    HarvestError::DocumentError(msg.to_string())
}
