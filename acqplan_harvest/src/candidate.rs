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

//! acquisition plan candidate files and how we derive satellite unit and validity window from their names

use std::fmt;
use chrono::{DateTime,Utc};
use url::Url;
use tracing::debug;

use acqplan_common::datetime::{is_between_exclusive, parse_compact_utc_datetime, short_utc_datetime_string};

use crate::errors::{Result, malformed_record};
use crate::satellite::SatelliteUnit;

/// primary and fallback delimiter of filename segments
const PRIMARY_DELIMITER: char = '_';
const FALLBACK_DELIMITER: char = '-';

/// a (filename,locator) pair as advertised by the upstream index
#[derive(Debug,Clone,PartialEq)]
pub struct CandidateLink {
    pub name: String,
    pub locator: Url,
}

impl CandidateLink {
    pub fn new (name: impl ToString, locator: Url) -> Self {
        CandidateLink { name: name.to_string(), locator }
    }
}

/// a downloadable acquisition plan with the satellite unit and validity window encoded in its name, e.g.
/// `Sentinel-2A_MP_ACQ__KML_20170824T110000_20170910T140000.kml`
#[derive(Debug,Clone,PartialEq)]
pub struct CandidateFile {
    pub name: String,
    pub locator: Url,
    pub unit: SatelliteUnit,
    pub validity_start: DateTime<Utc>,
    pub validity_end: DateTime<Utc>,
}

impl CandidateFile {
    pub fn parse (name: &str, locator: Url) -> Result<Self> {
        let unit = SatelliteUnit::from_filename( name).ok_or_else( || malformed_record( format!("no satellite prefix in '{name}'")))?;
        let (validity_start, validity_end) = parse_validity_window( name)?;

        Ok( CandidateFile { name: name.to_string(), locator, unit, validity_start, validity_end } )
    }

    /// does the (open) validity window contain `now`
    pub fn is_valid_at (&self, now: &DateTime<Utc>) -> bool {
        is_between_exclusive( now, &self.validity_start, &self.validity_end)
    }
}

impl fmt::Display for CandidateFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{} - {}]", self.name, short_utc_datetime_string(&self.validity_start), short_utc_datetime_string(&self.validity_end))
    }
}

/// get the (start,end) validity window from the last two segments of a filename.
/// Segments are separated by '_', or by '-' if there are less than two '_' separated segments. The
/// extension (everything from the first '.' of the last segment) is ignored
pub fn parse_validity_window (name: &str) -> Result<(DateTime<Utc>,DateTime<Utc>)> {
    let mut segments: Vec<&str> = name.split( PRIMARY_DELIMITER).collect();
    if segments.len() < 2 {
        segments = name.split( FALLBACK_DELIMITER).collect();
    }

    let n = segments.len();
    if n < 2 {
        return Err( malformed_record( format!("no validity window in '{name}'")))
    }

    let end_seg = segments[n-1].split('.').next().unwrap_or_default();
    let start_seg = segments[n-2];

    let start = parse_compact_utc_datetime( start_seg).ok_or_else( || malformed_record( format!("invalid window start '{start_seg}' in '{name}'")))?;
    let end = parse_compact_utc_datetime( end_seg).ok_or_else( || malformed_record( format!("invalid window end '{end_seg}' in '{name}'")))?;

    Ok( (start,end) )
}

/// turn advertised links into candidates, dropping (and logging) the ones we can't parse.
/// Links with the same name are collapsed - the first position is kept but the last locator wins
pub fn parse_candidates (links: Vec<CandidateLink>) -> Vec<CandidateFile> {
    let mut candidates: Vec<CandidateFile> = Vec::with_capacity( links.len());

    for link in links {
        match CandidateFile::parse( &link.name, link.locator) {
            Ok(cf) => {
                if let Some(existing) = candidates.iter_mut().find( |c| c.name == cf.name) {
                    existing.locator = cf.locator;
                } else {
                    candidates.push( cf);
                }
            }
            Err(e) => debug!("rejected candidate: {e}")
        }
    }

    candidates
}
