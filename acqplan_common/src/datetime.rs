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

use chrono::{DateTime, NaiveDateTime, Utc};
use std::time::Duration;

/// format of compact (ISO 8601 basic) timestamps such as "20170824T110000"
pub const COMPACT_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%S";
pub const COMPACT_DATETIME_LEN: usize = 15;

#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }

/// this should be used wherever we might have to use sim clock instead of wall clock
#[inline]
pub fn utc_now()->DateTime<Utc> {
    Utc::now()
}

/// parse a compact "YYYYMMDDTHHMMSS" timestamp that is supposed to be in UTC.
/// Anything that is not exactly 15 chars with digits and a 'T' separator (either case) is rejected,
/// which is stricter than chrono's `%Y` (which would also accept signed or longer years)
pub fn parse_compact_utc_datetime (s: &str) -> Option<DateTime<Utc>> {
    let bs = s.as_bytes();
    if bs.len() != COMPACT_DATETIME_LEN || !bs[8].eq_ignore_ascii_case( &b'T') { return None }
    if !bs.iter().enumerate().all( |(i,b)| i == 8 || b.is_ascii_digit()) { return None }

    NaiveDateTime::parse_from_str( &s.to_ascii_uppercase(), COMPACT_DATETIME_FORMAT).ok().map( |ndt| ndt.and_utc())
}

pub fn short_utc_datetime_string (dt: &DateTime<Utc>) -> String {
    format!("{}", dt.format("%Y-%m-%dT%H:%M:%S%Z"))
}

/// open interval check (both bounds exclusive)
pub fn is_between_exclusive (dt: &DateTime<Utc>, dt_start: &DateTime<Utc>, dt_end: &DateTime<Utc>) -> bool {
    dt > dt_start && dt < dt_end
}
