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

//! selection of the authoritative acquisition plan per satellite unit

use chrono::{DateTime,Utc};

use crate::candidate::CandidateFile;
use crate::satellite::SatelliteUnit;

/// all candidates of `unit` whose validity window contains `now`, in input order
pub fn valid_candidates<'a> (candidates: &'a [CandidateFile], unit: SatelliteUnit, now: DateTime<Utc>) -> impl Iterator<Item=&'a CandidateFile> + 'a {
    candidates.iter().filter( move |c| c.unit == unit && c.is_valid_at( &now))
}

/// pick the candidate of `unit` that is valid at `now` and has the latest validity end.
/// If several candidates share the latest end the first one (in input order) wins. Returns None if
/// there is no valid candidate
pub fn select<'a> (candidates: &'a [CandidateFile], unit: SatelliteUnit, now: &DateTime<Utc>) -> Option<&'a CandidateFile> {
    let mut best: Option<&'a CandidateFile> = None;

    for c in valid_candidates( candidates, unit, *now) {
        match best {
            Some(b) if b.validity_end >= c.validity_end => {} // keep first seen on ties
            _ => best = Some(c)
        }
    }

    best
}
