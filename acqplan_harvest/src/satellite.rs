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

use std::{fmt, str::FromStr};
use serde::{Serialize,Deserialize};

use crate::errors::{HarvestError, op_failed};

/// the Sentinel mission families we support
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum MissionFamily {
    Sentinel1,
    Sentinel2,
}

impl MissionFamily {
    pub fn name (&self) -> &'static str {
        match self {
            MissionFamily::Sentinel1 => "Sentinel-1",
            MissionFamily::Sentinel2 => "Sentinel-2",
        }
    }

    pub fn units (&self) -> &'static [SatelliteUnit] {
        match self {
            MissionFamily::Sentinel1 => &[SatelliteUnit::S1A, SatelliteUnit::S1B, SatelliteUnit::S1C],
            MissionFamily::Sentinel2 => &[SatelliteUnit::S2A, SatelliteUnit::S2B, SatelliteUnit::S2C],
        }
    }
}

impl fmt::Display for MissionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// accepts "Sentinel-1", "sentinel1", "s1" etc. (case insensitive)
impl FromStr for MissionFamily {
    type Err = HarvestError;

    fn from_str (s: &str) -> Result<Self,Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "sentinel1" | "s1" => Ok(MissionFamily::Sentinel1),
            "sentinel2" | "s2" => Ok(MissionFamily::Sentinel2),
            _ => Err( op_failed( format!("unknown mission family '{s}'")))
        }
    }
}

/// a single satellite of a mission family
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum SatelliteUnit {
    S1A, S1B, S1C,
    S2A, S2B, S2C,
}

impl SatelliteUnit {
    pub const ALL: [SatelliteUnit;6] = [
        SatelliteUnit::S1A, SatelliteUnit::S1B, SatelliteUnit::S1C,
        SatelliteUnit::S2A, SatelliteUnit::S2B, SatelliteUnit::S2C
    ];

    pub fn family (&self) -> MissionFamily {
        match self {
            SatelliteUnit::S1A | SatelliteUnit::S1B | SatelliteUnit::S1C => MissionFamily::Sentinel1,
            SatelliteUnit::S2A | SatelliteUnit::S2B | SatelliteUnit::S2C => MissionFamily::Sentinel2,
        }
    }

    /// short tag such as "S1A"
    pub fn tag (&self) -> &'static str {
        match self {
            SatelliteUnit::S1A => "S1A",
            SatelliteUnit::S1B => "S1B",
            SatelliteUnit::S1C => "S1C",
            SatelliteUnit::S2A => "S2A",
            SatelliteUnit::S2B => "S2B",
            SatelliteUnit::S2C => "S2C",
        }
    }

    /// long name such as "Sentinel-1A"
    pub fn satellite_name (&self) -> String {
        format!("{}{}", self.family().name(), &self.tag()[2..])
    }

    /// identify the unit from the prefix of an acquisition plan filename. Upstream uses both long
    /// ("Sentinel-2A_MP_ACQ__KML_..") and short ("s2a_..") prefixes, so we check both case insensitive
    pub fn from_filename (name: &str) -> Option<SatelliteUnit> {
        let lc = name.to_ascii_lowercase();
        SatelliteUnit::ALL.into_iter().find( |unit| {
            lc.starts_with( &unit.tag().to_ascii_lowercase()) || lc.starts_with( &unit.satellite_name().to_ascii_lowercase())
        })
    }
}

impl fmt::Display for SatelliteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// accepts both short tags ("S1A") and satellite names ("Sentinel-1A"), case insensitive
impl FromStr for SatelliteUnit {
    type Err = HarvestError;

    fn from_str (s: &str) -> Result<Self,Self::Err> {
        SatelliteUnit::ALL.into_iter()
            .find( |unit| unit.tag().eq_ignore_ascii_case(s) || unit.satellite_name().eq_ignore_ascii_case(s))
            .ok_or_else( || op_failed( format!("unknown satellite unit '{s}'")))
    }
}
