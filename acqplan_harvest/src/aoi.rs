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

//! areas of interest (AOI) used to filter acquisition plan footprints

use serde::{Serialize,Deserialize};
use acqplan_common::geo::GeoPolygon;

use crate::errors::{Result, op_failed};
use crate::satellite::MissionFamily;

/// bounding box of Norway and its sea areas (lon,lat)
pub const NORWAY_BBOX: [(f64,f64);5] = [
    (-29.307389598466298, 55.7151475256469),
    (34.51470787304025, 55.7151475256469),
    (34.51470787304025, 83.54659771121828),
    (-29.307389598466298, 83.54659771121828),
    (-29.307389598466298, 55.7151475256469),
];

/// Norwegian mainland and Bjørnøya
pub const NORWAY_MAINLAND: [(f64,f64);12] = [
    (2.68, 58.06), (2.68, 58.06), (8.57, 57.83), (12.26, 58.94), (14.02, 63.65), (20.26, 68.16),
    (35.46, 69.31), (28.34, 74.67), (16.39, 74.86), (2.68, 64.50), (2.68, 58.06), (2.68, 58.06),
];

/// Svalbard with surrounding waters
pub const SVALBARD: [(f64,f64);8] = [
    (17.82, 75.14), (26.67, 74.99), (52.09, 80.33), (52.37, 84.80), (-20.72, 84.78), (-3.30, 77.37),
    (17.82, 75.14), (17.82, 75.14),
];

pub const JAN_MAYEN: [(f64,f64);5] = [
    (-11.25, 70.43), (-5.03, 70.43), (-5.03, 71.72), (-11.25, 71.72), (-11.25, 70.43),
];

/// default name tag of our AOI sets, which is also used for output filenames
pub const NORWAY_AOI_NAME: &str = "norwAOI";

/// a named set of polygons. A footprint is inside the AOI if it intersects any of them
#[derive(Debug,Clone,Serialize,Deserialize,PartialEq)]
pub struct AoiSet {
    pub name: String,
    pub polygons: Vec<GeoPolygon>,
}

impl AoiSet {
    pub fn new (name: impl ToString, rings: &[&[(f64,f64)]]) -> Result<Self> {
        let polygons = rings.iter()
            .map( |ring| GeoPolygon::from_lon_lat_degrees( ring).ok_or_else( || op_failed("invalid AOI ring")))
            .collect::<Result<Vec<GeoPolygon>>>()?;

        if polygons.is_empty() { return Err( op_failed("AOI set without polygons")) }
        Ok( AoiSet { name: name.to_string(), polygons } )
    }

    /// the built-in AOI for a mission family: a single bounding box for Sentinel-1 and the three
    /// disjoint Norwegian regions for Sentinel-2
    pub fn for_family (family: MissionFamily) -> Self {
        let rings: &[&[(f64,f64)]] = match family {
            MissionFamily::Sentinel1 => &[&NORWAY_BBOX],
            MissionFamily::Sentinel2 => &[&NORWAY_MAINLAND, &SVALBARD, &JAN_MAYEN],
        };
        AoiSet::new( NORWAY_AOI_NAME, rings).expect("built-in AOI rings are valid")
    }

    pub fn intersects (&self, footprint: &GeoPolygon) -> bool {
        self.polygons.iter().any( |p| p.intersects( footprint))
    }
}
