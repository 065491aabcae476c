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

//! planar polygon support for lon/lat (degrees) footprints and areas of interest.
//! We wrap the [geo](https://docs.rs/geo/latest/geo/index.html) types with the new type pattern so that we
//! can enforce closed rings on construction and give them a compact serde representation (list of (lon,lat) tuples)

use std::fmt;
use serde::{Serialize,Deserialize,Serializer,Deserializer};
use serde::de::{Error as DeError};

use geo::{Coord, CoordsIter, Intersects, LineString, Polygon};

pub type GeoCoord = Coord<f64>;

/// minimum number of distinct vertices of a ring
pub const MIN_RING_VERTICES: usize = 3;

/* #region GeoPolygon ***********************************************************************************************/

/// a wrapper for a geo::Polygon without holes whose exterior ring is given in (longitude,latitude) degrees.
/// Coordinates are not normalized - intersection tests are planar, i.e. we do not handle the antimeridian
#[derive(Debug,Clone,PartialEq)]
pub struct GeoPolygon(Polygon);

impl GeoPolygon {
    /// create polygon from an open or closed ring. The ring is closed if first and last vertex differ.
    /// Returns None if the ring has less than 3 distinct vertices or non-finite coordinates
    pub fn from_ring (mut coords: Vec<GeoCoord>) -> Option<Self> {
        if coords.iter().any( |c| !(c.x.is_finite() && c.y.is_finite())) { return None }

        if let (Some(first),Some(last)) = (coords.first(),coords.last()) {
            if first != last {
                let first = *first;
                coords.push( first);
            }
        }

        if n_distinct_vertices( &coords) < MIN_RING_VERTICES { return None }

        Some( GeoPolygon( Polygon::new( LineString::new(coords), Vec::new())) )
    }

    pub fn from_lon_lat_degrees (lon_lats: &[(f64,f64)]) -> Option<Self> {
        Self::from_ring( lon_lats.iter().map( |(lon,lat)| Coord { x: *lon, y: *lat }).collect())
    }

    /// do we share at least one point with `other` (this includes touching boundaries and containment)
    pub fn intersects (&self, other: &GeoPolygon) -> bool {
        self.0.intersects( &other.0)
    }

    pub fn polygon<'a> (&'a self) -> &'a Polygon { &self.0 }

    /// the closed exterior ring as (lon,lat) tuples
    pub fn lon_lat_degrees (&self) -> Vec<(f64,f64)> {
        self.0.exterior().coords().map( |c| (c.x, c.y)).collect()
    }

    pub fn coords_count (&self) -> usize { self.0.exterior().coords_count() }
}

/// number of vertices after removing consecutive duplicates and the closing vertex
fn n_distinct_vertices (coords: &[GeoCoord]) -> usize {
    let mut n = 0;
    let mut prev: Option<&GeoCoord> = None;
    for c in coords {
        if prev != Some(c) { n += 1 }
        prev = Some(c);
    }
    if n > 1 && coords.first() == coords.last() { n -= 1 }
    n
}

impl fmt::Display for GeoPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "POLYGON((")?;
        for (i,c) in self.0.exterior().coords().enumerate() {
            if i > 0 { write!(f, ",")? }
            write!(f, "{} {}", c.x, c.y)?;
        }
        write!(f, "))")
    }
}

impl Serialize for GeoPolygon {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        self.lon_lat_degrees().serialize( serializer)
    }
}

impl<'de> Deserialize<'de> for GeoPolygon {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        let lon_lats: Vec<(f64,f64)> = Vec::deserialize(deserializer)?;
        GeoPolygon::from_lon_lat_degrees( &lon_lats).ok_or( DeError::custom("not a valid polygon ring"))
    }
}

/* #endregion GeoPolygon */
