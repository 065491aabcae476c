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
#![allow(unused)]

use acqplan_common::geo::*;

// run with "cargo test test_xx -- --nocapture"

fn square (x0: f64, y0: f64, x1: f64, y1: f64) -> GeoPolygon {
    GeoPolygon::from_lon_lat_degrees( &[(x0,y0), (x1,y0), (x1,y1), (x0,y1)]).unwrap()
}

#[test]
fn test_ring_closing() {
    let open = GeoPolygon::from_lon_lat_degrees( &[(10.0,60.0), (10.0,61.0), (11.0,61.0), (11.0,60.0)]).unwrap();
    let closed = GeoPolygon::from_lon_lat_degrees( &[(10.0,60.0), (10.0,61.0), (11.0,61.0), (11.0,60.0), (10.0,60.0)]).unwrap();
    println!("open: {open}");
    println!("closed: {closed}");

    assert_eq!( open.coords_count(), 5);
    assert_eq!( open, closed);
    assert_eq!( open.lon_lat_degrees().first(), open.lon_lat_degrees().last());
}

#[test]
fn test_degenerate_rings() {
    assert!( GeoPolygon::from_lon_lat_degrees( &[]).is_none());
    assert!( GeoPolygon::from_lon_lat_degrees( &[(1.0,1.0), (2.0,2.0)]).is_none());
    assert!( GeoPolygon::from_lon_lat_degrees( &[(1.0,1.0), (2.0,2.0), (1.0,1.0)]).is_none());
    assert!( GeoPolygon::from_lon_lat_degrees( &[(1.0,1.0), (2.0,2.0), (2.0,2.0), (1.0,1.0)]).is_none());
    assert!( GeoPolygon::from_lon_lat_degrees( &[(1.0,1.0), (f64::NAN,2.0), (3.0,1.0)]).is_none());

    // consecutive duplicates are kept but do not count as distinct vertices
    let p = GeoPolygon::from_lon_lat_degrees( &[(2.68,58.06), (2.68,58.06), (8.57,57.83), (12.26,58.94), (2.68,58.06)]);
    assert!( p.is_some());
}

#[test]
fn test_intersects() {
    let aoi = square( 2.0, 55.0, 35.0, 84.0);

    let inside = square( 10.0, 60.0, 11.0, 61.0);
    let overlapping = square( 30.0, 80.0, 40.0, 90.0);
    let touching = square( 35.0, 60.0, 36.0, 61.0);
    let corner = square( -1.0, 50.0, 2.0, 55.0);
    let outside = square( -60.0, 60.0, -50.0, 61.0);
    let containing = square( -10.0, 50.0, 40.0, 89.0);

    assert!( aoi.intersects( &inside));
    assert!( aoi.intersects( &overlapping));
    assert!( aoi.intersects( &touching));
    assert!( aoi.intersects( &corner));
    assert!( aoi.intersects( &containing));
    assert!( !aoi.intersects( &outside));

    // symmetric
    assert!( inside.intersects( &aoi));
    assert!( !outside.intersects( &aoi));
}

#[test]
fn test_serde() {
    let p = square( 10.0, 60.0, 11.0, 61.0);
    let s = serde_json::to_string(&p).unwrap();
    println!("serialized: {s}");

    let p1: GeoPolygon = serde_json::from_str(&s).unwrap();
    assert_eq!( p, p1);

    let open = "[[10.0,60.0],[10.0,61.0],[11.0,61.0]]";
    let p2: GeoPolygon = serde_json::from_str(open).unwrap();
    assert_eq!( p2.coords_count(), 4);

    assert!( serde_json::from_str::<GeoPolygon>("[[10.0,60.0],[10.0,61.0]]").is_err());
}
