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

use std::path::Path;
use acqplan_common::config::config_to_ron;
use acqplan_harvest::{
    load_harvest_config, AoiSet, HarvestConfig, MissionConfig, MissionFamily, SatelliteUnit, UnitConfig, LinkDiscovery
};

#[test]
fn test_default_config() {
    let config = load_harvest_config( None).unwrap();
    assert_eq!( config.missions.len(), 2);

    let s1 = config.mission( MissionFamily::Sentinel1).unwrap();
    let units: Vec<SatelliteUnit> = s1.units.iter().map( |u| u.unit).collect();
    assert_eq!( units, vec![SatelliteUnit::S1A, SatelliteUnit::S1C]);
    assert!( s1.mode_allowlist.is_none());
    assert_eq!( s1.aoi.polygons.len(), 1);

    let s2 = config.mission( MissionFamily::Sentinel2).unwrap();
    assert_eq!( s2.units.len(), 3);
    assert_eq!( s2.units[1].discovery.section_class.as_deref(), Some("sentinel-2b"));
    assert_eq!( s2.mode_allowlist, Some( vec!["NOBS".to_string()]));
    assert_eq!( s2.aoi.polygons.len(), 3);
    assert_eq!( s2.aoi.name, "norwAOI");
}

#[test]
fn test_config_file() {
    let config = load_harvest_config( Some( Path::new("configs/harvest.ron"))).unwrap();
    let default = HarvestConfig::default();

    assert_eq!( config.http_timeout, default.http_timeout);
    assert_eq!( config.missions.len(), default.missions.len());
    for (m, d) in config.missions.iter().zip( default.missions.iter()) {
        assert_eq!( m.family, d.family);
        assert_eq!( m.index_url, d.index_url);
        assert_eq!( m.aoi, d.aoi);
        assert_eq!( m.mode_allowlist, d.mode_allowlist);
        let discoveries: Vec<&LinkDiscovery> = m.units.iter().map( |u| &u.discovery).collect();
        let default_discoveries: Vec<&LinkDiscovery> = d.units.iter().map( |u| &u.discovery).collect();
        assert_eq!( discoveries, default_discoveries);
    }
}

#[test]
fn test_config_ron_roundtrip() {
    let ron = config_to_ron( &HarvestConfig::default()).unwrap();
    println!("{ron}");

    let config: HarvestConfig = ron::from_str( &ron).unwrap();
    assert!( config.validate().is_ok());
    assert_eq!( config.missions[1].aoi, AoiSet::for_family( MissionFamily::Sentinel2));
}

#[test]
fn test_invalid_config() {
    let mut config = HarvestConfig::default();
    config.missions[0].units.push( UnitConfig::new( SatelliteUnit::S2A, LinkDiscovery::new( None, "/documents", None)));
    assert!( config.validate().is_err());

    let mut config = HarvestConfig::default();
    config.missions[1].index_url = "not a url".to_string();
    assert!( config.validate().is_err());

    assert!( AoiSet::new( "empty", &[]).is_err());
    assert!( AoiSet::new( "degenerate", &[&[(1.0,1.0), (2.0,2.0)]]).is_err());
}
