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

//! configuration of harvest runs. All values have production defaults so that no config file is required

use std::path::{Path,PathBuf};
use std::time::Duration;
use serde::{Serialize,Deserialize};
use url::Url;

use acqplan_common::config::load_config_path;
use acqplan_common::datetime::secs;

use crate::aoi::AoiSet;
use crate::errors::{Result, op_failed};
use crate::listing::LinkDiscovery;
use crate::satellite::{MissionFamily, SatelliteUnit};

pub const S1_INDEX_URL: &str = "https://sentinels.copernicus.eu/en/copernicus/sentinel-1/acquisition-plans/";
pub const S2_INDEX_URL: &str = "https://sentinels.copernicus.eu/en/copernicus/sentinel-2/acquisition-plans/";
pub const DOCUMENT_HREF_PREFIX: &str = "/documents";

/// anchors with this text prefix point to mission pages, not plan files
pub const MISSION_LINK_TEXT: &str = "Sentinel";

/// S2 acquisition mode of nominal observations. Other modes (NOT_RECORDING, VIC, DARK-O) are dropped
pub const NOMINAL_OBSERVATION_MODE: &str = "NOBS";

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct HarvestConfig {
    /// directory where raw and filtered plans are stored
    pub output_dir: PathBuf,

    /// keep the unfiltered plan file even if we extract the AOI
    pub keep_raw: bool,

    pub http_timeout: Duration,

    pub missions: Vec<MissionConfig>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        HarvestConfig {
            output_dir: PathBuf::from("."),
            keep_raw: true,
            http_timeout: secs(60),
            missions: vec![ MissionConfig::default_for( MissionFamily::Sentinel1), MissionConfig::default_for( MissionFamily::Sentinel2) ]
        }
    }
}

impl HarvestConfig {
    /// make sure units belong to their mission family and URLs are valid
    pub fn validate (&self) -> Result<()> {
        for mission in &self.missions {
            mission.index_url()?;

            for uc in &mission.units {
                if uc.unit.family() != mission.family {
                    return Err( op_failed( format!("unit {} configured for mission {}", uc.unit, mission.family)))
                }
            }
            if mission.aoi.polygons.is_empty() {
                return Err( op_failed( format!("no AOI polygons for mission {}", mission.family)))
            }
        }
        Ok(())
    }

    pub fn mission (&self, family: MissionFamily) -> Option<&MissionConfig> {
        self.missions.iter().find( |m| m.family == family)
    }
}

/// everything that differs between mission families
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct MissionConfig {
    pub family: MissionFamily,

    /// URL of the page that lists the plan files of all units
    pub index_url: String,

    pub units: Vec<UnitConfig>,

    pub aoi: AoiSet,

    /// if set only record groups (KML Folders) with these names are kept
    #[serde(default, skip_serializing_if="acqplan_common::is_none")]
    pub mode_allowlist: Option<Vec<String>>,

    /// store a version of the plan that only contains records intersecting the AOI
    pub extract_aoi: bool,
}

impl MissionConfig {
    pub fn default_for (family: MissionFamily) -> Self {
        match family {
            MissionFamily::Sentinel1 => MissionConfig {
                family,
                index_url: S1_INDEX_URL.to_string(),
                units: vec![ // S1B is out of service
                    UnitConfig::new( SatelliteUnit::S1A, LinkDiscovery::new( None, DOCUMENT_HREF_PREFIX, Some(MISSION_LINK_TEXT))),
                    UnitConfig::new( SatelliteUnit::S1C, LinkDiscovery::new( None, DOCUMENT_HREF_PREFIX, Some(MISSION_LINK_TEXT))),
                ],
                aoi: AoiSet::for_family( family),
                mode_allowlist: None,
                extract_aoi: true,
            },
            MissionFamily::Sentinel2 => MissionConfig {
                family,
                index_url: S2_INDEX_URL.to_string(),
                units: vec![
                    UnitConfig::new( SatelliteUnit::S2A, LinkDiscovery::new( Some("sentinel-2a"), DOCUMENT_HREF_PREFIX, Some(MISSION_LINK_TEXT))),
                    UnitConfig::new( SatelliteUnit::S2B, LinkDiscovery::new( Some("sentinel-2b"), DOCUMENT_HREF_PREFIX, Some(MISSION_LINK_TEXT))),
                    UnitConfig::new( SatelliteUnit::S2C, LinkDiscovery::new( Some("sentinel-2c"), DOCUMENT_HREF_PREFIX, Some(MISSION_LINK_TEXT))),
                ],
                aoi: AoiSet::for_family( family),
                mode_allowlist: Some( vec![NOMINAL_OBSERVATION_MODE.to_string()]),
                extract_aoi: true,
            }
        }
    }

    pub fn index_url (&self) -> Result<Url> {
        Ok( Url::parse( &self.index_url)? )
    }
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct UnitConfig {
    pub unit: SatelliteUnit,
    pub discovery: LinkDiscovery,
}

impl UnitConfig {
    pub fn new (unit: SatelliteUnit, discovery: LinkDiscovery) -> Self {
        UnitConfig { unit, discovery }
    }
}

/// load and validate the config from `path`, or use the defaults if there is none
pub fn load_harvest_config (path: Option<&Path>) -> Result<HarvestConfig> {
    let config: HarvestConfig = match path {
        Some(path) => load_config_path( path)?,
        None => HarvestConfig::default()
    };
    config.validate()?;
    Ok(config)
}
