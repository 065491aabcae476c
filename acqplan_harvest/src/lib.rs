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
#![doc = include_str!("../doc/acqplan_harvest.md")]

mod errors;
pub use errors::*;

pub mod satellite;
pub mod candidate;
pub mod selector;
pub mod listing;
pub mod retrieval;
pub mod document;
pub mod aoi;
pub mod filter;
pub mod config;
pub mod harvest;

pub use satellite::{MissionFamily, SatelliteUnit};
pub use candidate::{CandidateFile, CandidateLink};
pub use listing::{ListingFetcher, LinkDiscovery};
pub use retrieval::{DocumentRetriever, HttpClient};
pub use document::PlanDocument;
pub use aoi::AoiSet;
pub use filter::{AoiFilter, FilterStats};
pub use config::{HarvestConfig, MissionConfig, UnitConfig, load_harvest_config};
pub use harvest::{Harvester, HarvestSummary, UnitReport, UnitOutput};
