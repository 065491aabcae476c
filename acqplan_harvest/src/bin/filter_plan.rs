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

use std::path::PathBuf;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

use acqplan_common::{define_cli, check_cli};
use acqplan_harvest::{load_harvest_config, AoiFilter, MissionConfig, MissionFamily};

define_cli! { ARGS [about="extract the records of a local acquisition plan that intersect the mission AOI"] =
    mission: MissionFamily [help="mission family of the plan (s1 or s2)", short, long],
    config: Option<PathBuf> [help="pathname of RON config file with AOI definitions (default: built-in)", short, long],
    input: PathBuf [help="pathname of the acquisition plan (KML) to filter"],
    output: PathBuf [help="pathname of the filtered acquisition plan"]
}

fn main () -> Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("info")))
        .init();

    let config = load_harvest_config( ARGS.config.as_deref())?;
    let mission = config.mission( ARGS.mission).cloned().unwrap_or_else( || MissionConfig::default_for( ARGS.mission));
    let filter = AoiFilter::new( mission.aoi, mission.mode_allowlist.as_deref());

    let stats = filter.apply_to_file( &ARGS.input, &ARGS.output)?;

    println!("{:?} -> {:?}: {stats}", ARGS.input, ARGS.output);
    Ok(())
}
