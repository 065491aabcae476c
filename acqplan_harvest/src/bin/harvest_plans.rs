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
use std::process::ExitCode;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

use acqplan_common::{define_cli, check_cli, datetime::utc_now, config::config_to_ron};
use acqplan_harvest::{load_harvest_config, Harvester, HttpClient};

define_cli! { ARGS [about="harvest current Sentinel acquisition plans and extract the Norway AOI"] =
    config: Option<PathBuf> [help="pathname of RON config file (default: built-in config)", short, long],
    output_dir: Option<PathBuf> [help="directory to store plan files (overrides config)", short, long],
    print_config: bool [help="print the effective config and exit", long]
}

#[tokio::main]
async fn main () -> Result<ExitCode> {
    check_cli!(ARGS);
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("info")))
        .init();

    let mut config = load_harvest_config( ARGS.config.as_deref())?;
    if let Some(output_dir) = &ARGS.output_dir {
        config.output_dir = output_dir.clone();
    }

    if ARGS.print_config {
        println!("{}", config_to_ron( &config)?);
        return Ok( ExitCode::SUCCESS )
    }

    let client = HttpClient::new( config.http_timeout)?;
    let harvester = Harvester::new( &config, &client, &client);
    let summary = harvester.run( utc_now()).await;

    print!("{summary}");
    if summary.is_success() { Ok( ExitCode::SUCCESS ) } else { Ok( ExitCode::FAILURE ) }
}
