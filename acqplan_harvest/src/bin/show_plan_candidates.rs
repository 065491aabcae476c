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

use acqplan_common::{define_cli, check_cli, datetime::{utc_now, short_utc_datetime_string}};
use acqplan_harvest::{
    load_harvest_config, HttpClient, ListingFetcher,
    candidate::parse_candidates, listing::discover_links, selector::select
};

define_cli! { ARGS [about="show acquisition plan candidates and the current selection for each unit"] =
    config: Option<PathBuf> [help="pathname of RON config file (default: built-in config)", short, long]
}

#[tokio::main]
async fn main () -> Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("warn")))
        .init();

    let config = load_harvest_config( ARGS.config.as_deref())?;
    let client = HttpClient::new( config.http_timeout)?;
    let now = utc_now();
    println!("now: {}", short_utc_datetime_string( &now));

    for mission in &config.missions {
        let index_url = mission.index_url()?;
        let html = match client.fetch_index( &index_url).await {
            Ok(html) => html,
            Err(e) => {
                println!("{}: listing unavailable ({e})", mission.family);
                continue
            }
        };

        for uc in &mission.units {
            let candidates = parse_candidates( discover_links( &html, &index_url, &uc.discovery));
            println!("{} ({} candidates):", uc.unit, candidates.len());

            let selected = select( &candidates, uc.unit, &now);
            for c in candidates.iter().filter( |c| c.unit == uc.unit) {
                let marker = if selected.is_some_and( |s| s.name == c.name) { "*" } else { " " };
                println!("  {marker} {c}");
            }
            if selected.is_none() {
                println!("    no valid candidate");
            }
        }
    }
    Ok(())
}
