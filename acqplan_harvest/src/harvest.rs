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

//! the harvest pipeline: listing -> selection -> retrieval -> (raw write) -> parse -> AOI filter -> write

use std::fmt;
use std::path::{Path,PathBuf};
use chrono::{DateTime,Utc};
use tracing::{debug,info,warn,error};
use url::Url;

use acqplan_common::datetime::short_utc_datetime_string;
use acqplan_common::fs::{ensure_writable_dir, set_filepath_contents};

use crate::candidate::{CandidateFile, parse_candidates};
use crate::config::{HarvestConfig, MissionConfig, UnitConfig};
use crate::document::PlanDocument;
use crate::errors::{HarvestError, Result, document_error};
use crate::filter::{AoiFilter, FilterStats};
use crate::listing::{ListingFetcher, discover_links};
use crate::retrieval::DocumentRetriever;
use crate::satellite::SatelliteUnit;
use crate::selector::select;

/// name of the unmodified plan file of a unit
pub fn raw_plan_filename (unit: SatelliteUnit) -> String {
    format!("{}_acquisition_plan.kml", unit.tag())
}

/// name of the AOI filtered plan file of a unit
pub fn filtered_plan_filename (unit: SatelliteUnit, aoi_name: &str) -> String {
    format!("{}_acquisition_plan_{}.kml", unit.tag(), aoi_name)
}

/// what we produced for a successfully harvested unit
#[derive(Debug)]
pub struct UnitOutput {
    pub selected: CandidateFile,
    pub raw_path: Option<PathBuf>,
    pub filtered_path: Option<PathBuf>,
    pub stats: Option<FilterStats>,
}

#[derive(Debug)]
pub struct UnitReport {
    pub unit: SatelliteUnit,
    pub outcome: Result<UnitOutput>,
}

impl UnitReport {
    pub fn is_success (&self) -> bool { self.outcome.is_ok() }
}

impl fmt::Display for UnitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(out) => {
                write!(f, "{}: {}", self.unit, out.selected.name)?;
                if let Some(stats) = &out.stats { write!(f, " ({stats})")?; }
                Ok(())
            }
            Err(e) => write!(f, "{}: FAILED {e}", self.unit)
        }
    }
}

/// the per-unit reports of a harvest run, in configuration order
#[derive(Debug,Default)]
pub struct HarvestSummary {
    pub reports: Vec<UnitReport>,
}

impl HarvestSummary {
    /// true if every configured unit was harvested
    pub fn is_success (&self) -> bool {
        self.reports.iter().all( |r| r.is_success())
    }

    pub fn failures (&self) -> impl Iterator<Item=&UnitReport> {
        self.reports.iter().filter( |r| !r.is_success())
    }

    pub fn report (&self, unit: SatelliteUnit) -> Option<&UnitReport> {
        self.reports.iter().find( |r| r.unit == unit)
    }
}

impl fmt::Display for HarvestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n_failed = self.failures().count();
        writeln!(f, "harvested {} of {} units", self.reports.len() - n_failed, self.reports.len())?;
        for r in &self.reports {
            writeln!(f, "  {r}")?;
        }
        Ok(())
    }
}

/// runs the pipeline for all configured units. Units are processed sequentially and failures are
/// recorded per unit, i.e. they never abort the run
pub struct Harvester<'a,F,R> {
    config: &'a HarvestConfig,
    fetcher: &'a F,
    retriever: &'a R,
}

impl<'a,F,R> Harvester<'a,F,R> where F: ListingFetcher, R: DocumentRetriever {
    pub fn new (config: &'a HarvestConfig, fetcher: &'a F, retriever: &'a R) -> Self {
        Harvester { config, fetcher, retriever }
    }

    pub async fn run (&self, now: DateTime<Utc>) -> HarvestSummary {
        let mut summary = HarvestSummary::default();
        info!("harvesting acquisition plans valid at {}", short_utc_datetime_string( &now));

        for mission in &self.config.missions {
            let listing = self.fetch_listing( mission).await;
            if let Err(e) = &listing {
                warn!("skipping all {} units: {e}", mission.family);
            }
            let filter = AoiFilter::new( mission.aoi.clone(), mission.mode_allowlist.as_deref());

            for uc in &mission.units {
                let outcome = match &listing {
                    Ok((index_url,html)) => self.harvest_unit( mission, uc, &filter, index_url, html, &now).await,
                    Err(e) => Err( HarvestError::ListingUnavailable( format!("{}: {e}", mission.index_url)))
                };

                match &outcome {
                    Ok(out) => info!("harvested {}: {}", uc.unit, out.selected.name),
                    Err(e) => error!("failed to harvest {}: {e}", uc.unit)
                }
                summary.reports.push( UnitReport { unit: uc.unit, outcome });
            }
        }

        summary
    }

    async fn fetch_listing (&self, mission: &MissionConfig) -> Result<(Url,String)> {
        let index_url = mission.index_url()?;
        let html = self.fetcher.fetch_index( &index_url).await?;
        Ok( (index_url, html) )
    }

    async fn harvest_unit (&self, mission: &MissionConfig, uc: &UnitConfig, filter: &AoiFilter,
                           index_url: &Url, html: &str, now: &DateTime<Utc>) -> Result<UnitOutput> {
        let unit = uc.unit;

        let candidates = parse_candidates( discover_links( html, index_url, &uc.discovery));
        debug!("{} candidates for {unit}", candidates.len());

        let selected = select( &candidates, unit, now).cloned().ok_or_else( || {
            HarvestError::NoValidCandidate( format!("{unit} at {} ({} candidates)", short_utc_datetime_string( now), candidates.len()))
        })?;
        info!("selected {selected} for {unit}");

        let bytes = self.retriever.retrieve( &selected.locator).await
            .map_err( |e| HarvestError::RetrievalFailed( format!("{}: {e}", selected.locator)))?;

        let output_dir = &self.config.output_dir;
        let raw_path = if self.config.keep_raw || !mission.extract_aoi {
            Some( write_output( output_dir, &raw_plan_filename( unit), &bytes)?)
        } else {
            None
        };

        let (filtered_path, stats) = if mission.extract_aoi {
            let mut doc = PlanDocument::parse( &bytes).map_err( |e| match e {
                HarvestError::DocumentError(_) => e,
                other => document_error( format!("{}: {other}", selected.name))
            })?;

            let stats = filter.apply( &mut doc);
            info!("{unit} AOI '{}': {stats}", filter.aoi().name);

            let filtered = doc.to_bytes()?;
            let path = write_output( output_dir, &filtered_plan_filename( unit, &filter.aoi().name), &filtered)?;
            (Some(path), Some(stats))
        } else {
            (None, None)
        };

        Ok( UnitOutput { selected, raw_path, filtered_path, stats } )
    }
}

/// write to `dir`, which is created if it does not exist yet
pub(crate) fn write_output (dir: &Path, filename: &str, contents: &[u8]) -> Result<PathBuf> {
    ensure_writable_dir( dir)
        .and_then( |_| set_filepath_contents( dir, filename, contents))
        .map_err( |e| HarvestError::WriteFailed( format!("{:?}: {e}", dir.join( filename))))
}
