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

use std::collections::HashMap;
use std::path::Path;
use async_trait::async_trait;
use chrono::{DateTime,TimeZone,Utc};
use url::Url;

use acqplan_harvest::{
    op_failed, HarvestConfig, HarvestError, Harvester, ListingFetcher, DocumentRetriever, MissionConfig, MissionFamily,
    PlanDocument, Result, SatelliteUnit,
    harvest::{raw_plan_filename, filtered_plan_filename}
};

const S1_INDEX: &str = "https://test.local/s1/";
const S2_INDEX: &str = "https://test.local/s2/";

const S1_PAGE: &str = r#"<html><body><ul>
  <li><a href="/documents/d/s1a_mp_acq__kml_20250102t120000_20250120t150000.kml">Plan 02/01/2025</a></li>
  <li><a href="/documents/d/s1a_mp_acq__kml_20241202t120000_20241220t150000.kml">Plan 02/12/2024</a></li>
  <li><a href="/documents/d/s1c_mp_acq__kml_20250105t120000_20250125t150000.kml">Plan 05/01/2025</a></li>
  <li><a href="/documents/d/sentinel-1">Sentinel-1 mission</a></li>
</ul></body></html>"#;

const S2_PAGE: &str = r#"<html><body>
  <div class="sentinel-2a"><ul><li><a href="/documents/d/s2a_mp_acq__kml_20250102t120000_20250120t150000.kml">Plan</a></li></ul></div>
  <div class="sentinel-2b"><ul><li><a href="/documents/d/s2b_mp_acq__kml_20250102t120000_20250120t150000.kml">Plan</a></li></ul></div>
  <div class="sentinel-2c"><ul><li><a href="/documents/d/s2c_mp_acq__kml_20250102t120000_20250120t150000.kml">Plan</a></li></ul></div>
</body></html>"#;

const S1_PLAN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2"><Document><name>S1 plan</name><Folder><name>S1</name>
  <Placemark><name>norway</name><Polygon><outerBoundaryIs><LinearRing><coordinates>10,60,0 10,61,0 11,61,0 11,60,0 10,60,0</coordinates></LinearRing></outerBoundaryIs></Polygon></Placemark>
  <Placemark><name>atlantic</name><Polygon><outerBoundaryIs><LinearRing><coordinates>-60,10,0 -50,10,0 -50,20,0 -60,20,0 -60,10,0</coordinates></LinearRing></outerBoundaryIs></Polygon></Placemark>
</Folder></Document></kml>"#;

const S2_PLAN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2"><Document><name>S2 plan</name>
  <Folder><name>NOBS</name>
    <Placemark><name>norway</name><Polygon><outerBoundaryIs><LinearRing><coordinates>10,60,0 10,61,0 11,61,0 11,60,0 10,60,0</coordinates></LinearRing></outerBoundaryIs></Polygon></Placemark>
    <Placemark><name>atlantic</name><Polygon><outerBoundaryIs><LinearRing><coordinates>-60,10,0 -50,10,0 -50,20,0 -60,20,0 -60,10,0</coordinates></LinearRing></outerBoundaryIs></Polygon></Placemark>
  </Folder>
  <Folder><name>VIC</name>
    <Placemark><name>calibration</name><Polygon><outerBoundaryIs><LinearRing><coordinates>10,60,0 10,61,0 11,61,0 11,60,0 10,60,0</coordinates></LinearRing></outerBoundaryIs></Polygon></Placemark>
  </Folder>
</Document></kml>"#;

struct FakeFetcher {
    pages: HashMap<String,String>,
}

#[async_trait]
impl ListingFetcher for FakeFetcher {
    async fn fetch_index (&self, index_url: &Url) -> Result<String> {
        self.pages.get( index_url.as_str()).cloned().ok_or_else( || op_failed( format!("no page {index_url}")))
    }
}

struct FakeRetriever {
    docs: HashMap<String,Vec<u8>>,
}

#[async_trait]
impl DocumentRetriever for FakeRetriever {
    async fn retrieve (&self, locator: &Url) -> Result<Vec<u8>> {
        self.docs.get( locator.as_str()).cloned().ok_or_else( || op_failed( format!("404 {locator}")))
    }
}

fn doc_url (name: &str) -> String {
    format!("https://test.local/documents/d/{name}")
}

fn config (output_dir: &Path) -> HarvestConfig {
    let mut config = HarvestConfig::default();
    config.output_dir = output_dir.to_path_buf();
    for mission in &mut config.missions {
        mission.index_url = match mission.family {
            MissionFamily::Sentinel1 => S1_INDEX.to_string(),
            MissionFamily::Sentinel2 => S2_INDEX.to_string(),
        }
    }
    config
}

fn fetcher () -> FakeFetcher {
    let mut pages = HashMap::new();
    pages.insert( S1_INDEX.to_string(), S1_PAGE.to_string());
    pages.insert( S2_INDEX.to_string(), S2_PAGE.to_string());
    FakeFetcher { pages }
}

fn retriever () -> FakeRetriever {
    let mut docs = HashMap::new();
    docs.insert( doc_url("s1a_mp_acq__kml_20250102t120000_20250120t150000.kml"), S1_PLAN.as_bytes().to_vec());
    docs.insert( doc_url("s1c_mp_acq__kml_20250105t120000_20250125t150000.kml"), S1_PLAN.as_bytes().to_vec());
    for unit in ["s2a", "s2b", "s2c"] {
        docs.insert( doc_url( &format!("{unit}_mp_acq__kml_20250102t120000_20250120t150000.kml")), S2_PLAN.as_bytes().to_vec());
    }
    FakeRetriever { docs }
}

fn now () -> DateTime<Utc> {
    Utc.with_ymd_and_hms( 2025, 1, 12, 0, 0, 0).unwrap()
}

fn read (path: &Path) -> String {
    std::fs::read_to_string( path).unwrap()
}

#[tokio::test]
async fn test_all_units_harvested() {
    let tmp = tempfile::tempdir().unwrap();
    let output_dir = tmp.path().join("plans");
    let config = config( &output_dir);
    let (fetcher, retriever) = (fetcher(), retriever());

    let summary = Harvester::new( &config, &fetcher, &retriever).run( now()).await;
    println!("{summary}");

    assert!( summary.is_success());
    assert_eq!( summary.reports.len(), 5);

    for unit in [SatelliteUnit::S1A, SatelliteUnit::S1C, SatelliteUnit::S2A, SatelliteUnit::S2B, SatelliteUnit::S2C] {
        let report = summary.report( unit).unwrap();
        let output = report.outcome.as_ref().unwrap();

        assert_eq!( output.raw_path.as_deref(), Some( output_dir.join( raw_plan_filename( unit)).as_path()));
        assert_eq!( output.filtered_path.as_deref(), Some( output_dir.join( filtered_plan_filename( unit, "norwAOI")).as_path()));

        let raw = read( output.raw_path.as_ref().unwrap());
        assert!( raw.contains("atlantic"));

        let filtered = read( output.filtered_path.as_ref().unwrap());
        assert!( filtered.contains("<name>norway</name>"));
        assert!( !filtered.contains("atlantic"));
        assert!( !filtered.contains("calibration"));
    }

    let s1a = summary.report( SatelliteUnit::S1A).unwrap().outcome.as_ref().unwrap();
    assert_eq!( s1a.selected.name, "s1a_mp_acq__kml_20250102t120000_20250120t150000.kml");
    assert_eq!( s1a.stats.unwrap().retained, 1);

    let s2a = summary.report( SatelliteUnit::S2A).unwrap().outcome.as_ref().unwrap();
    assert_eq!( s2a.stats.unwrap().dropped_groups, 1);
    assert!( output_dir.join("S2A_acquisition_plan_norwAOI.kml").is_file());
}

#[tokio::test]
async fn test_partial_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config( tmp.path());

    let mut fetcher = fetcher();
    fetcher.pages.remove( S2_INDEX);

    let mut retriever = retriever();
    retriever.docs.insert( doc_url("s1c_mp_acq__kml_20250105t120000_20250125t150000.kml"), b"<kml><Document>".to_vec());

    let summary = Harvester::new( &config, &fetcher, &retriever).run( now()).await;
    println!("{summary}");

    assert!( !summary.is_success());
    assert_eq!( summary.reports.len(), 5);
    assert_eq!( summary.failures().count(), 4);

    assert!( summary.report( SatelliteUnit::S1A).unwrap().is_success());
    assert!( matches!( summary.report( SatelliteUnit::S1C).unwrap().outcome, Err(HarvestError::DocumentError(_))));
    for unit in [SatelliteUnit::S2A, SatelliteUnit::S2B, SatelliteUnit::S2C] {
        assert!( matches!( summary.report( unit).unwrap().outcome, Err(HarvestError::ListingUnavailable(_))));
    }

    // the raw file is stored before we parse it
    assert!( tmp.path().join("S1C_acquisition_plan.kml").is_file());
    assert!( !tmp.path().join("S1C_acquisition_plan_norwAOI.kml").exists());
}

#[tokio::test]
async fn test_unit_failures() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config( tmp.path());
    let fetcher = fetcher();

    let mut retriever = retriever();
    retriever.docs.remove( &doc_url("s2b_mp_acq__kml_20250102t120000_20250120t150000.kml"));

    // past all advertised windows
    let later = Utc.with_ymd_and_hms( 2025, 1, 24, 0, 0, 0).unwrap();
    let summary = Harvester::new( &config, &fetcher, &retriever).run( later).await;
    println!("{summary}");

    assert!( summary.report( SatelliteUnit::S1C).unwrap().is_success());
    assert!( matches!( summary.report( SatelliteUnit::S1A).unwrap().outcome, Err(HarvestError::NoValidCandidate(_))));
    assert!( matches!( summary.report( SatelliteUnit::S2B).unwrap().outcome, Err(HarvestError::NoValidCandidate(_))));

    let summary = Harvester::new( &config, &fetcher, &retriever).run( now()).await;
    assert!( matches!( summary.report( SatelliteUnit::S2B).unwrap().outcome, Err(HarvestError::RetrievalFailed(_))));
    assert_eq!( summary.failures().count(), 1);
}

#[tokio::test]
async fn test_raw_only() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = config( tmp.path());
    config.keep_raw = false;
    for mission in &mut config.missions {
        mission.extract_aoi = mission.family == MissionFamily::Sentinel2;
    }

    let summary = Harvester::new( &config, &fetcher(), &retriever()).run( now()).await;
    assert!( summary.is_success());

    let s1a = summary.report( SatelliteUnit::S1A).unwrap().outcome.as_ref().unwrap();
    assert!( s1a.raw_path.is_some() && s1a.filtered_path.is_none() && s1a.stats.is_none());

    let s2a = summary.report( SatelliteUnit::S2A).unwrap().outcome.as_ref().unwrap();
    assert!( s2a.raw_path.is_none() && s2a.filtered_path.is_some());
    assert!( !tmp.path().join("S2A_acquisition_plan.kml").exists());
}

#[tokio::test]
async fn test_write_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let not_a_dir = tmp.path().join("file");
    std::fs::write( &not_a_dir, b"x").unwrap();
    let config = config( &not_a_dir);

    let summary = Harvester::new( &config, &fetcher(), &retriever()).run( now()).await;
    assert!( !summary.is_success());
    assert!( summary.reports.iter().all( |r| matches!( r.outcome, Err(HarvestError::WriteFailed(_)))));
}
