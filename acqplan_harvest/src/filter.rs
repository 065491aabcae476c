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

//! AOI filtering of acquisition plan documents

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::{debug,warn};

use acqplan_common::fs::filepath_contents;
use acqplan_common::geo::{GeoCoord, GeoPolygon};

use crate::aoi::AoiSet;
use crate::document::{PlanDocument, XmlElement, XmlNode};
use crate::errors::{Result, malformed_record, op_failed};
use crate::harvest::write_output;

pub const PLACEMARK: &str = "Placemark";
pub const FOLDER: &str = "Folder";
pub const NAME: &str = "name";
pub const COORDINATES: &str = "coordinates";

/// what a filter run did to a document
#[derive(Debug,Clone,Copy,Default,PartialEq,Eq)]
pub struct FilterStats {
    pub retained: usize,
    /// records that did not intersect the AOI, including the ones of dropped groups
    pub removed: usize,
    /// records removed because their footprint could not be parsed
    pub malformed: usize,
    /// record groups removed because their mode was not allowed
    pub dropped_groups: usize,
}

impl fmt::Display for FilterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "retained {}, removed {} (malformed {}), dropped groups {}", self.retained, self.removed, self.malformed, self.dropped_groups)
    }
}

/// removes all Placemarks whose footprint does not intersect the AOI.
/// If there is a mode allowlist, Folders named by it are record groups whose Placemarks (at any depth)
/// only get the intersection test. Other Folders with direct Placemark children are removed as a whole,
/// without looking at their Placemarks
#[derive(Debug,Clone)]
pub struct AoiFilter {
    aoi: AoiSet,
    mode_allowlist: Option<HashSet<String>>,
}

impl AoiFilter {
    pub fn new (aoi: AoiSet, mode_allowlist: Option<&[String]>) -> Self {
        let mode_allowlist = mode_allowlist.map( |modes| modes.iter().cloned().collect());
        AoiFilter { aoi, mode_allowlist }
    }

    pub fn aoi (&self) -> &AoiSet { &self.aoi }

    /// filter in place. Retained records are not modified
    pub fn apply (&self, doc: &mut PlanDocument) -> FilterStats {
        let mut stats = FilterStats::default();
        self.filter_element( doc.root_mut(), false, &mut stats);
        stats
    }

    /// filter a plan file and store the result. Output is written the same way as harvested plans
    pub fn apply_to_file (&self, input: &Path, output: &Path) -> Result<FilterStats> {
        let mut doc = PlanDocument::parse( &filepath_contents( &input)?)?;
        let stats = self.apply( &mut doc);

        let filename = output.file_name().and_then( |s| s.to_str())
            .ok_or_else( || op_failed( format!("invalid output pathname {output:?}")))?;
        let dir = output.parent().filter( |p| !p.as_os_str().is_empty()).unwrap_or( Path::new("."));
        write_output( dir, filename, &doc.to_bytes()?)?;

        Ok(stats)
    }

    /// `in_group` is set once we are inside an allowed record group. Everything below it only gets
    /// the intersection test, regardless of how it is structured
    fn filter_element (&self, elem: &mut XmlElement, in_group: bool, stats: &mut FilterStats) {
        elem.children.retain_mut( |node| {
            match node {
                XmlNode::Element(child) if child.is( PLACEMARK) => self.keep_placemark( child, stats),
                XmlNode::Element(child) if child.is( FOLDER) && !in_group => {
                    match self.group_status( child) {
                        GroupStatus::Allowed => {
                            self.filter_element( child, true, stats);
                            true
                        }
                        GroupStatus::Dropped => {
                            debug!("dropping record group '{}'", group_mode( child));
                            stats.dropped_groups += 1;
                            stats.removed += child.count( PLACEMARK);
                            false
                        }
                        GroupStatus::Wrapper => {
                            self.filter_element( child, false, stats);
                            true
                        }
                    }
                }
                XmlNode::Element(child) => {
                    self.filter_element( child, in_group, stats);
                    true
                }
                _ => true
            }
        });
    }

    /// folders are classified by name first. Only folders with direct Placemarks can be dropped groups
    fn group_status (&self, folder: &XmlElement) -> GroupStatus {
        match &self.mode_allowlist {
            Some(modes) => {
                if modes.contains( &group_mode( folder)) {
                    GroupStatus::Allowed
                } else if folder.child_elements().any( |e| e.is( PLACEMARK)) {
                    GroupStatus::Dropped
                } else {
                    GroupStatus::Wrapper
                }
            }
            None => GroupStatus::Wrapper
        }
    }

    fn keep_placemark (&self, placemark: &XmlElement, stats: &mut FilterStats) -> bool {
        match placemark_footprint( placemark) {
            Ok(footprint) => {
                if self.aoi.intersects( &footprint) {
                    stats.retained += 1;
                    true
                } else {
                    stats.removed += 1;
                    false
                }
            }
            Err(e) => {
                warn!("dropping placemark '{}': {e}", placemark.child_text( NAME).unwrap_or_default().trim());
                stats.malformed += 1;
                stats.removed += 1;
                false
            }
        }
    }
}

enum GroupStatus { Allowed, Dropped, Wrapper }

/// the mode tag of a record group is the (trimmed) text of its name element
fn group_mode (folder: &XmlElement) -> String {
    folder.child_text( NAME).map( |s| s.trim().to_string()).unwrap_or_default()
}

/// the footprint polygon of a Placemark, which is given by its first coordinates element
pub fn placemark_footprint (placemark: &XmlElement) -> Result<GeoPolygon> {
    let coords = placemark.descendant( COORDINATES).ok_or_else( || malformed_record("no coordinates"))?;
    parse_footprint( &coords.text())
}

/// parse a KML coordinate string of whitespace separated "lon,lat[,alt]" tuples into a closed polygon
pub fn parse_footprint (s: &str) -> Result<GeoPolygon> {
    let mut ring: Vec<GeoCoord> = Vec::new();

    for tuple in s.split_whitespace() {
        let mut it = tuple.split(',');
        let lon = parse_degrees( it.next(), tuple)?;
        let lat = parse_degrees( it.next(), tuple)?;
        if it.count() > 1 { return Err( malformed_record( format!("too many values in '{tuple}'"))) }

        ring.push( GeoCoord { x: lon, y: lat });
    }

    GeoPolygon::from_ring( ring).ok_or_else( || malformed_record( format!("not a polygon: '{}'", s.trim())))
}

fn parse_degrees (value: Option<&str>, tuple: &str) -> Result<f64> {
    value.and_then( |s| s.trim().parse::<f64>().ok())
        .ok_or_else( || malformed_record( format!("invalid coordinate tuple '{tuple}'")))
}
