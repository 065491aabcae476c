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

use chrono::{TimeZone,Utc};
use acqplan_common::datetime::*;
use acqplan_common::fs::{ensure_writable_dir, filepath_contents, set_filepath_contents};

#[test]
fn test_compact_datetime() {
    let dt = parse_compact_utc_datetime("20170824T110000").unwrap();
    assert_eq!( dt, Utc.with_ymd_and_hms(2017, 8, 24, 11, 0, 0).unwrap());
    assert_eq!( short_utc_datetime_string(&dt), "2017-08-24T11:00:00UTC");
    assert_eq!( parse_compact_utc_datetime("20170824t110000"), Some(dt));

    for s in ["", "20170824", "20170824T1100", "20170824T1100000", "2017-08-24T110000", "20170824X110000",
              "20171324T110000", "20170824T256000", "+0170824T110000", "2017082 T110000"] {
        assert!( parse_compact_utc_datetime(s).is_none(), "accepted '{s}'");
    }
}

#[test]
fn test_exclusive_interval() {
    let start = Utc.with_ymd_and_hms(2017, 8, 24, 11, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2017, 9, 10, 14, 0, 0).unwrap();

    assert!( is_between_exclusive( &Utc.with_ymd_and_hms(2017, 9, 1, 0, 0, 0).unwrap(), &start, &end));
    assert!( !is_between_exclusive( &start, &start, &end));
    assert!( !is_between_exclusive( &end, &start, &end));
    assert!( !is_between_exclusive( &Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap(), &start, &end));
}

#[test]
fn test_file_contents() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("out");

    ensure_writable_dir( &dir).unwrap();
    assert!( dir.is_dir());

    let path = set_filepath_contents( &dir, "test.kml", b"<kml/>").unwrap();
    assert_eq!( path, dir.join("test.kml"));
    assert_eq!( filepath_contents(&path).unwrap(), b"<kml/>".to_vec());

    set_filepath_contents( &dir, "empty.kml", b"").unwrap();
    assert!( filepath_contents( &dir.join("empty.kml")).is_err());
}
