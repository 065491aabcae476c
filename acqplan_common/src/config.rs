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

//! loading and printing of RON configuration files

use std::path::Path;
use serde::{Serialize,Deserialize};
use ron::ser::PrettyConfig;

use crate::{define_error, fs::filepath_contents};

define_error!{ pub ConfigError =
    IOError(#[from] std::io::Error) : "IO error: {0}",
    RonError(#[from] ron::Error) : "config RON error: {0}",
    RonSerdeError(#[from] ron::error::SpannedError) : "config serialize/deserialize RON error: {0}",
    InvalidConfig(String) : "invalid config: {0}"
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// load a RON config from a file
pub fn load_config_path<C,P> (path: P) -> Result<C> where C: for <'a> Deserialize<'a>, P: AsRef<Path> {
    let data = filepath_contents( &path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

/// pretty print a config in the format that can be loaded by `load_config_path`
pub fn config_to_ron<C> (config: &C) -> Result<String> where C: Serialize {
    Ok( ron::ser::to_string_pretty( config, PrettyConfig::default())? )
}
