// Copyright 2026, The Android Open Source Project
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! This module defines the system properties backing the configstore settings.
//!
//! Every setting maps to a "ro.surface_flinger.<flag_name>" property. The
//! properties are read from a `build.prop` style file: one `key=value` per line,
//! `#` starts a comment line and a later definition overrides an earlier one.


use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use log::error;

const PROPERTY_PREFIX: &str = "ro.surface_flinger";

fn generate_property_name(flag_name: &str) -> String {
    format!("{PROPERTY_PREFIX}.{flag_name}")
}

/// [PropertySource] is the mockable interface for looking up properties.
#[cfg_attr(any(test, feature = "test_utils"), mockall::automock)]
pub trait PropertySource {
    /// Returns the raw value of `name`, or `None` if it is not set.
    fn read(&self, name: &str) -> Option<String>;
}

/// Error from loading a [PropertyFile].
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    /// failed to read the file
    #[error("failed to read {path:?}: {source}")]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying io error.
        source: std::io::Error,
    },
    /// a line is neither a comment nor `key=value`
    #[error("line {line_number}: malformed property {line:?}")]
    Malformed {
        /// 1-based line number.
        line_number: usize,
        /// The offending line.
        line: String,
    },
}

/// Properties parsed from a `build.prop` style file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyFile {
    properties: HashMap<String, String>,
}

impl PropertyFile {
    /// Parses properties from the contents of a file.
    pub fn parse(contents: &str) -> Result<Self, PropertyError> {
        let mut properties = HashMap::new();
        for (i, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(PropertyError::Malformed { line_number: i + 1, line: line.to_string() });
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(PropertyError::Malformed { line_number: i + 1, line: line.to_string() });
            }
            properties.insert(key.to_string(), value.trim().to_string());
        }
        Ok(Self { properties })
    }

    /// Reads and parses the property file at `path`.
    pub fn load(path: &Path) -> Result<Self, PropertyError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| PropertyError::Read { path: path.to_path_buf(), source })?;
        Self::parse(&contents)
    }

    /// Number of properties defined.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no property is defined.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertySource for PropertyFile {
    fn read(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
}

/// bool properties for configstore.
///
/// clippy::enum_variant_names is allowed because the names follow the HAL methods.
#[allow(clippy::enum_variant_names)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolProp {
    UseContextPriority,
    HasWideColorDisplay,
    HasHdrDisplay,
    ForceHwcCopyForVirtualDisplays,
    RunningWithoutSyncFramework,
    UseVrFlinger,
    StartGraphicsAllocatorService,
}

impl BoolProp {
    fn flag_name(&self) -> &'static str {
        match self {
            Self::UseContextPriority => "use_context_priority",
            Self::HasWideColorDisplay => "has_wide_color_display",
            Self::HasHdrDisplay => "has_HDR_display",
            Self::ForceHwcCopyForVirtualDisplays => "force_hwc_copy_for_virtual_displays",
            Self::RunningWithoutSyncFramework => "running_without_sync_framework",
            Self::UseVrFlinger => "use_vr_flinger",
            Self::StartGraphicsAllocatorService => "start_graphics_allocator_service",
        }
    }

    /// Full property name.
    pub fn name(&self) -> String {
        generate_property_name(self.flag_name())
    }

    /// Returns the property value, or `None` if it is unset or invalid.
    ///
    /// "1"/"true"/"y"/"yes"/"on" are true and "0"/"false"/"n"/"no"/"off" are false.
    pub fn get<P: PropertySource + ?Sized>(&self, source: &P) -> Option<bool> {
        let property_name = self.name();
        let value = source.read(&property_name)?;
        let parsed = parse_bool(&value);
        if parsed.is_none() {
            error!("failed to parse property: {property_name}={value}");
        }
        parsed
    }
}

/// i64 properties for configstore.
#[allow(clippy::enum_variant_names)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I64Prop {
    VsyncEventPhaseOffsetNs,
    VsyncSfEventPhaseOffsetNs,
    PresentTimeOffsetFromVsyncNs,
    MaxFrameBufferAcquiredBuffers,
}

impl I64Prop {
    fn flag_name(&self) -> &'static str {
        match self {
            Self::VsyncEventPhaseOffsetNs => "vsync_event_phase_offset_ns",
            Self::VsyncSfEventPhaseOffsetNs => "vsync_sf_event_phase_offset_ns",
            Self::PresentTimeOffsetFromVsyncNs => "present_time_offset_from_vsync_ns",
            Self::MaxFrameBufferAcquiredBuffers => "max_frame_buffer_acquired_buffers",
        }
    }

    /// Full property name.
    pub fn name(&self) -> String {
        generate_property_name(self.flag_name())
    }

    /// Returns the property value, or `None` if it is unset or invalid.
    pub fn get<P: PropertySource + ?Sized>(&self, source: &P) -> Option<i64> {
        read(source, &self.name())
    }
}

/// u64 properties for configstore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum U64Prop {
    MaxVirtualDisplayDimension,
}

impl U64Prop {
    fn flag_name(&self) -> &'static str {
        match self {
            Self::MaxVirtualDisplayDimension => "max_virtual_display_dimension",
        }
    }

    /// Full property name.
    pub fn name(&self) -> String {
        generate_property_name(self.flag_name())
    }

    /// Returns the property value, or `None` if it is unset or invalid.
    pub fn get<P: PropertySource + ?Sized>(&self, source: &P) -> Option<u64> {
        read(source, &self.name())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "y" | "yes" | "on" => Some(true),
        "0" | "false" | "n" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn read<P: PropertySource + ?Sized, T: FromStr>(source: &P, property_name: &str) -> Option<T> {
    let value = source.read(property_name)?;
    match value.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            error!("failed to parse property: {property_name}={value}");
            None
        }
    }
}
