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

//! Conformance checks for `android.hardware.configstore@1.0::ISurfaceFlingerConfigs`.
//!
//! Every instance of the interface found in the [HalServiceManager] is
//! queried for all of its settings and checked for two properties:
//!
//! * vsyncEventPhaseOffsetNs does not change between calls
//! * an instance specifying hasHDRDisplay also specifies hasWideColorDisplay
//!
//! [HalServiceManager]: service_manager::HalServiceManager

pub mod checker;
pub mod configs;
pub mod error;
pub mod logging;
pub mod properties;
pub mod service_manager;
pub mod suite;
pub mod surface_flinger_configs;
pub mod types;
