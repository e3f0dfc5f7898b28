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

//! Logger setup: logcat on Android, stderr elsewhere.

use log::LevelFilter;

const LOG_TAG: &str = "configstore_vts";

/// Initializes the process wide logger.
///
/// Calling this more than once has no effect.
pub fn init(level: LevelFilter) {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default().with_tag(LOG_TAG).with_max_level(level),
    );

    #[cfg(not(target_os = "android"))]
    {
        // RUST_LOG takes precedence over the requested level.
        let _ = env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .format_target(false)
            .try_init();
        log::debug!("{LOG_TAG} logging to stderr");
    }
}
