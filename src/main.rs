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

//! `configstore_vts` runs the configstore conformance suite against
//! SurfaceFlinger configuration served from a property file.
//!
//! The configuration is registered in process under each requested instance
//! name, then every instance is checked. The exit status is 1 if any test
//! case fails.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use configstore_vts::configs::DESCRIPTOR;
use configstore_vts::logging;
use configstore_vts::properties::PropertyFile;
use configstore_vts::service_manager::LocalServiceManager;
use configstore_vts::suite::run_suite;
use configstore_vts::suite::SuiteOptions;
use configstore_vts::surface_flinger_configs::SurfaceFlingerConfigs;
use log::error;
use log::info;
use log::LevelFilter;

#[derive(Parser, Debug)]
struct Cli {
    /// build.prop style file with the ro.surface_flinger.* properties.
    #[clap(long)]
    properties: Option<PathBuf>,

    /// Instance names to serve the configuration under.
    #[clap(long = "instance", default_value = "default")]
    instances: Vec<String>,

    /// Only run test cases whose name contains this string.
    #[clap(long)]
    filter: Option<String>,

    /// Log every query result.
    #[clap(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let properties = match &cli.properties {
        Some(path) => PropertyFile::load(path)
            .with_context(|| format!("failed to load properties from {path:?}"))?,
        None => PropertyFile::default(),
    };
    info!("loaded {} properties", properties.len());

    let configs = Arc::new(SurfaceFlingerConfigs::new(properties));
    let mut sm = LocalServiceManager::new();
    for instance in &cli.instances {
        sm.add_service(DESCRIPTOR, instance, configs.clone());
    }

    let report = run_suite(&sm, &SuiteOptions { filter: cli.filter });
    if report.is_uninstantiated() {
        info!("no configstore instance to check");
    }
    let failed: Vec<_> = report.failed().map(|o| o.name.as_str()).collect();
    info!("{} test cases ran, {} failed", report.outcomes.len(), failed.len());
    for name in &failed {
        error!("FAILED: {name}");
    }
    Ok(failed.is_empty())
}

fn main() {
    let cli = Cli::parse();
    logging::init(if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info });

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("configstore_vts failed: {e:?}");
            std::process::exit(1);
        }
    }
}
