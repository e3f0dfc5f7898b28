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

//! Runs the conformance checks for every configstore instance.


use log::error;
use log::info;

use crate::checker::Failure;
use crate::checker::TestCase;
use crate::configs::DESCRIPTOR;
use crate::service_manager::HalServiceManager;

/// Name of the parameterized suite.
pub const SUITE_NAME: &str = "ConfigstoreHidlTest";
/// Prefix of the per instance instantiation of the suite.
pub const INSTANTIATION_NAME: &str = "PerInstance";

/// Turns an instance name into the parameter part of a test name.
///
/// Every character other than an ASCII letter or digit becomes `_`.
pub fn instance_name_to_string(instance: &str) -> String {
    instance.chars().map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }).collect()
}

/// Full name of `case` run against `instance`, e.g.
/// `PerInstance/ConfigstoreHidlTest.TestFunctionCalls/default`.
pub fn test_name(case: TestCase, instance: &str) -> String {
    format!(
        "{INSTANTIATION_NAME}/{SUITE_NAME}.{}/{}",
        case.name(),
        instance_name_to_string(instance)
    )
}

/// Options of a suite run.
#[derive(Debug, Clone, Default)]
pub struct SuiteOptions {
    /// Only run test cases whose full name contains this.
    pub filter: Option<String>,
}

impl SuiteOptions {
    fn selects(&self, name: &str) -> bool {
        self.filter.as_deref().map_or(true, |filter| name.contains(filter))
    }
}

/// The result of one test case against one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    /// Full test name.
    pub name: String,
    /// The test case.
    pub case: TestCase,
    /// The instance checked.
    pub instance: String,
    /// Failures in the order they were recorded.
    pub failures: Vec<Failure>,
}

impl CaseOutcome {
    /// Whether the test case passed.
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Outcomes of a suite run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteReport {
    /// Instances discovered for the interface.
    pub instances: Vec<String>,
    /// One outcome per selected test case and instance.
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    /// No instance was discovered. This is an accepted outcome.
    pub fn is_uninstantiated(&self) -> bool {
        self.instances.is_empty()
    }

    /// Whether every test case passed.
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(CaseOutcome::passed)
    }

    /// The failing test cases.
    pub fn failed(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

/// Runs every test case against every instance `sm` lists for the
/// configstore interface.
///
/// Instances are checked one after another and each test case acquires its
/// own handle.
pub fn run_suite<S: HalServiceManager + ?Sized>(sm: &S, options: &SuiteOptions) -> SuiteReport {
    let instances = sm.get_all_hal_instance_names(DESCRIPTOR);
    if instances.is_empty() {
        info!("no instance of {DESCRIPTOR} found, {SUITE_NAME} is not instantiated");
        return SuiteReport::default();
    }

    let mut outcomes = Vec::new();
    for instance in &instances {
        for case in TestCase::ALL {
            let name = test_name(case, instance);
            if !options.selects(&name) {
                continue;
            }
            info!("[ RUN      ] {name}");
            let failures = case.run(sm, instance);
            if failures.is_empty() {
                info!("[       OK ] {name}");
            } else {
                for failure in &failures {
                    error!("{name}: {failure}");
                }
                error!("[  FAILED  ] {name}");
            }
            outcomes.push(CaseOutcome { name, case, instance: instance.clone(), failures });
        }
    }
    SuiteReport { instances, outcomes }
}
