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

//! The configstore conformance checks run against a single instance.
//!
//! A check records two kinds of failures. Expectation failures, a transport
//! error on one query, are recorded and the check continues. Assertion
//! failures end the check on the spot.


use std::fmt;
use std::sync::Arc;

use log::debug;
use log::warn;

use crate::configs::ConfigQuery;
use crate::configs::ISurfaceFlingerConfigs;
use crate::configs::DESCRIPTOR;
use crate::error::Return;
use crate::error::SetupError;
use crate::error::TransportError;
use crate::service_manager::HalServiceManager;

/// Number of calls compared against the first one in
/// [ConformanceChecker::test_same_return_value].
pub const REPEAT_COUNT: usize = 10;

/// How a failure affects the rest of the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Recorded, the check continues.
    Expectation,
    /// The check stops.
    Assertion,
}

/// Why a check failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureReason {
    /// No handle could be acquired for the instance.
    #[error(transparent)]
    Setup(#[from] SetupError),
    /// A query did not complete its round trip.
    #[error("{query} failed: {error}")]
    Transport {
        /// The failing query.
        query: ConfigQuery,
        /// The transport status.
        error: TransportError,
    },
    /// A call of the repeated query did not complete its round trip.
    #[error("call {call} of {query} failed: {error}")]
    RepeatedCallFailed {
        /// The repeated query.
        query: ConfigQuery,
        /// 1-based index of the call, the baseline being call 1.
        call: usize,
        /// The transport status.
        error: TransportError,
    },
    /// A repeated call returned something other than the first call.
    #[error("call {call} of {query} returned {actual}, expected {expected}")]
    ValueChanged {
        /// The repeated query.
        query: ConfigQuery,
        /// 1-based index of the call, the baseline being call 1.
        call: usize,
        /// The baseline value.
        expected: i64,
        /// The value returned by this call.
        actual: i64,
    },
    /// hasHDRDisplay is specified while hasWideColorDisplay is not.
    #[error("hasHDRDisplay is specified but hasWideColorDisplay is not")]
    HdrWithoutWideColor,
}

/// One recorded failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Whether the failure stopped the check.
    pub severity: Severity,
    /// What went wrong.
    pub reason: FailureReason,
}

impl Failure {
    fn expectation(reason: FailureReason) -> Self {
        Self { severity: Severity::Expectation, reason }
    }

    fn assertion(reason: FailureReason) -> Self {
        Self { severity: Severity::Assertion, reason }
    }

    /// Whether this failure stopped the check.
    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Assertion
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Expectation => write!(f, "expectation failed: {}", self.reason),
            Severity::Assertion => write!(f, "assertion failed: {}", self.reason),
        }
    }
}

/// Collects the expectation failures of a check.
#[derive(Debug, Default)]
pub struct Expectations {
    failures: Vec<Failure>,
}

impl Expectations {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure if the round trip of `query` failed and returns the
    /// delivered value otherwise.
    pub fn expect_ok<T>(&mut self, query: ConfigQuery, ret: Return<T>) -> Option<T> {
        match ret {
            Ok(v) => Some(v),
            Err(error) => {
                warn!("{query} failed: {error}");
                self.failures.push(Failure::expectation(FailureReason::Transport { query, error }));
                None
            }
        }
    }

    /// The failures recorded so far.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Consumes the collector.
    pub fn into_failures(self) -> Vec<Failure> {
        self.failures
    }
}

/// The test cases every instance is checked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestCase {
    /// All queries complete their round trip.
    FunctionCalls,
    /// vsyncEventPhaseOffsetNs does not change between calls.
    SameReturnValue,
    /// HDR support implies wide color support.
    ColorConstrainsBasic,
}

impl TestCase {
    /// Every test case, in declaration order.
    pub const ALL: [TestCase; 3] =
        [Self::FunctionCalls, Self::SameReturnValue, Self::ColorConstrainsBasic];

    /// Name of the test case within the suite.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FunctionCalls => "TestFunctionCalls",
            Self::SameReturnValue => "TestSameReturnValue",
            Self::ColorConstrainsBasic => "TestColorConstrainsBasic",
        }
    }

    /// Sets up a fresh handle to `instance` and runs this test case with it.
    pub fn run<S: HalServiceManager + ?Sized>(&self, sm: &S, instance: &str) -> Vec<Failure> {
        let checker = match ConformanceChecker::set_up(sm, instance) {
            Ok(checker) => checker,
            Err(e) => {
                debug!("{}: {e}", self.name());
                return vec![Failure::assertion(e.into())];
            }
        };
        let mut expectations = Expectations::new();
        let result = match self {
            Self::FunctionCalls => {
                checker.test_function_calls(&mut expectations);
                Ok(())
            }
            Self::SameReturnValue => checker.test_same_return_value(),
            Self::ColorConstrainsBasic => checker.test_color_constrains_basic(&mut expectations),
        };
        let mut failures = expectations.into_failures();
        if let Err(failure) = result {
            failures.push(failure);
        }
        failures
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs the conformance checks against one configstore instance.
///
/// The handle is released when the checker is dropped.
pub struct ConformanceChecker {
    instance: String,
    configs: Arc<dyn ISurfaceFlingerConfigs>,
}

impl ConformanceChecker {
    /// Acquires a handle to `instance` from `sm`.
    pub fn set_up<S: HalServiceManager + ?Sized>(
        sm: &S,
        instance: &str,
    ) -> Result<Self, SetupError> {
        let configs = sm.get_service(instance).ok_or_else(|| SetupError::ServiceUnavailable {
            descriptor: DESCRIPTOR.to_string(),
            instance: instance.to_string(),
        })?;
        Ok(Self { instance: instance.to_string(), configs })
    }

    /// Issues every query once. Only the round trip status is checked.
    pub fn test_function_calls(&self, expectations: &mut Expectations) {
        for query in ConfigQuery::ALL {
            let ret = query.invoke(self.configs.as_ref());
            if let Some(value) = expectations.expect_ok(query, ret) {
                debug!("{}: {query} = {value}", self.instance);
            }
        }
    }

    /// Checks that repeated calls to vsyncEventPhaseOffsetNs return the value of
    /// the first call.
    ///
    /// Only the `value` field is compared, whether or not it is specified.
    pub fn test_same_return_value(&self) -> Result<(), Failure> {
        let query = ConfigQuery::VsyncEventPhaseOffsetNs;
        let call_value = |call: usize| {
            self.configs.vsync_event_phase_offset_ns().map(|v| v.value).map_err(|error| {
                Failure::assertion(FailureReason::RepeatedCallFailed { query, call, error })
            })
        };

        let expected = call_value(1)?;
        for call in 2..=REPEAT_COUNT + 1 {
            let actual = call_value(call)?;
            if actual != expected {
                let failure = Failure::assertion(FailureReason::ValueChanged {
                    query,
                    call,
                    expected,
                    actual,
                });
                debug!("{}: {failure}", self.instance);
                return Err(failure);
            }
        }
        Ok(())
    }

    /// Checks that an instance specifying hasHDRDisplay also specifies
    /// hasWideColorDisplay.
    ///
    /// This looks at the `specified` flags of both settings, not their values.
    /// The relation cannot be checked if either round trip fails; those
    /// failures are recorded in `expectations`.
    pub fn test_color_constrains_basic(
        &self,
        expectations: &mut Expectations,
    ) -> Result<(), Failure> {
        let has_wide_color_display = expectations.expect_ok(
            ConfigQuery::HasWideColorDisplay,
            self.configs.has_wide_color_display().map(|v| v.specified),
        );
        let has_hdr_display = expectations.expect_ok(
            ConfigQuery::HasHdrDisplay,
            self.configs.has_hdr_display().map(|v| v.specified),
        );

        // When hasHDRDisplay returns true, hasWideColorDisplay must also return true.
        if has_hdr_display == Some(true) && has_wide_color_display == Some(false) {
            let failure = Failure::assertion(FailureReason::HdrWithoutWideColor);
            debug!("{}: {failure}", self.instance);
            return Err(failure);
        }
        Ok(())
    }
}
