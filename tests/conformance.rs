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

//! End to end runs of the configstore suite through the public API.

use std::cell::Cell;
use std::sync::Arc;

use configstore_vts::checker::FailureReason;
use configstore_vts::checker::TestCase;
use configstore_vts::configs::ISurfaceFlingerConfigs;
use configstore_vts::configs::DESCRIPTOR;
use configstore_vts::error::Return;
use configstore_vts::error::TransportError;
use configstore_vts::properties::PropertyFile;
use configstore_vts::service_manager::LocalServiceManager;
use configstore_vts::suite::run_suite;
use configstore_vts::suite::SuiteOptions;
use configstore_vts::surface_flinger_configs::SurfaceFlingerConfigs;
use configstore_vts::types::OptionalBool;
use configstore_vts::types::OptionalInt64;
use configstore_vts::types::OptionalUInt64;

const PIXEL_PROPS: &str = "\
ro.surface_flinger.vsync_event_phase_offset_ns=1000000
ro.surface_flinger.vsync_sf_event_phase_offset_ns=1000000
ro.surface_flinger.has_wide_color_display=true
ro.surface_flinger.has_HDR_display=true
ro.surface_flinger.max_frame_buffer_acquired_buffers=3
ro.surface_flinger.running_without_sync_framework=false
";

/// A misbehaving implementation: vsyncEventPhaseOffsetNs drifts from the 7th
/// call on, HDR is specified without wide color and maxVirtualDisplaySize
/// always fails its round trip.
#[derive(Default)]
struct BrokenConfigs {
    vsync_calls: Cell<usize>,
}

impl ISurfaceFlingerConfigs for BrokenConfigs {
    fn vsync_event_phase_offset_ns(&self) -> Return<OptionalInt64> {
        let call = self.vsync_calls.get() + 1;
        self.vsync_calls.set(call);
        Ok(OptionalInt64::specified(if call >= 7 { 999999 } else { 1000000 }))
    }
    fn vsync_sf_event_phase_offset_ns(&self) -> Return<OptionalInt64> {
        Ok(OptionalInt64::unspecified())
    }
    fn use_context_priority(&self) -> Return<OptionalBool> {
        Ok(OptionalBool::unspecified())
    }
    fn has_wide_color_display(&self) -> Return<OptionalBool> {
        Ok(OptionalBool { specified: false, value: false })
    }
    fn has_hdr_display(&self) -> Return<OptionalBool> {
        Ok(OptionalBool { specified: true, value: true })
    }
    fn present_time_offset_from_vsync_ns(&self) -> Return<OptionalInt64> {
        Ok(OptionalInt64::unspecified())
    }
    fn use_hwc_for_rgb_to_yuv(&self) -> Return<OptionalBool> {
        Ok(OptionalBool::unspecified())
    }
    fn max_virtual_display_size(&self) -> Return<OptionalUInt64> {
        Err(TransportError::FailedTransaction)
    }
    fn has_sync_framework(&self) -> Return<OptionalBool> {
        Ok(OptionalBool::unspecified())
    }
    fn use_vr_flinger(&self) -> Return<OptionalBool> {
        Ok(OptionalBool::unspecified())
    }
    fn max_frame_buffer_acquired_buffers(&self) -> Return<OptionalInt64> {
        Ok(OptionalInt64::unspecified())
    }
    fn start_graphics_allocator_service(&self) -> Return<OptionalBool> {
        Ok(OptionalBool::unspecified())
    }
}

#[test]
fn property_backed_instance_conforms() {
    let configs = SurfaceFlingerConfigs::new(PropertyFile::parse(PIXEL_PROPS).unwrap());
    let mut sm = LocalServiceManager::new();
    sm.add_service(DESCRIPTOR, "default", Arc::new(configs));

    let report = run_suite(&sm, &SuiteOptions::default());

    assert_eq!(report.outcomes.len(), TestCase::ALL.len());
    assert!(report.passed(), "{:?}", report.failed().collect::<Vec<_>>());
}

#[test]
fn empty_configuration_conforms() {
    let mut sm = LocalServiceManager::new();
    let configs = SurfaceFlingerConfigs::new(PropertyFile::default());
    sm.add_service(DESCRIPTOR, "default", Arc::new(configs));

    assert!(run_suite(&sm, &SuiteOptions::default()).passed());
}

#[test]
fn no_registered_instance_is_not_a_failure() {
    let sm = LocalServiceManager::new();

    let report = run_suite(&sm, &SuiteOptions::default());

    assert!(report.is_uninstantiated());
    assert!(report.passed());
}

#[test]
fn broken_instance_fails_each_case() {
    let mut sm = LocalServiceManager::new();
    sm.add_service(DESCRIPTOR, "broken", Arc::new(BrokenConfigs::default()));

    let report = run_suite(&sm, &SuiteOptions::default());
    let reasons = |case: TestCase| -> Vec<FailureReason> {
        let outcome = report.outcomes.iter().find(|o| o.case == case).unwrap();
        outcome.failures.iter().map(|f| f.reason.clone()).collect()
    };

    assert!(!report.passed());
    assert!(matches!(
        reasons(TestCase::FunctionCalls)[..],
        [FailureReason::Transport { error: TransportError::FailedTransaction, .. }]
    ));
    assert!(matches!(
        reasons(TestCase::SameReturnValue)[..],
        [FailureReason::ValueChanged { expected: 1000000, actual: 999999, .. }]
    ));
    assert_eq!(reasons(TestCase::ColorConstrainsBasic), vec![FailureReason::HdrWithoutWideColor]);
}

#[test]
fn drift_is_reported_at_the_call_it_happens() {
    let mut sm = LocalServiceManager::new();
    sm.add_service(DESCRIPTOR, "broken", Arc::new(BrokenConfigs::default()));
    let options = SuiteOptions { filter: Some(TestCase::SameReturnValue.name().to_string()) };

    let report = run_suite(&sm, &options);

    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(
        report.outcomes[0].failures[0].to_string(),
        "assertion failed: call 7 of vsyncEventPhaseOffsetNs returned 999999, expected 1000000"
    );
}

#[test]
fn instances_are_checked_independently() {
    let mut sm = LocalServiceManager::new();
    sm.add_service(DESCRIPTOR, "broken", Arc::new(BrokenConfigs::default()));
    sm.add_service(
        DESCRIPTOR,
        "default",
        Arc::new(SurfaceFlingerConfigs::new(PropertyFile::parse(PIXEL_PROPS).unwrap())),
    );

    let report = run_suite(&sm, &SuiteOptions::default());

    assert_eq!(report.outcomes.len(), 2 * TestCase::ALL.len());
    assert!(report.failed().all(|o| o.instance == "broken"));
    assert_eq!(report.failed().count(), TestCase::ALL.len());
}
