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

//! Bindings for `android.hardware.configstore@1.0::ISurfaceFlingerConfigs`.
//!
//! The HIDL transport delivers every result through a callback. Here each
//! method returns the value directly together with the round trip status.

use std::fmt;

use crate::error::Return;
use crate::types::OptionalBool;
use crate::types::OptionalInt64;
use crate::types::OptionalUInt64;
use crate::types::QueryValue;

/// Fully qualified name of the interface.
pub const DESCRIPTOR: &str = "android.hardware.configstore@1.0::ISurfaceFlingerConfigs";

/// Read-only SurfaceFlinger configuration served by a configstore instance.
///
/// Every method is a single blocking round trip. An `Err` means the
/// transport failed; an unspecified value in `Ok` is a valid answer.
#[cfg_attr(any(test, feature = "test_utils"), mockall::automock)]
pub trait ISurfaceFlingerConfigs {
    /// Phase offset of the app vsync event.
    fn vsync_event_phase_offset_ns(&self) -> Return<OptionalInt64>;
    /// Phase offset of the SurfaceFlinger vsync event.
    fn vsync_sf_event_phase_offset_ns(&self) -> Return<OptionalInt64>;
    /// Whether SurfaceFlinger requests a high priority EGL context.
    fn use_context_priority(&self) -> Return<OptionalBool>;
    /// Whether the device has a wide color gamut display.
    fn has_wide_color_display(&self) -> Return<OptionalBool>;
    /// Whether the device has an HDR capable display.
    fn has_hdr_display(&self) -> Return<OptionalBool>;
    /// Offset from vsync at which present fences are expected.
    fn present_time_offset_from_vsync_ns(&self) -> Return<OptionalInt64>;
    /// Whether HWC handles RGB to YUV conversion for virtual displays.
    fn use_hwc_for_rgb_to_yuv(&self) -> Return<OptionalBool>;
    /// Largest width or height of a virtual display HWC may composite.
    fn max_virtual_display_size(&self) -> Return<OptionalUInt64>;
    /// Whether the kernel provides sync fences.
    fn has_sync_framework(&self) -> Return<OptionalBool>;
    /// Whether VR flinger is used.
    fn use_vr_flinger(&self) -> Return<OptionalBool>;
    /// Number of framebuffer buffers SurfaceFlinger may hold at once.
    fn max_frame_buffer_acquired_buffers(&self) -> Return<OptionalInt64>;
    /// Whether SurfaceFlinger starts the graphics allocator service.
    fn start_graphics_allocator_service(&self) -> Return<OptionalBool>;
}

/// One of the queries of [ISurfaceFlingerConfigs].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigQuery {
    VsyncEventPhaseOffsetNs,
    VsyncSfEventPhaseOffsetNs,
    UseContextPriority,
    HasWideColorDisplay,
    HasHdrDisplay,
    PresentTimeOffsetFromVsyncNs,
    UseHwcForRgbToYuv,
    MaxVirtualDisplaySize,
    HasSyncFramework,
    UseVrFlinger,
    MaxFrameBufferAcquiredBuffers,
    StartGraphicsAllocatorService,
}

impl ConfigQuery {
    /// Every query, in the order they appear in the HAL definition.
    pub const ALL: [ConfigQuery; 12] = [
        Self::VsyncEventPhaseOffsetNs,
        Self::VsyncSfEventPhaseOffsetNs,
        Self::UseContextPriority,
        Self::HasWideColorDisplay,
        Self::HasHdrDisplay,
        Self::PresentTimeOffsetFromVsyncNs,
        Self::UseHwcForRgbToYuv,
        Self::MaxVirtualDisplaySize,
        Self::HasSyncFramework,
        Self::UseVrFlinger,
        Self::MaxFrameBufferAcquiredBuffers,
        Self::StartGraphicsAllocatorService,
    ];

    /// Method name as declared in `ISurfaceFlingerConfigs.hal`.
    pub fn hal_name(&self) -> &'static str {
        match self {
            Self::VsyncEventPhaseOffsetNs => "vsyncEventPhaseOffsetNs",
            Self::VsyncSfEventPhaseOffsetNs => "vsyncSfEventPhaseOffsetNs",
            Self::UseContextPriority => "useContextPriority",
            Self::HasWideColorDisplay => "hasWideColorDisplay",
            Self::HasHdrDisplay => "hasHDRDisplay",
            Self::PresentTimeOffsetFromVsyncNs => "presentTimeOffsetFromVSyncNs",
            Self::UseHwcForRgbToYuv => "useHwcForRGBtoYUV",
            Self::MaxVirtualDisplaySize => "maxVirtualDisplaySize",
            Self::HasSyncFramework => "hasSyncFramework",
            Self::UseVrFlinger => "useVrFlinger",
            Self::MaxFrameBufferAcquiredBuffers => "maxFrameBufferAcquiredBuffers",
            Self::StartGraphicsAllocatorService => "startGraphicsAllocatorService",
        }
    }

    /// Issues this query against `configs`.
    pub fn invoke<C: ISurfaceFlingerConfigs + ?Sized>(&self, configs: &C) -> Return<QueryValue> {
        Ok(match self {
            Self::VsyncEventPhaseOffsetNs => {
                QueryValue::Int64(configs.vsync_event_phase_offset_ns()?)
            }
            Self::VsyncSfEventPhaseOffsetNs => {
                QueryValue::Int64(configs.vsync_sf_event_phase_offset_ns()?)
            }
            Self::UseContextPriority => QueryValue::Bool(configs.use_context_priority()?),
            Self::HasWideColorDisplay => QueryValue::Bool(configs.has_wide_color_display()?),
            Self::HasHdrDisplay => QueryValue::Bool(configs.has_hdr_display()?),
            Self::PresentTimeOffsetFromVsyncNs => {
                QueryValue::Int64(configs.present_time_offset_from_vsync_ns()?)
            }
            Self::UseHwcForRgbToYuv => QueryValue::Bool(configs.use_hwc_for_rgb_to_yuv()?),
            Self::MaxVirtualDisplaySize => QueryValue::UInt64(configs.max_virtual_display_size()?),
            Self::HasSyncFramework => QueryValue::Bool(configs.has_sync_framework()?),
            Self::UseVrFlinger => QueryValue::Bool(configs.use_vr_flinger()?),
            Self::MaxFrameBufferAcquiredBuffers => {
                QueryValue::Int64(configs.max_frame_buffer_acquired_buffers()?)
            }
            Self::StartGraphicsAllocatorService => {
                QueryValue::Bool(configs.start_graphics_allocator_service()?)
            }
        })
    }
}

impl fmt::Display for ConfigQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hal_name())
    }
}
