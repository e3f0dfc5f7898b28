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

//! Property backed implementation of [ISurfaceFlingerConfigs].

use crate::configs::ISurfaceFlingerConfigs;
use crate::error::Return;
use crate::properties::BoolProp;
use crate::properties::I64Prop;
use crate::properties::PropertySource;
use crate::properties::U64Prop;
use crate::types::OptionalBool;
use crate::types::OptionalInt64;
use crate::types::OptionalUInt64;

/// Serves configstore settings from system properties.
///
/// Settings without a property are reported unspecified. Round trips never
/// fail since everything is answered in process.
pub struct SurfaceFlingerConfigs<P: PropertySource> {
    properties: P,
}

impl<P: PropertySource> SurfaceFlingerConfigs<P> {
    /// Creates an instance serving settings from `properties`.
    pub fn new(properties: P) -> Self {
        Self { properties }
    }

    fn get_bool(&self, prop: BoolProp) -> Return<OptionalBool> {
        Ok(prop.get(&self.properties).into())
    }

    fn get_i64(&self, prop: I64Prop) -> Return<OptionalInt64> {
        Ok(prop.get(&self.properties).into())
    }
}

impl<P: PropertySource> ISurfaceFlingerConfigs for SurfaceFlingerConfigs<P> {
    fn vsync_event_phase_offset_ns(&self) -> Return<OptionalInt64> {
        self.get_i64(I64Prop::VsyncEventPhaseOffsetNs)
    }

    fn vsync_sf_event_phase_offset_ns(&self) -> Return<OptionalInt64> {
        self.get_i64(I64Prop::VsyncSfEventPhaseOffsetNs)
    }

    fn use_context_priority(&self) -> Return<OptionalBool> {
        self.get_bool(BoolProp::UseContextPriority)
    }

    fn has_wide_color_display(&self) -> Return<OptionalBool> {
        self.get_bool(BoolProp::HasWideColorDisplay)
    }

    fn has_hdr_display(&self) -> Return<OptionalBool> {
        self.get_bool(BoolProp::HasHdrDisplay)
    }

    fn present_time_offset_from_vsync_ns(&self) -> Return<OptionalInt64> {
        self.get_i64(I64Prop::PresentTimeOffsetFromVsyncNs)
    }

    fn use_hwc_for_rgb_to_yuv(&self) -> Return<OptionalBool> {
        self.get_bool(BoolProp::ForceHwcCopyForVirtualDisplays)
    }

    fn max_virtual_display_size(&self) -> Return<OptionalUInt64> {
        Ok(U64Prop::MaxVirtualDisplayDimension.get(&self.properties).into())
    }

    fn has_sync_framework(&self) -> Return<OptionalBool> {
        // The property states the absence of the framework.
        let without = BoolProp::RunningWithoutSyncFramework.get(&self.properties);
        Ok(without.map(|without| !without).into())
    }

    fn use_vr_flinger(&self) -> Return<OptionalBool> {
        self.get_bool(BoolProp::UseVrFlinger)
    }

    fn max_frame_buffer_acquired_buffers(&self) -> Return<OptionalInt64> {
        self.get_i64(I64Prop::MaxFrameBufferAcquiredBuffers)
    }

    fn start_graphics_allocator_service(&self) -> Return<OptionalBool> {
        self.get_bool(BoolProp::StartGraphicsAllocatorService)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::ConfigQuery;
    use crate::properties::PropertyFile;

    fn configs(contents: &str) -> SurfaceFlingerConfigs<PropertyFile> {
        SurfaceFlingerConfigs::new(PropertyFile::parse(contents).unwrap())
    }

    #[test]
    fn no_properties_means_everything_unspecified() {
        let configs = configs("");

        for query in ConfigQuery::ALL {
            let value = query.invoke(&configs).unwrap();
            assert!(!value.is_specified(), "{query} should be unspecified");
        }
    }

    #[test]
    fn reads_typed_properties() {
        let configs = configs(
            "ro.surface_flinger.vsync_event_phase_offset_ns=1000000\n\
             ro.surface_flinger.has_wide_color_display=true\n\
             ro.surface_flinger.force_hwc_copy_for_virtual_displays=1\n\
             ro.surface_flinger.max_virtual_display_dimension=4096\n\
             ro.surface_flinger.max_frame_buffer_acquired_buffers=3\n",
        );

        assert_eq!(configs.vsync_event_phase_offset_ns(), Ok(OptionalInt64::specified(1000000)));
        assert_eq!(configs.has_wide_color_display(), Ok(OptionalBool::specified(true)));
        assert_eq!(configs.use_hwc_for_rgb_to_yuv(), Ok(OptionalBool::specified(true)));
        assert_eq!(configs.max_virtual_display_size(), Ok(OptionalUInt64::specified(4096)));
        assert_eq!(configs.max_frame_buffer_acquired_buffers(), Ok(OptionalInt64::specified(3)));
        assert_eq!(configs.has_hdr_display(), Ok(OptionalBool::unspecified()));
    }

    #[test]
    fn sync_framework_is_inverted() {
        let with = configs("ro.surface_flinger.running_without_sync_framework=false\n");
        let without = configs("ro.surface_flinger.running_without_sync_framework=true\n");

        assert_eq!(with.has_sync_framework(), Ok(OptionalBool::specified(true)));
        assert_eq!(without.has_sync_framework(), Ok(OptionalBool::specified(false)));
    }

    #[test]
    fn invalid_property_is_unspecified() {
        let configs = configs("ro.surface_flinger.use_context_priority=sometimes\n");

        assert_eq!(configs.use_context_priority(), Ok(OptionalBool::unspecified()));
    }
}
