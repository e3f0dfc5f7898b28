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

//! Discovery of configstore instances.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::info;

use crate::configs::ISurfaceFlingerConfigs;

/// Registry of HAL instances.
///
/// This is the part of the hardware service manager the suite consumes.
#[cfg_attr(any(test, feature = "test_utils"), mockall::automock)]
pub trait HalServiceManager {
    /// Lists the names of all instances serving the interface `descriptor`.
    fn get_all_hal_instance_names(&self, descriptor: &str) -> Vec<String>;

    /// Returns a handle to the configstore `instance`, or `None` if it cannot
    /// be reached.
    fn get_service(&self, instance: &str) -> Option<Arc<dyn ISurfaceFlingerConfigs>>;
}

/// A [HalServiceManager] serving handles registered in this process.
#[derive(Default)]
pub struct LocalServiceManager {
    // descriptor -> instance -> handle
    services: BTreeMap<String, BTreeMap<String, Arc<dyn ISurfaceFlingerConfigs>>>,
}

impl LocalServiceManager {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `service` as `descriptor/instance`, replacing any previous
    /// registration of the same name.
    pub fn add_service(
        &mut self,
        descriptor: &str,
        instance: &str,
        service: Arc<dyn ISurfaceFlingerConfigs>,
    ) {
        info!("registering {descriptor}/{instance}");
        self.services
            .entry(descriptor.to_string())
            .or_default()
            .insert(instance.to_string(), service);
    }
}

impl HalServiceManager for LocalServiceManager {
    fn get_all_hal_instance_names(&self, descriptor: &str) -> Vec<String> {
        self.services
            .get(descriptor)
            .map(|instances| instances.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn get_service(&self, instance: &str) -> Option<Arc<dyn ISurfaceFlingerConfigs>> {
        self.services.get(crate::configs::DESCRIPTOR)?.get(instance).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::MockISurfaceFlingerConfigs;
    use crate::configs::DESCRIPTOR;

    #[test]
    fn empty_registry_lists_nothing() {
        let sm = LocalServiceManager::new();
        assert!(sm.get_all_hal_instance_names(DESCRIPTOR).is_empty());
        assert!(sm.get_service("default").is_none());
    }

    #[test]
    fn instances_are_sorted_per_descriptor() {
        let mut sm = LocalServiceManager::new();
        sm.add_service(DESCRIPTOR, "vendor", Arc::new(MockISurfaceFlingerConfigs::new()));
        sm.add_service(DESCRIPTOR, "default", Arc::new(MockISurfaceFlingerConfigs::new()));
        sm.add_service(
            "android.hardware.foo@1.0::IFoo",
            "other",
            Arc::new(MockISurfaceFlingerConfigs::new()),
        );

        assert_eq!(sm.get_all_hal_instance_names(DESCRIPTOR), vec!["default", "vendor"]);
        assert!(sm.get_service("vendor").is_some());
        assert!(sm.get_service("other").is_none());
    }
}
