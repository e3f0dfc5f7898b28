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

//! Errors reported by the configstore bindings.

/// A failed round trip to a service instance.
///
/// This only describes the transport. A successful round trip carrying an
/// unspecified value is not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The remote process died.
    #[error("dead object")]
    DeadObject,
    /// The transaction could not be delivered or its reply was lost.
    #[error("failed transaction")]
    FailedTransaction,
    /// The remote side does not implement the method.
    #[error("unknown transaction")]
    UnknownTransaction,
    /// The caller is not allowed to talk to the instance.
    #[error("permission denied")]
    PermissionDenied,
    /// Any other status code reported by the transport.
    #[error("transport status {0}")]
    Status(i32),
}

/// The outcome of one call on a configstore interface.
pub type Return<T> = std::result::Result<T, TransportError>;

/// Error from acquiring a service handle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// The registry returned no handle for the instance.
    #[error("failed to get service {descriptor}/{instance}")]
    ServiceUnavailable {
        /// Interface descriptor that was looked up.
        descriptor: String,
        /// Instance name that was looked up.
        instance: String,
    },
}
