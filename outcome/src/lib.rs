// Copyright 2015-2023 Swim Inc.
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

//! # Outcome
//!
//! This crate provides [`Outcome`], an immutable container holding either a success value or a
//! failure. It is intended to be propagated, transformed and branched on as a single value rather
//! than as a separate value and error.
//!
//! An outcome is consumed with [`Outcome::match_with`], which requires both variants to be
//! handled, or by matching on its [`Variant`]. The value can also be read directly with
//! [`Outcome::value`] or [`Outcome::unwrap`], which return the default value of the success type
//! for a failure. When an outcome is created with a strict [`OutcomeConfig`], these direct reads
//! panic unless the outcome has been inspected first.
//!
//! ```
//! use outcome::Outcome;
//!
//! let parsed: Outcome<i32, String> = Outcome::new(21, None);
//! let doubled = parsed.map(|n| n * 2);
//! assert_eq!(doubled.match_with(|n| n.to_string(), |err| err), "42");
//! ```

mod config;
mod error;
mod outcome;
mod variant;

pub use config::OutcomeConfig;
pub use error::ContextError;
pub use outcome::Outcome;
pub use variant::Variant;
