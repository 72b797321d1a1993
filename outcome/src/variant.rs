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

use std::fmt::{Display, Formatter};

/// The discriminant of an [`crate::Outcome`]. Obtained from [`crate::Outcome::variant`] so that
/// an outcome can be branched on with an ordinary `match`.
///
/// # Example
/// ```
/// use outcome::{Outcome, Variant};
///
/// let outcome: Outcome<i32, String> = Outcome::success(4);
/// match outcome.variant() {
///     Variant::Success => assert_eq!(outcome.value(), 4),
///     Variant::Failure => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    Success,
    Failure,
}

impl Variant {
    pub fn is_success(&self) -> bool {
        matches!(self, Variant::Success)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Variant::Failure)
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Success => write!(f, "Success"),
            Variant::Failure => write!(f, "Failure"),
        }
    }
}
