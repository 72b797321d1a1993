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

const DEFAULT_STRICT: bool = false;

/// Configuration for an [`crate::Outcome`], fixed when the outcome is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutcomeConfig {
    /// If set, reading the success value (through `value` or `unwrap`) before the discriminant
    /// has been inspected will panic.
    pub strict: bool,
}

impl Default for OutcomeConfig {
    fn default() -> Self {
        Self {
            strict: DEFAULT_STRICT,
        }
    }
}

impl OutcomeConfig {
    /// A configuration that requires the discriminant to be inspected before the value is read.
    pub const fn strict() -> Self {
        OutcomeConfig { strict: true }
    }

    /// A configuration that allows unchecked reads, returning the default value for failures.
    pub const fn lenient() -> Self {
        OutcomeConfig { strict: false }
    }

    pub const fn with_strict(self, strict: bool) -> Self {
        OutcomeConfig { strict }
    }

    pub const fn is_strict(&self) -> bool {
        self.strict
    }
}
