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

use thiserror::Error;

/// A failure annotated with context from the call site, produced by [`crate::Outcome::expect`].
/// It is displayed as `"{context}: {source}"` and, when the original failure is itself an error,
/// reports it as its source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{context}: {source}")]
pub struct ContextError<C, E> {
    context: C,
    #[source]
    source: E,
}

impl<C, E> ContextError<C, E> {
    pub fn new(context: C, source: E) -> Self {
        ContextError { context, source }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    /// The failure that was annotated.
    pub fn inner(&self) -> &E {
        &self.source
    }

    pub fn into_parts(self) -> (C, E) {
        let ContextError { context, source } = self;
        (context, source)
    }
}
