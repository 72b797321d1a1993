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

use std::fmt::{Debug, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};

use static_assertions::assert_impl_all;
use tracing::{debug, error, trace};

use crate::config::OutcomeConfig;
use crate::error::ContextError;
use crate::variant::Variant;

mod convert;


const UNINSPECTED_ACCESS: &str = "An outcome in strict mode must be inspected (with is_success, is_failure, variant or error) before its value is read.";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Payload<T, E> {
    Success(T),
    Failure(E),
}

/// A container holding either a success value of type `T` or a failure of type `E`.
///
/// An outcome never changes after it has been created. The combinators consume the outcome and
/// produce a new one (or a plain value). The preferred way to consume an outcome is
/// [`Outcome::match_with`], which requires both cases to be handled.
///
/// If the outcome is created with a strict [`OutcomeConfig`], reading the success value with
/// [`Outcome::value`] or [`Outcome::unwrap`] will panic unless the discriminant has been
/// inspected first.
pub struct Outcome<T, E> {
    payload: Payload<T, E>,
    config: OutcomeConfig,
    inspected: AtomicBool,
}

assert_impl_all!(Outcome<i32, String>: Send, Sync);

impl<T, E> Outcome<T, E> {
    fn from_payload(payload: Payload<T, E>, config: OutcomeConfig) -> Self {
        Self::from_payload_inspected(payload, config, false)
    }

    fn from_payload_inspected(
        payload: Payload<T, E>,
        config: OutcomeConfig,
        inspected: bool,
    ) -> Self {
        Outcome {
            payload,
            config,
            inspected: AtomicBool::new(inspected),
        }
    }

    /// Create a successful outcome with the default configuration.
    pub fn success(value: T) -> Self {
        Self::success_with_config(value, OutcomeConfig::default())
    }

    /// Create a failed outcome with the default configuration.
    pub fn failure(error: E) -> Self {
        Self::failure_with_config(error, OutcomeConfig::default())
    }

    /// Create a successful outcome with the given configuration.
    pub fn success_with_config(value: T, config: OutcomeConfig) -> Self {
        Self::from_payload(Payload::Success(value), config)
    }

    /// Create a failed outcome with the given configuration.
    pub fn failure_with_config(error: E, config: OutcomeConfig) -> Self {
        Self::from_payload(Payload::Failure(error), config)
    }

    /// Create an outcome from a value and an optional error. If an error is provided, the outcome
    /// is a failure and the value is discarded.
    ///
    /// # Arguments
    /// * `value` - The success value.
    /// * `error` - The failure, if one occurred.
    pub fn new(value: T, error: Option<E>) -> Self {
        Self::new_with_config(value, error, OutcomeConfig::default())
    }

    /// As [`Outcome::new`] but with the given configuration.
    pub fn new_with_config(value: T, error: Option<E>, config: OutcomeConfig) -> Self {
        match error {
            Some(error) => {
                debug!("Discarding the value of an outcome that was created with an error.");
                Self::failure_with_config(error, config)
            }
            None => Self::success_with_config(value, config),
        }
    }

    /// Replace the configuration of this outcome. The result has not been inspected.
    pub fn with_config(self, config: OutcomeConfig) -> Self {
        if config.strict {
            trace!("Enabling strict mode for an outcome.");
        }
        Self::from_payload(self.payload, config)
    }

    /// Shorthand for `with_config(OutcomeConfig::strict())`.
    pub fn strict(self) -> Self {
        self.with_config(OutcomeConfig::strict())
    }

    /// The configuration that this outcome was created with.
    pub fn config(&self) -> OutcomeConfig {
        self.config
    }

    fn mark_inspected(&self) {
        self.inspected.store(true, Ordering::Relaxed);
    }

    fn check_access(&self, operation: &'static str) {
        if self.config.strict && !self.inspected.load(Ordering::Relaxed) {
            error!(
                operation,
                "Uninspected access to the value of a strict outcome."
            );
            panic!("{}", UNINSPECTED_ACCESS);
        }
    }

    pub fn is_success(&self) -> bool {
        self.mark_inspected();
        matches!(self.payload, Payload::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        self.mark_inspected();
        matches!(self.payload, Payload::Failure(_))
    }

    /// Returns `true` if the outcome is a success and the value satisfies the predicate. The
    /// predicate is not called for a failure.
    pub fn is_success_and<F>(&self, pred: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        self.mark_inspected();
        match &self.payload {
            Payload::Success(value) => pred(value),
            Payload::Failure(_) => false,
        }
    }

    /// Returns `true` if the outcome is a failure and the error satisfies the predicate. The
    /// predicate is not called for a success.
    pub fn is_failure_and<F>(&self, pred: F) -> bool
    where
        F: FnOnce(&E) -> bool,
    {
        self.mark_inspected();
        match &self.payload {
            Payload::Success(_) => false,
            Payload::Failure(error) => pred(error),
        }
    }

    /// The discriminant of the outcome.
    pub fn variant(&self) -> Variant {
        self.mark_inspected();
        match self.payload {
            Payload::Success(_) => Variant::Success,
            Payload::Failure(_) => Variant::Failure,
        }
    }

    /// Consume the outcome by calling exactly one of two functions, selected by the variant.
    ///
    /// # Arguments
    /// * `on_success` - Called with the value of a successful outcome.
    /// * `on_failure` - Called with the error of a failed outcome.
    pub fn match_with<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self.payload {
            Payload::Success(value) => on_success(value),
            Payload::Failure(error) => on_failure(error),
        }
    }

    /// Transform the value of this outcome (if it has one).
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        let Outcome {
            payload, config, ..
        } = self;
        let payload = match payload {
            Payload::Success(value) => Payload::Success(f(value)),
            Payload::Failure(error) => Payload::Failure(error),
        };
        Outcome::from_payload(payload, config)
    }

    /// Transform the error of this outcome (if it has one). A success is passed through as it is,
    /// keeping its inspection state.
    pub fn map_failure<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        let Outcome {
            payload,
            config,
            inspected,
        } = self;
        match payload {
            Payload::Success(value) => Outcome::from_payload_inspected(
                Payload::Success(value),
                config,
                inspected.into_inner(),
            ),
            Payload::Failure(error) => Outcome::from_payload(Payload::Failure(f(error)), config),
        }
    }

    /// Combine this outcome with another. The first failure (from this outcome, then the other) is
    /// propagated. If both succeed, the value of the other is kept.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        let Outcome {
            payload, config, ..
        } = self;
        let payload = match (payload, other.payload) {
            (Payload::Failure(error), _) => Payload::Failure(error),
            (_, Payload::Failure(error)) => Payload::Failure(error),
            (_, Payload::Success(value)) => Payload::Success(value),
        };
        Outcome::from_payload(payload, config)
    }

    /// Apply a function to the value of this outcome, returning the outcome that it produces. For
    /// a failure, the function is not called and the error is propagated.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        let Outcome {
            payload, config, ..
        } = self;
        match payload {
            Payload::Success(value) => f(value),
            Payload::Failure(error) => Outcome::failure_with_config(error, config),
        }
    }

    /// Apply a function to the error of this outcome, returning the outcome that it produces. For
    /// a success, the function is not called and the value is propagated.
    pub fn or_else<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Outcome<T, F2>,
    {
        let Outcome {
            payload,
            config,
            inspected,
        } = self;
        match payload {
            Payload::Success(value) => Outcome::from_payload_inspected(
                Payload::Success(value),
                config,
                inspected.into_inner(),
            ),
            Payload::Failure(error) => f(error),
        }
    }

    /// Returns the value of a success or `default` for a failure.
    pub fn unwrap_or(self, default: T) -> T {
        match self.payload {
            Payload::Success(value) => value,
            Payload::Failure(_) => default,
        }
    }

    /// Returns the value of a success or computes one from the error of a failure.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self.payload {
            Payload::Success(value) => value,
            Payload::Failure(error) => f(error),
        }
    }

    /// Returns `default` for a failure or applies `f` to the value of a success.
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self.payload {
            Payload::Success(value) => f(value),
            Payload::Failure(_) => default,
        }
    }

    /// Applies `on_failure` to the error of a failure or `on_success` to the value of a success.
    pub fn map_or_else<U, FE, FS>(self, on_failure: FE, on_success: FS) -> U
    where
        FE: FnOnce(E) -> U,
        FS: FnOnce(T) -> U,
    {
        match self.payload {
            Payload::Success(value) => on_success(value),
            Payload::Failure(error) => on_failure(error),
        }
    }

    /// Annotate the error of this outcome (if it has one) with some context. The annotated error
    /// is displayed as `"{context}: {error}"`. A success is passed through as it is, keeping its
    /// inspection state.
    pub fn expect<C>(self, context: C) -> Outcome<T, ContextError<C, E>> {
        self.map_failure(move |error| ContextError::new(context, error))
    }

    /// Call a function with a reference to the value (if there is one). This does not count as
    /// inspecting the outcome in strict mode.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Payload::Success(value) = &self.payload {
            f(value);
        }
        self
    }

    /// Call a function with a reference to the error (if there is one). This does not count as
    /// inspecting the outcome in strict mode.
    pub fn inspect_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Payload::Failure(error) = &self.payload {
            f(error);
        }
        self
    }

    /// Borrow the payload of this outcome. The borrowed outcome has the same configuration and has
    /// not been inspected.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        let payload = match &self.payload {
            Payload::Success(value) => Payload::Success(value),
            Payload::Failure(error) => Payload::Failure(error),
        };
        Outcome::from_payload(payload, self.config)
    }

    /// The value of a success, discarding any error.
    pub fn success_value(self) -> Option<T> {
        match self.payload {
            Payload::Success(value) => Some(value),
            Payload::Failure(_) => None,
        }
    }

    /// The error of a failure, discarding any value.
    pub fn failure_value(self) -> Option<E> {
        match self.payload {
            Payload::Success(_) => None,
            Payload::Failure(error) => Some(error),
        }
    }

    /// A copy of the error of this outcome, if it has one. This never panics and counts as
    /// inspecting the outcome in strict mode.
    pub fn error(&self) -> Option<E>
    where
        E: Clone,
    {
        self.mark_inspected();
        match &self.payload {
            Payload::Success(_) => None,
            Payload::Failure(error) => Some(error.clone()),
        }
    }
}

impl<T: Default, E> Outcome<T, E> {
    /// A copy of the value of this outcome or the default value of `T` for a failure.
    ///
    /// # Panics
    /// In strict mode, if the outcome has not been inspected.
    pub fn value(&self) -> T
    where
        T: Clone,
    {
        self.check_access("value");
        match &self.payload {
            Payload::Success(value) => value.clone(),
            Payload::Failure(_) => T::default(),
        }
    }

    /// Split the outcome into a value and an optional error. For a failure, the value is the
    /// default value of `T`. It is preferable to use [`Outcome::match_with`].
    ///
    /// # Panics
    /// In strict mode, if the outcome has not been inspected.
    pub fn unwrap(self) -> (T, Option<E>) {
        self.check_access("unwrap");
        match self.payload {
            Payload::Success(value) => (value, None),
            Payload::Failure(error) => (T::default(), Some(error)),
        }
    }
}

impl<T: Clone, E: Clone> Clone for Outcome<T, E> {
    fn clone(&self) -> Self {
        Self::from_payload(self.payload.clone(), self.config)
    }
}

impl<T: PartialEq, E: PartialEq> PartialEq for Outcome<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.payload == other.payload
    }
}

impl<T: Eq, E: Eq> Eq for Outcome<T, E> {}

impl<T: Debug, E: Debug> Debug for Outcome<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.payload {
            Payload::Success(value) => f.debug_tuple("Success").field(value).finish(),
            Payload::Failure(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}
