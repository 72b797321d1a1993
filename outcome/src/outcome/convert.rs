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

use either::Either;

use super::{Outcome, Payload};

impl<T, E> Outcome<T, E> {
    /// Create an outcome from a pair, as returned by [`Outcome::unwrap`]. If the error is present,
    /// the value is discarded.
    pub fn from_pair(pair: (T, Option<E>)) -> Self {
        let (value, error) = pair;
        Outcome::new(value, error)
    }

    /// Convert the outcome into a standard [`Result`].
    pub fn into_result(self) -> Result<T, E> {
        match self.payload {
            Payload::Success(value) => Ok(value),
            Payload::Failure(error) => Err(error),
        }
    }

    /// Convert the outcome into an [`Either`] with the error on the left and the value on the
    /// right.
    pub fn into_either(self) -> Either<E, T> {
        match self.payload {
            Payload::Success(value) => Either::Right(value),
            Payload::Failure(error) => Either::Left(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> From<Either<E, T>> for Outcome<T, E> {
    fn from(either: Either<E, T>) -> Self {
        match either {
            Either::Left(error) => Outcome::failure(error),
            Either::Right(value) => Outcome::success(value),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Either<E, T> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_either()
    }
}
