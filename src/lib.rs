/*
 *  Copyright 2021 QuantumBadger
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

//! Numeric building blocks for math and graphics code.
//!
//! The main type is [dimen::Vector2], a two-component vector over any scalar
//! type supporting the relevant arithmetic operators.

pub use ::log as log;

/// Types representing sizes and positions.
pub mod dimen;

/// Error types.
pub mod error;

pub use crate::dimen::{IVec2, UVec2, Vec2, Vector2};
pub use crate::error::{BacktraceError, CastError};
