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

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use backtrace::Backtrace;

/// Wraps an error together with the backtrace captured at the point the
/// error was created.
pub struct BacktraceError<E>
{
    error: E,
    backtrace: Backtrace
}

impl<E: Error> BacktraceError<E>
{
    pub(crate) fn new(error: E) -> Self
    {
        Self {
            error,
            backtrace: Backtrace::new()
        }
    }

    /// Returns a reference to the underlying error.
    #[inline]
    pub fn error(&self) -> &E
    {
        &self.error
    }

    /// Unwraps the underlying error, discarding the backtrace.
    #[inline]
    pub fn into_error(self) -> E
    {
        self.error
    }

    /// The backtrace captured when this error was created.
    #[inline]
    pub fn backtrace(&self) -> &Backtrace
    {
        &self.backtrace
    }
}

impl<E: Error> Display for BacktraceError<E>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        Display::fmt(&self.error, f)
    }
}

impl<E: Error> Debug for BacktraceError<E>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        writeln!(f, "{:?}", self.error)?;
        write!(f, "{:?}", self.backtrace)
    }
}

impl<E: Error + 'static> Error for BacktraceError<E>
{
    fn source(&self) -> Option<&(dyn Error + 'static)>
    {
        Some(&self.error)
    }
}

/// A vector component could not be represented in the target numeric type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastError
{
    component: &'static str,
    value: String
}

impl CastError
{
    pub(crate) fn new<V: Display>(component: &'static str, value: V) -> Self
    {
        Self {
            component,
            value: value.to_string()
        }
    }

    /// The name of the component which failed to convert, either `"x"` or
    /// `"y"`.
    #[inline]
    pub fn component(&self) -> &'static str
    {
        self.component
    }

    /// The offending value, formatted in its original type.
    #[inline]
    pub fn value(&self) -> &str
    {
        &self.value
    }
}

impl Display for CastError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        write!(
            f,
            "Cannot cast component {} with value {} to the target type",
            self.component, self.value
        )
    }
}

impl Error for CastError {}

#[cfg(test)]
mod test
{
    use super::*;

    #[test]
    fn test_wrapped_error_display()
    {
        let err = BacktraceError::new(CastError::new("y", -1));

        assert_eq!(err.error().component(), "y");
        assert_eq!(err.error().value(), "-1");
        assert_eq!(
            err.to_string(),
            "Cannot cast component y with value -1 to the target type"
        );
        assert!(err.source().is_some());
        assert!(!err.backtrace().frames().is_empty());

        let inner = err.into_error();
        assert_eq!(inner, CastError::new("y", "-1"));
    }
}
