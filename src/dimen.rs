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

use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use num_traits::{ConstZero, NumCast, ToPrimitive, Zero};

use crate::error::{BacktraceError, CastError};

/// A vector with two f32 values.
pub type Vec2 = Vector2<f32>;

/// A vector with two i32 values.
pub type IVec2 = Vector2<i32>;

/// A vector with two u32 values.
pub type UVec2 = Vector2<u32>;

/// A vector containing two numeric values. This may represent a size or
/// position.
///
/// All arithmetic is component-wise: multiplying two vectors multiplies `x`
/// by `x` and `y` by `y`, it does not compute a dot product.
///
/// ```
/// use mathlib::dimen::IVec2;
///
/// let mut v = IVec2::new(3, 5) + IVec2::new(0, 1);
/// assert_eq!(v, IVec2::new(3, 6));
///
/// v *= IVec2::new(2, 0);
/// assert_eq!(v, IVec2::new(6, 0));
/// ```
#[repr(C)]
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub struct Vector2<T>
{
    /// The horizontal component of the vector.
    pub x: T,
    /// The vertical component of the vector.
    pub y: T
}

impl<T> Vector2<T>
{
    /// Instantiates a new `Vector2` from the specified horizontal and vertical
    /// components.
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self
    {
        Vector2 { x, y }
    }

    /// Overwrites both components with those of `other`, returning the
    /// receiver so further calls can be chained.
    ///
    /// ```
    /// use mathlib::dimen::IVec2;
    ///
    /// let mut v = IVec2::new(1, 2);
    /// v.assign(IVec2::new(7, 7)).x += 1;
    /// assert_eq!(v, IVec2::new(8, 7));
    /// ```
    #[inline]
    pub fn assign(&mut self, other: Self) -> &mut Self
    {
        *self = other;
        self
    }
}

impl<T: Clone> Vector2<T>
{
    /// Instantiates a new `Vector2` with both components set to `value`.
    #[inline]
    #[must_use]
    pub fn splat(value: T) -> Self
    {
        Vector2 {
            x: value.clone(),
            y: value
        }
    }

    /// Returns a copy of this vector with both components multiplied by
    /// `scalar`. Equivalent to `self * scalar`.
    #[inline]
    #[must_use]
    pub fn scale(self, scalar: T) -> Self
    where
        T: Mul<Output = T>
    {
        self * scalar
    }
}

impl<T: ConstZero> Vector2<T>
{
    /// A vector with both components set to zero.
    pub const ZERO: Vector2<T> = Vector2 {
        x: T::ZERO,
        y: T::ZERO
    };
}

impl<T: ToPrimitive + Display + Copy> Vector2<T>
{
    /// Converts each component to the numeric type `U`.
    ///
    /// Fails if either component is out of range for `U`, or is a NaN being
    /// converted to an integer type. Fractional values converted to an
    /// integer type are truncated towards zero.
    pub fn try_cast<U: NumCast>(self) -> Result<Vector2<U>, BacktraceError<CastError>>
    {
        let x = cast_component("x", self.x)?;
        let y = cast_component("y", self.y)?;
        Ok(Vector2 { x, y })
    }
}

fn cast_component<T, U>(
    component: &'static str,
    value: T
) -> Result<U, BacktraceError<CastError>>
where
    T: ToPrimitive + Display + Copy,
    U: NumCast
{
    <U as NumCast>::from(value).ok_or_else(|| {
        log::debug!(
            "Component {} = {} is not representable as {}",
            component,
            value,
            std::any::type_name::<U>()
        );
        BacktraceError::new(CastError::new(component, value))
    })
}

impl<T: Zero> Default for Vector2<T>
{
    #[inline]
    fn default() -> Self
    {
        Self::zero()
    }
}

impl<T: Zero> Zero for Vector2<T>
{
    #[inline]
    fn zero() -> Self
    {
        Vector2::new(T::zero(), T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool
    {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl<T: ConstZero> ConstZero for Vector2<T>
{
    const ZERO: Self = Vector2 {
        x: T::ZERO,
        y: T::ZERO
    };
}

impl<T> From<(T, T)> for Vector2<T>
{
    #[inline]
    fn from(value: (T, T)) -> Self
    {
        Vector2::new(value.0, value.1)
    }
}

impl<T> From<Vector2<T>> for (T, T)
{
    #[inline]
    fn from(value: Vector2<T>) -> Self
    {
        (value.x, value.y)
    }
}

impl<T> From<[T; 2]> for Vector2<T>
{
    #[inline]
    fn from(value: [T; 2]) -> Self
    {
        let [x, y] = value;
        Vector2::new(x, y)
    }
}

impl<T> From<Vector2<T>> for [T; 2]
{
    #[inline]
    fn from(value: Vector2<T>) -> Self
    {
        [value.x, value.y]
    }
}

impl<T: Display> Display for Vector2<T>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        f.write_str("(")?;
        Display::fmt(&self.x, f)?;
        f.write_str(", ")?;
        Display::fmt(&self.y, f)?;
        f.write_str(")")
    }
}

impl<T: Add<Output = T>> Add for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output
    {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: AddAssign> AddAssign for Vector2<T>
{
    #[inline]
    fn add_assign(&mut self, rhs: Self)
    {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: Sub<Output = T>> Sub for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output
    {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: SubAssign> SubAssign for Vector2<T>
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self)
    {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: Mul<Output = T>> Mul<Vector2<T>> for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn mul(self, rhs: Vector2<T>) -> Self::Output
    {
        Vector2::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<T: MulAssign> MulAssign<Vector2<T>> for Vector2<T>
{
    #[inline]
    fn mul_assign(&mut self, rhs: Vector2<T>)
    {
        self.x *= rhs.x;
        self.y *= rhs.y;
    }
}

impl<T: Mul<Output = T> + Clone> Mul<T> for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output
    {
        Vector2::new(self.x * rhs.clone(), self.y * rhs)
    }
}
