// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! The generic two-state monetary value and its algebra.
//!
//! A [`Monetary`] value is either *defined*, carrying a currency, an exact
//! decimal amount and a value date, or *undefined*, representing the absence
//! of a monetary value (a missing price, a missing rate) as distinct from an
//! amount of zero. The undefined state is a unit variant: it carries no
//! payload and behaves as an absorbing or identity element depending on the
//! operation.
//!
//! The algebra is written once, generic over a [`PrecisionPolicy`], and
//! instantiated twice: [`Money`](crate::types::Money) quantizes amounts to
//! the currency's minor-unit fraction, [`Price`](crate::types::Price) stores
//! amounts at undamaged precision.
//!
//! # Totality
//!
//! Unary and scalar operations are total: applied to the payload when
//! defined, identity when undefined. Division by zero is not an error: it
//! yields the undefined value, because the domain treats "no sensible
//! monetary result" as absence rather than failure. The only operations that
//! can fail are binary arithmetic and comparisons between two defined values
//! of differing currencies, and payload accessors on an undefined value.
//!
//! # Operator traits
//!
//! `Neg`, `Add`, `Sub`, `Mul<Decimal>`, `Div<Decimal>` and the comparison
//! operators delegate to the named methods, which remain the source of
//! truth. Where a named method would return an incompatibility error, the
//! operator panics.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::Hash,
    marker::PhantomData,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

use chrono::NaiveDate;
use moneta_core::correctness::FAILED;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{FxRateLookupError, MonetaryError},
    exchange::FxRateService,
    types::{Currency, quantize::round_half_even},
};

/// The precision discipline of a monetary representation.
///
/// The policy decides how amounts are quantized on construction (and on any
/// re-quantizing operation) and how fine the [`round`](Monetary::round)
/// operation may go for a given currency.
pub trait PrecisionPolicy: Copy + Clone + Debug + PartialEq + Eq + Hash {
    /// The representation name used in diagnostics.
    const LABEL: &'static str;

    /// Quantizes `amount` for a value denominated in `currency`.
    fn apply(currency: Currency, amount: Decimal) -> Decimal;

    /// Returns the finest number of fractional digits rounding may target
    /// for a value denominated in `currency`.
    fn floor(currency: Currency) -> u32;
}

/// The payload of a defined monetary value.
///
/// Construction goes through [`Defined::new`], which applies the precision
/// policy, so a payload in the quantized representation is always quantized.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(bound(serialize = ""))]
pub struct Defined<P: PrecisionPolicy> {
    /// The currency denomination of the value.
    pub currency: Currency,
    /// The exact decimal amount, quantized per the precision policy.
    pub amount: Decimal,
    /// The date the value is effective as of.
    pub value_date: NaiveDate,
    #[serde(skip)]
    marker: PhantomData<P>,
}

impl<P: PrecisionPolicy> Defined<P> {
    /// Creates a new [`Defined`] payload, quantizing `amount` per the
    /// representation's precision policy.
    #[must_use]
    pub fn new(currency: Currency, amount: Decimal, value_date: NaiveDate) -> Self {
        Self {
            currency,
            amount: P::apply(currency, amount),
            value_date,
            marker: PhantomData,
        }
    }
}

impl<'de, P: PrecisionPolicy> Deserialize<'de> for Defined<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Payload {
            currency: Currency,
            amount: Decimal,
            value_date: NaiveDate,
        }

        // Re-quantize through the constructor so decoded payloads uphold the
        // representation's precision invariant.
        let payload = Payload::deserialize(deserializer)?;
        Ok(Self::new(payload.currency, payload.amount, payload.value_date))
    }
}

impl<P: PrecisionPolicy> Debug for Defined<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}, {}, {})",
            P::LABEL,
            self.amount,
            self.currency,
            self.value_date,
        )
    }
}

/// A monetary value: either defined with a payload, or undefined.
///
/// The undefined state serializes as `null`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged, bound(serialize = "", deserialize = ""))]
pub enum Monetary<P: PrecisionPolicy> {
    /// A defined monetary value.
    Defined(Defined<P>),
    /// The absence of a monetary value.
    Undefined,
}

impl<P: PrecisionPolicy> Monetary<P> {
    /// Creates a new monetary value in a safe manner.
    ///
    /// Returns the undefined value if *any* of the inputs is `None`,
    /// otherwise a defined value with the amount quantized per the
    /// representation's precision policy. This is the only entry point that
    /// manufactures absence from missing data.
    #[must_use]
    pub fn of(
        currency: Option<Currency>,
        amount: Option<Decimal>,
        value_date: Option<NaiveDate>,
    ) -> Self {
        match (currency, amount, value_date) {
            (Some(currency), Some(amount), Some(value_date)) => {
                Self::Defined(Defined::new(currency, amount, value_date))
            }
            _ => Self::Undefined,
        }
    }

    /// Creates a new defined monetary value, quantizing `amount` per the
    /// representation's precision policy.
    #[must_use]
    pub fn new(currency: Currency, amount: Decimal, value_date: NaiveDate) -> Self {
        Self::Defined(Defined::new(currency, amount, value_date))
    }

    /// Returns the undefined monetary value.
    #[must_use]
    pub const fn undefined() -> Self {
        Self::Undefined
    }

    /// Returns `true` if the value is defined.
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }

    /// Returns `true` if the value is undefined.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` if the value is defined with an amount of zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Defined(v) if v.amount.is_zero())
    }

    /// Returns the currency of the value.
    ///
    /// # Errors
    ///
    /// Returns an undefined-access error if the value is undefined.
    pub fn currency(&self) -> Result<Currency, MonetaryError> {
        match self {
            Self::Defined(v) => Ok(v.currency),
            Self::Undefined => Err(MonetaryError::UndefinedAccess {
                attribute: "currency",
            }),
        }
    }

    /// Returns the amount of the value.
    ///
    /// # Errors
    ///
    /// Returns an undefined-access error if the value is undefined.
    pub fn amount(&self) -> Result<Decimal, MonetaryError> {
        match self {
            Self::Defined(v) => Ok(v.amount),
            Self::Undefined => Err(MonetaryError::UndefinedAccess {
                attribute: "amount",
            }),
        }
    }

    /// Returns the value date of the value.
    ///
    /// # Errors
    ///
    /// Returns an undefined-access error if the value is undefined.
    pub fn value_date(&self) -> Result<NaiveDate, MonetaryError> {
        match self {
            Self::Defined(v) => Ok(v.value_date),
            Self::Undefined => Err(MonetaryError::UndefinedAccess {
                attribute: "value date",
            }),
        }
    }

    /// Returns the amount as an `f64`.
    ///
    /// # Errors
    ///
    /// Returns an undefined-access error if the value is undefined.
    pub fn as_f64(&self) -> Result<f64, MonetaryError> {
        self.amount().map(|amount| amount.to_f64().expect(FAILED))
    }

    /// Returns the amount truncated toward zero as an `i64`.
    ///
    /// # Errors
    ///
    /// Returns an undefined-access error if the value is undefined.
    ///
    /// # Panics
    ///
    /// Panics if the truncated amount does not fit an `i64`.
    pub fn as_i64(&self) -> Result<i64, MonetaryError> {
        self.amount()
            .map(|amount| amount.trunc().to_i64().expect(FAILED))
    }

    /// Returns the currency if defined, `default` otherwise.
    #[must_use]
    pub fn currency_or(&self, default: Currency) -> Currency {
        self.currency_opt().unwrap_or(default)
    }

    /// Returns the currency if defined.
    #[must_use]
    pub fn currency_opt(&self) -> Option<Currency> {
        match self {
            Self::Defined(v) => Some(v.currency),
            Self::Undefined => None,
        }
    }

    /// Returns the amount if defined, `default` otherwise.
    #[must_use]
    pub fn amount_or(&self, default: Decimal) -> Decimal {
        self.amount_opt().unwrap_or(default)
    }

    /// Returns the amount if defined, zero otherwise.
    #[must_use]
    pub fn amount_or_zero(&self) -> Decimal {
        self.amount_or(Decimal::ZERO)
    }

    /// Returns the amount if defined.
    #[must_use]
    pub fn amount_opt(&self) -> Option<Decimal> {
        match self {
            Self::Defined(v) => Some(v.amount),
            Self::Undefined => None,
        }
    }

    /// Returns the value date if defined, `default` otherwise.
    #[must_use]
    pub fn value_date_or(&self, default: NaiveDate) -> NaiveDate {
        self.value_date_opt().unwrap_or(default)
    }

    /// Returns the value date if defined.
    #[must_use]
    pub fn value_date_opt(&self) -> Option<NaiveDate> {
        match self {
            Self::Defined(v) => Some(v.value_date),
            Self::Undefined => None,
        }
    }

    /// Returns the absolute value if defined, itself otherwise.
    #[must_use]
    pub fn abs(&self) -> Self {
        match self {
            Self::Defined(v) => Self::Defined(Defined {
                amount: v.amount.abs(),
                ..*v
            }),
            Self::Undefined => *self,
        }
    }

    /// Negates the amount if defined, itself otherwise.
    #[must_use]
    pub fn negative(&self) -> Self {
        match self {
            Self::Defined(v) => Self::Defined(Defined {
                amount: -v.amount,
                ..*v
            }),
            Self::Undefined => *self,
        }
    }

    /// Returns the same monetary value (the unary-plus identity).
    #[must_use]
    pub fn positive(&self) -> Self {
        *self
    }

    /// Rounds the amount to `digits` fractional digits using
    /// round-half-to-even if defined, itself otherwise.
    ///
    /// Rounding never goes finer than the representation's precision floor
    /// for the value's currency: `digits` beyond the floor is a no-op past
    /// that point.
    #[must_use]
    pub fn round(&self, digits: u32) -> Self {
        match self {
            Self::Defined(v) => Self::Defined(Defined {
                amount: round_half_even(v.amount, digits.min(P::floor(v.currency))),
                ..*v
            }),
            Self::Undefined => *self,
        }
    }

    /// Performs monetary addition.
    ///
    /// An undefined operand contributes neither currency nor date: the
    /// result is then the other operand. The result's value date is the
    /// later of the two operand dates.
    ///
    /// # Errors
    ///
    /// Returns an incompatibility error if both operands are defined with
    /// differing currencies.
    pub fn add(&self, other: &Self) -> Result<Self, MonetaryError> {
        match (self, other) {
            (Self::Undefined, _) => Ok(*other),
            (_, Self::Undefined) => Ok(*self),
            (Self::Defined(lhs), Self::Defined(rhs)) => {
                if lhs.currency != rhs.currency {
                    return Err(MonetaryError::IncompatibleCurrency {
                        ccy1: lhs.currency,
                        ccy2: rhs.currency,
                        operation: "addition",
                    });
                }
                Ok(Self::Defined(Defined::new(
                    lhs.currency,
                    lhs.amount + rhs.amount,
                    lhs.value_date.max(rhs.value_date),
                )))
            }
        }
    }

    /// Performs monetary subtraction.
    ///
    /// An undefined left operand yields the negated right operand; an
    /// undefined right operand yields the left operand. The result's value
    /// date is the later of the two operand dates.
    ///
    /// # Errors
    ///
    /// Returns an incompatibility error if both operands are defined with
    /// differing currencies.
    pub fn subtract(&self, other: &Self) -> Result<Self, MonetaryError> {
        match (self, other) {
            (Self::Undefined, _) => Ok(other.negative()),
            (_, Self::Undefined) => Ok(*self),
            (Self::Defined(lhs), Self::Defined(rhs)) => {
                if lhs.currency != rhs.currency {
                    return Err(MonetaryError::IncompatibleCurrency {
                        ccy1: lhs.currency,
                        ccy2: rhs.currency,
                        operation: "subtraction",
                    });
                }
                Ok(Self::Defined(Defined::new(
                    lhs.currency,
                    lhs.amount - rhs.amount,
                    lhs.value_date.max(rhs.value_date),
                )))
            }
        }
    }

    /// Performs scalar addition on the amount, re-quantizing per the
    /// precision policy. Identity on the undefined value.
    #[must_use]
    pub fn scalar_add(&self, other: Decimal) -> Self {
        match self {
            Self::Defined(v) => {
                Self::Defined(Defined::new(v.currency, v.amount + other, v.value_date))
            }
            Self::Undefined => *self,
        }
    }

    /// Performs scalar subtraction on the amount, re-quantizing per the
    /// precision policy. Identity on the undefined value.
    #[must_use]
    pub fn scalar_subtract(&self, other: Decimal) -> Self {
        match self {
            Self::Defined(v) => {
                Self::Defined(Defined::new(v.currency, v.amount - other, v.value_date))
            }
            Self::Undefined => *self,
        }
    }

    /// Performs scalar multiplication, re-quantizing per the precision
    /// policy. Identity on the undefined value.
    #[must_use]
    pub fn multiply(&self, other: Decimal) -> Self {
        match self {
            Self::Defined(v) => {
                Self::Defined(Defined::new(v.currency, v.amount * other, v.value_date))
            }
            Self::Undefined => *self,
        }
    }

    /// Performs ordinary division if defined, itself otherwise.
    ///
    /// Division by zero (or any quotient the decimal representation cannot
    /// carry) yields the undefined value.
    #[must_use]
    pub fn divide(&self, other: Decimal) -> Self {
        match self {
            Self::Defined(v) => match v.amount.checked_div(other) {
                Some(quotient) => {
                    Self::Defined(Defined::new(v.currency, quotient, v.value_date))
                }
                None => Self::Undefined,
            },
            Self::Undefined => *self,
        }
    }

    /// Performs floor division (quotient truncated toward zero) if defined,
    /// itself otherwise.
    ///
    /// Division by zero yields the undefined value.
    #[must_use]
    pub fn floor_divide(&self, other: Decimal) -> Self {
        match self {
            Self::Defined(v) => match v.amount.checked_div(other) {
                Some(quotient) => {
                    Self::Defined(Defined::new(v.currency, quotient.trunc(), v.value_date))
                }
                None => Self::Undefined,
            },
            Self::Undefined => *self,
        }
    }

    /// Applies "less than" comparison against `other`.
    ///
    /// The undefined value sorts below every defined value and is equal only
    /// to itself.
    ///
    /// # Errors
    ///
    /// Returns an incompatibility error when both operands are defined with
    /// differing currencies.
    pub fn less_than(&self, other: &Self) -> Result<bool, MonetaryError> {
        match (self, other) {
            (Self::Undefined, _) => Ok(other.is_defined()),
            (Self::Defined(_), Self::Undefined) => Ok(false),
            (Self::Defined(lhs), Self::Defined(rhs)) => {
                Self::check_comparable(lhs, rhs, "< comparison")?;
                Ok(lhs.amount < rhs.amount)
            }
        }
    }

    /// Applies "less than or equal to" comparison against `other`.
    ///
    /// # Errors
    ///
    /// Returns an incompatibility error when both operands are defined with
    /// differing currencies.
    pub fn less_or_equal(&self, other: &Self) -> Result<bool, MonetaryError> {
        match (self, other) {
            (Self::Undefined, _) => Ok(true),
            (Self::Defined(_), Self::Undefined) => Ok(false),
            (Self::Defined(lhs), Self::Defined(rhs)) => {
                Self::check_comparable(lhs, rhs, "<= comparison")?;
                Ok(lhs.amount <= rhs.amount)
            }
        }
    }

    /// Applies "greater than" comparison against `other`.
    ///
    /// # Errors
    ///
    /// Returns an incompatibility error when both operands are defined with
    /// differing currencies.
    pub fn greater_than(&self, other: &Self) -> Result<bool, MonetaryError> {
        match (self, other) {
            (Self::Undefined, _) => Ok(false),
            (Self::Defined(_), Self::Undefined) => Ok(true),
            (Self::Defined(lhs), Self::Defined(rhs)) => {
                Self::check_comparable(lhs, rhs, "> comparison")?;
                Ok(lhs.amount > rhs.amount)
            }
        }
    }

    /// Applies "greater than or equal to" comparison against `other`.
    ///
    /// # Errors
    ///
    /// Returns an incompatibility error when both operands are defined with
    /// differing currencies.
    pub fn greater_or_equal(&self, other: &Self) -> Result<bool, MonetaryError> {
        match (self, other) {
            (Self::Undefined, _) => Ok(other.is_undefined()),
            (Self::Defined(_), Self::Undefined) => Ok(true),
            (Self::Defined(lhs), Self::Defined(rhs)) => {
                Self::check_comparable(lhs, rhs, ">= comparison")?;
                Ok(lhs.amount >= rhs.amount)
            }
        }
    }

    fn check_comparable(
        lhs: &Defined<P>,
        rhs: &Defined<P>,
        operation: &'static str,
    ) -> Result<(), MonetaryError> {
        if lhs.currency != rhs.currency {
            return Err(MonetaryError::IncompatibleCurrency {
                ccy1: lhs.currency,
                ccy2: rhs.currency,
                operation,
            });
        }
        Ok(())
    }

    /// Returns itself if defined, the value of the given combinator
    /// otherwise.
    #[must_use]
    pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Defined(_) => self,
            Self::Undefined => f(),
        }
    }

    /// Applies `f` to the defined payload and returns its result, or
    /// propagates the undefined value unchanged.
    #[must_use]
    pub fn and_then(self, f: impl FnOnce(&Defined<P>) -> Self) -> Self {
        match self {
            Self::Defined(v) => f(&v),
            Self::Undefined => self,
        }
    }

    /// Eliminates the state: applies `defined` to the payload when defined,
    /// evaluates `undefined` otherwise.
    pub fn fold<T>(
        self,
        defined: impl FnOnce(&Defined<P>) -> T,
        undefined: impl FnOnce() -> T,
    ) -> T {
        match self {
            Self::Defined(v) => defined(&v),
            Self::Undefined => undefined(),
        }
    }

    /// Creates a new value with the given currency if defined (re-quantizing
    /// the amount for the new denomination), itself otherwise.
    #[must_use]
    pub fn with_currency(&self, currency: Currency) -> Self {
        match self {
            Self::Defined(v) => Self::Defined(Defined::new(currency, v.amount, v.value_date)),
            Self::Undefined => *self,
        }
    }

    /// Creates a new value with the given amount if defined (quantized per
    /// the precision policy), itself otherwise.
    #[must_use]
    pub fn with_amount(&self, amount: Decimal) -> Self {
        match self {
            Self::Defined(v) => Self::Defined(Defined::new(v.currency, amount, v.value_date)),
            Self::Undefined => *self,
        }
    }

    /// Creates a new value with the given value date if defined, itself
    /// otherwise.
    #[must_use]
    pub fn with_value_date(&self, value_date: NaiveDate) -> Self {
        match self {
            Self::Defined(v) => Self::Defined(Defined::new(v.currency, v.amount, value_date)),
            Self::Undefined => *self,
        }
    }

    /// Converts the value into another currency.
    ///
    /// The conversion date defaults to the value's own date. The undefined
    /// value converts to itself regardless of `strict`. When the injected
    /// `service` knows no rate for the pair and date, the result is the
    /// undefined value, unless `strict` is set, in which case the lookup
    /// failure is returned as an error. On success the amount is multiplied
    /// by the rate, quantized per the precision policy, and the value date
    /// is carried forward to the conversion date.
    ///
    /// # Errors
    ///
    /// Returns an [`FxRateLookupError`] if `strict` is set and no rate is
    /// found for a defined value.
    pub fn convert(
        &self,
        to: Currency,
        asof: Option<NaiveDate>,
        strict: bool,
        service: &dyn FxRateService,
    ) -> Result<Self, FxRateLookupError> {
        let Self::Defined(v) = self else {
            return Ok(Self::Undefined);
        };

        let asof = asof.unwrap_or(v.value_date);

        match service.query(v.currency, to, asof, strict) {
            Some(rate) => Ok(Self::Defined(Defined::new(to, v.amount * rate.value, asof))),
            None if strict => Err(FxRateLookupError {
                ccy1: v.currency,
                ccy2: to,
                asof,
            }),
            None => Ok(Self::Undefined),
        }
    }
}

impl<P: PrecisionPolicy> Debug for Monetary<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Defined(v) => Debug::fmt(v, f),
            Self::Undefined => write!(f, "{}(NA)", P::LABEL),
        }
    }
}

impl<P: PrecisionPolicy> Display for Monetary<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Defined(v) => write!(f, "{} {}", v.amount, v.currency),
            Self::Undefined => write!(f, "NA"),
        }
    }
}

impl<P: PrecisionPolicy> PartialOrd for Monetary<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Undefined, Self::Undefined) => Some(Ordering::Equal),
            (Self::Undefined, Self::Defined(_)) => Some(Ordering::Less),
            (Self::Defined(_), Self::Undefined) => Some(Ordering::Greater),
            (Self::Defined(lhs), Self::Defined(rhs)) => {
                assert_eq!(
                    lhs.currency, rhs.currency,
                    "Currency mismatch: cannot compare {} with {}",
                    lhs.currency.code, rhs.currency.code
                );
                lhs.amount.partial_cmp(&rhs.amount)
            }
        }
    }
}

impl<P: PrecisionPolicy> Neg for Monetary<P> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.negative()
    }
}

impl<P: PrecisionPolicy> Add for Monetary<P> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Monetary::add(&self, &rhs).expect(FAILED)
    }
}

impl<P: PrecisionPolicy> Sub for Monetary<P> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Monetary::subtract(&self, &rhs).expect(FAILED)
    }
}

impl<P: PrecisionPolicy> AddAssign for Monetary<P> {
    fn add_assign(&mut self, other: Self) {
        *self = Monetary::add(self, &other).expect(FAILED);
    }
}

impl<P: PrecisionPolicy> SubAssign for Monetary<P> {
    fn sub_assign(&mut self, other: Self) {
        *self = Monetary::subtract(self, &other).expect(FAILED);
    }
}

impl<P: PrecisionPolicy> Mul<Decimal> for Monetary<P> {
    type Output = Self;
    fn mul(self, rhs: Decimal) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<P: PrecisionPolicy> Div<Decimal> for Monetary<P> {
    type Output = Self;
    fn div(self, rhs: Decimal) -> Self::Output {
        self.divide(rhs)
    }
}
