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

//! Functions for quantizing exact decimal amounts.
//!
//! Quantization rounds a [`Decimal`] to a fixed number of fractional digits
//! using round-half-to-even and pins the scale so the result carries exactly
//! that many digits. Every amount entering the quantized representation goes
//! through here, as do foreign exchange rate values.

use rust_decimal::{Decimal, RoundingStrategy};

/// The maximum precision of monetary values and operations in this library.
///
/// Currencies declaring a precision of `-1` (metals, crypto assets and other
/// instruments without a natural minor unit) quantize to this digit count
/// instead of a minor-unit fraction of their own.
pub const MAX_PRECISION: u32 = 12;

/// Rounds `value` to `precision` fractional digits using round-half-to-even,
/// without touching the scale when the value is already coarser.
#[must_use]
pub fn round_half_even(value: Decimal, precision: u32) -> Decimal {
    value.round_dp_with_strategy(precision, RoundingStrategy::MidpointNearestEven)
}

/// Quantizes `value` to exactly `precision` fractional digits using
/// round-half-to-even.
///
/// Unlike [`round_half_even`], the scale of the result is pinned: quantizing
/// `1` to two digits yields `1.00`.
#[must_use]
pub fn quantize(value: Decimal, precision: u32) -> Decimal {
    let mut quantized = round_half_even(value, precision);
    quantized.rescale(precision);
    quantized
}

/// Quantizes `value` to [`MAX_PRECISION`] fractional digits.
#[must_use]
pub fn quantize_max(value: Decimal) -> Decimal {
    quantize(value, MAX_PRECISION)
}
