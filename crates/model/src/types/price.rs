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

//! Represents a price: a monetary value at undamaged precision.

use rust_decimal::Decimal;

use crate::types::{
    Currency,
    monetary::{Monetary, PrecisionPolicy},
    money::Money,
    quantize::MAX_PRECISION,
};

/// The precision policy of the unquantized representation: amounts are
/// stored as given, and only rounding is bounded by [`MAX_PRECISION`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct MaxScale;

impl PrecisionPolicy for MaxScale {
    const LABEL: &'static str = "Price";

    fn apply(_currency: Currency, amount: Decimal) -> Decimal {
        amount
    }

    fn floor(_currency: Currency) -> u32 {
        MAX_PRECISION
    }
}

/// A price in a specified currency denomination as of a value date, carrying
/// its amount at undamaged precision.
pub type Price = Monetary<MaxScale>;

impl Monetary<MaxScale> {
    /// Performs monetary multiplication: scales the amount and quantizes the
    /// result to the currency denomination in one step.
    ///
    /// The undefined price yields the undefined money value.
    #[must_use]
    pub fn times(&self, other: Decimal) -> Money {
        match self {
            Self::Defined(v) => Money::new(v.currency, v.amount * other, v.value_date),
            Self::Undefined => Money::Undefined,
        }
    }

    /// Returns the money representation of this value: the amount quantized
    /// to the currency's minor-unit fraction (a lossy projection).
    #[must_use]
    pub fn to_money(&self) -> Money {
        match self {
            Self::Defined(v) => Money::new(v.currency, v.amount, v.value_date),
            Self::Undefined => Money::Undefined,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 1, 2).unwrap()
    }

    fn usd_price(amount: Decimal) -> Price {
        Price::new(Currency::USD(), amount, today())
    }

    #[rstest]
    fn test_construction_preserves_precision() {
        // Unlike the quantized representation, no minor-unit rounding occurs.
        let price = usd_price(dec!(1.23456789));
        assert_eq!(price.amount().unwrap(), dec!(1.23456789));
        assert_eq!(price.amount().unwrap().scale(), 8);
    }

    #[rstest]
    fn test_scalar_ops_preserve_precision() {
        assert_eq!(
            usd_price(dec!(0)).scalar_add(dec!(0.005)).amount().unwrap(),
            dec!(0.005)
        );
        assert_eq!(
            usd_price(dec!(1)).multiply(dec!(0.015)).amount().unwrap(),
            dec!(0.015)
        );
        assert_eq!(
            usd_price(dec!(1)).divide(dec!(8)).amount().unwrap(),
            dec!(0.125)
        );
    }

    #[rstest]
    fn test_round_clamps_to_max_precision() {
        let price = usd_price(dec!(1.0000000000015));
        assert_eq!(
            price.round(MAX_PRECISION).amount().unwrap(),
            dec!(1.000000000002)
        );
        // Requesting digits beyond the floor changes nothing further.
        assert_eq!(price.round(MAX_PRECISION + 4), price.round(MAX_PRECISION));
    }

    #[rstest]
    #[case(dec!(1.555), 2, dec!(1.56))]
    #[case(dec!(1.545), 2, dec!(1.54))]
    fn test_round_half_even(#[case] amount: Decimal, #[case] digits: u32, #[case] expected: Decimal) {
        assert_eq!(usd_price(amount).round(digits).amount().unwrap(), expected);
    }

    #[rstest]
    fn test_times_quantizes_into_money() {
        let price = usd_price(dec!(0.3333333));
        let money = price.times(dec!(3));
        assert_eq!(money, Money::new(Currency::USD(), dec!(1.00), today()));
        assert_eq!(money.amount().unwrap(), dec!(1.00));

        assert_eq!(Price::undefined().times(dec!(3)), Money::Undefined);
    }

    #[rstest]
    fn test_to_money_is_lossy() {
        let price = usd_price(dec!(1.005));
        let money = price.to_money();
        assert_eq!(money.amount().unwrap(), dec!(1.00));

        assert_eq!(Price::undefined().to_money(), Money::Undefined);
    }

    #[rstest]
    fn test_division_by_zero_is_absorbed() {
        assert_eq!(usd_price(dec!(1)).divide(dec!(0)), Price::Undefined);
        assert_eq!(usd_price(dec!(1)).floor_divide(dec!(0)), Price::Undefined);
    }

    #[rstest]
    fn test_bridging_round_trip_from_money() {
        let money = Money::new(Currency::USD(), dec!(1.23), today());
        assert_eq!(money.to_price().to_money(), money);
    }
}
