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

//! The foreign exchange boundary: rate values and the rate-lookup service.
//!
//! The algebra consumes rates, it never produces them (inversion aside).
//! Implementations of [`FxRateService`] are injected into conversion call
//! sites; the algebra performs no retries, caching or batching of its own,
//! and whether the implementation is blocking, remote or memoized is the
//! implementor's business.

use chrono::NaiveDate;
use moneta_core::correctness::{FAILED, check_nonzero_decimal};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Currency, quantize::quantize_max};

/// Represents a foreign exchange rate between two currencies as of a date.
///
/// The rate value is nonzero and quantized to the maximum supported
/// precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FxRate {
    /// The base currency of the rate.
    pub ccy1: Currency,
    /// The quote currency of the rate.
    pub ccy2: Currency,
    /// The date the rate is effective as of.
    pub asof: NaiveDate,
    /// The value of the rate (`ccy1`/`ccy2`).
    pub value: Decimal,
}

impl FxRate {
    /// Creates a new [`FxRate`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is zero.
    pub fn new_checked(
        ccy1: Currency,
        ccy2: Currency,
        asof: NaiveDate,
        value: Decimal,
    ) -> anyhow::Result<Self> {
        check_nonzero_decimal(value, "value")?;
        Ok(Self {
            ccy1,
            ccy2,
            asof,
            value: quantize_max(value),
        })
    }

    /// Creates a new [`FxRate`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`FxRate::new_checked`] for
    /// more details.
    #[must_use]
    pub fn new(ccy1: Currency, ccy2: Currency, asof: NaiveDate, value: Decimal) -> Self {
        Self::new_checked(ccy1, ccy2, asof, value).expect(FAILED)
    }

    /// Returns the inverted rate: currencies swapped, value reciprocal,
    /// re-quantized to the maximum supported precision.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self::new(self.ccy2, self.ccy1, self.asof, Decimal::ONE / self.value)
    }
}

/// A lookup service resolving foreign exchange rates.
///
/// The `strict` flag is forwarded from conversion call sites so that remote
/// or batched implementations can fail fast; returning `None` is always
/// acceptable, and the algebra decides whether absence is an error.
pub trait FxRateService {
    /// Returns the rate for the given currency pair as of `asof`, or `None`
    /// if the service knows no such rate.
    fn query(
        &self,
        ccy1: Currency,
        ccy2: Currency,
        asof: NaiveDate,
        strict: bool,
    ) -> Option<FxRate>;

    /// Returns rates for a collection of currency-pair/date queries,
    /// preserving input order.
    fn query_many(
        &self,
        queries: &[(Currency, Currency, NaiveDate)],
        strict: bool,
    ) -> Vec<Option<FxRate>> {
        queries
            .iter()
            .map(|(ccy1, ccy2, asof)| self.query(*ccy1, *ccy2, *asof, strict))
            .collect()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[rstest]
    fn test_new_quantizes_to_max_precision() {
        let rate = FxRate::new(Currency::USD(), Currency::EUR(), date(2019, 1, 1), dec!(0.8870524));
        assert_eq!(rate.value, dec!(0.887052400000));
    }

    #[rstest]
    fn test_new_checked_rejects_zero() {
        let result =
            FxRate::new_checked(Currency::USD(), Currency::EUR(), date(2019, 1, 1), dec!(0));
        assert!(result.is_err());
    }

    #[rstest]
    fn test_invert() {
        let rate = FxRate::new(Currency::USD(), Currency::EUR(), date(2019, 1, 1), dec!(0.8));
        let inverted = rate.invert();
        assert_eq!(inverted.ccy1, Currency::EUR());
        assert_eq!(inverted.ccy2, Currency::USD());
        assert_eq!(inverted.asof, rate.asof);
        assert_eq!(inverted.value, dec!(1.250000000000));
    }

    #[rstest]
    fn test_invert_round_trip() {
        let rate = FxRate::new(Currency::USD(), Currency::EUR(), date(2019, 1, 1), dec!(0.5));
        assert_eq!(rate.invert().invert(), rate);
    }

    struct SingleRateService {
        rate: FxRate,
    }

    impl FxRateService for SingleRateService {
        fn query(
            &self,
            ccy1: Currency,
            ccy2: Currency,
            asof: NaiveDate,
            _strict: bool,
        ) -> Option<FxRate> {
            (self.rate.ccy1 == ccy1 && self.rate.ccy2 == ccy2 && self.rate.asof == asof)
                .then_some(self.rate)
        }
    }

    #[rstest]
    fn test_query_many_preserves_order() {
        let asof = date(2019, 1, 1);
        let rate = FxRate::new(Currency::USD(), Currency::EUR(), asof, dec!(0.8));
        let service = SingleRateService { rate };

        let results = service.query_many(
            &[
                (Currency::EUR(), Currency::USD(), asof),
                (Currency::USD(), Currency::EUR(), asof),
                (Currency::USD(), Currency::GBP(), asof),
            ],
            false,
        );

        assert_eq!(results, vec![None, Some(rate), None]);
    }
}
