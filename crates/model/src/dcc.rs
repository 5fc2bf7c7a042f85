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

//! Day count conventions and interest calculation.
//!
//! A day count convention maps a period of dates onto a decimal fraction of
//! a year. The monetary algebra has no opinion on how the fraction is
//! derived (its only contract is "accept a decimal, multiply, quantize"),
//! so everything in this module sits strictly on top of
//! [`Money`](crate::types::Money).
//!
//! Conventions are looked up by name (or any of their alternative names)
//! from the process-wide [`DAY_COUNTS`] registry.

use std::sync::LazyLock;

use ahash::AHashMap;
use chrono::{Datelike, NaiveDate};
use moneta_core::correctness::FAILED;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Currency, Money};

/// The type of day count fraction calculation functions.
///
/// Arguments are the start date of the period, the date the fraction is
/// calculated as of, and the end (termination) date of the period.
pub type FractionFn = fn(NaiveDate, NaiveDate, NaiveDate) -> Decimal;

/// A day count convention.
#[derive(Clone, Copy, Debug)]
pub struct DayCount {
    /// The canonical name of the convention.
    pub name: &'static str,
    /// Alternative names the convention is known under.
    pub altnames: &'static [&'static str],
    /// Codes of currencies known to use this convention by default.
    pub currencies: &'static [&'static str],
    /// The day count fraction calculation function.
    pub calculate: FractionFn,
}

impl DayCount {
    /// Computes the day count fraction for the given period.
    #[must_use]
    pub fn fraction(&self, start: NaiveDate, asof: NaiveDate, end: NaiveDate) -> Decimal {
        (self.calculate)(start, asof, end)
    }

    /// Calculates the interest accrued on `principal` at the annual `rate`
    /// over the given schedule.
    ///
    /// `end` defaults to `asof`. An undefined principal yields an undefined
    /// result.
    #[must_use]
    pub fn interest(
        &self,
        principal: &Money,
        rate: Decimal,
        start: NaiveDate,
        asof: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Money {
        principal.multiply(rate * self.fraction(start, asof, end.unwrap_or(asof)))
    }
}

/// A registry of day count conventions with name and currency indexes.
#[derive(Debug, Default)]
pub struct DayCountRegistry {
    table: Vec<DayCount>,
    names: AHashMap<String, usize>,
    currencies: AHashMap<&'static str, usize>,
}

impl DayCountRegistry {
    /// Registers `convention` under its name and alternative names.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the names is already registered.
    pub fn register(&mut self, convention: DayCount) -> anyhow::Result<()> {
        let index = self.table.len();
        for name in std::iter::once(convention.name).chain(convention.altnames.iter().copied()) {
            let key = name.to_uppercase();
            if self.names.contains_key(&key) {
                anyhow::bail!("day count convention '{name}' is already registered")
            }
            self.names.insert(key, index);
        }
        for code in convention.currencies {
            self.currencies.entry(*code).or_insert(index);
        }
        self.table.push(convention);
        Ok(())
    }

    /// Returns the convention registered under `name` (canonical or
    /// alternative, case-insensitive), if any.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&DayCount> {
        self.names
            .get(&name.to_uppercase())
            .map(|&index| &self.table[index])
    }

    /// Returns the default convention for `currency`, if one is known.
    #[must_use]
    pub fn find_for(&self, currency: Currency) -> Option<&DayCount> {
        self.currencies
            .get(currency.code.as_str())
            .map(|&index| &self.table[index])
    }

    /// Returns an iterator over the registered conventions.
    pub fn all(&self) -> impl Iterator<Item = &DayCount> {
        self.table.iter()
    }
}

/// The process-wide day count convention registry.
pub static DAY_COUNTS: LazyLock<DayCountRegistry> = LazyLock::new(|| {
    let mut registry = DayCountRegistry::default();
    for convention in [
        DayCount {
            name: "Act/Act",
            altnames: &["Actual/Actual", "Actual/Actual (ISDA)"],
            currencies: &[],
            calculate: act_act,
        },
        DayCount {
            name: "Act/360",
            altnames: &["Actual/360", "French", "360"],
            currencies: &[
                "AUD", "CAD", "CHF", "EUR", "USD", "DKK", "CZK", "HUF", "SEK", "IDR", "NOK",
                "JPY", "NZD", "THB",
            ],
            calculate: act_360,
        },
        DayCount {
            name: "Act/365F",
            altnames: &["Actual/365 Fixed", "English", "365"],
            currencies: &["GBP", "HKD", "INR", "PLN", "SGD", "ZAR", "MYR"],
            calculate: act_365_fixed,
        },
        DayCount {
            name: "Act/365A",
            altnames: &["Actual/365 Actual"],
            currencies: &[],
            calculate: act_365_actual,
        },
        DayCount {
            name: "Act/365L",
            altnames: &["Actual/365 Leap Year"],
            currencies: &[],
            calculate: act_365_leap,
        },
        DayCount {
            name: "NL/365",
            altnames: &["Actual/365 No Leap Year", "NL365"],
            currencies: &[],
            calculate: nl_365,
        },
        DayCount {
            name: "30/360 ISDA",
            altnames: &["30/360 US Municipal", "Bond Basis"],
            currencies: &[],
            calculate: thirty_360_isda,
        },
        DayCount {
            name: "30E/360",
            altnames: &[
                "30/360 ISMA",
                "30/360 European",
                "30S/360 Special German",
                "Eurobond Basis",
            ],
            currencies: &[],
            calculate: thirty_e_360,
        },
        DayCount {
            name: "30E+/360",
            altnames: &[],
            currencies: &[],
            calculate: thirty_e_plus_360,
        },
        DayCount {
            name: "30/360 German",
            altnames: &["30E/360 ISDA"],
            currencies: &[],
            calculate: thirty_360_german,
        },
        DayCount {
            name: "30/360 US",
            altnames: &["30U/360", "30US/360"],
            currencies: &[],
            calculate: thirty_360_us,
        },
    ] {
        registry.register(convention).expect(FAILED);
    }
    log::debug!("built day count registry with {} conventions", registry.table.len());
    registry
});

fn actual_days(start: NaiveDate, asof: NaiveDate) -> i64 {
    (asof - start).num_days()
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Indicates if any 29th of February falls within `start..=end`.
fn has_leap_day(start: NaiveDate, end: NaiveDate) -> bool {
    (start.year()..=end.year()).any(|year| {
        NaiveDate::from_ymd_opt(year, 2, 29).is_some_and(|leap_day| start <= leap_day && leap_day <= end)
    })
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.day() == days_in_month(date.year(), date.month())
}

fn thirty_360(d1: i64, d2: i64, start: NaiveDate, asof: NaiveDate) -> Decimal {
    let days = (d2 - d1)
        + 30 * (i64::from(asof.month()) - i64::from(start.month()))
        + 360 * i64::from(asof.year() - start.year());
    Decimal::from(days) / dec!(360)
}

/// Computes the day count fraction for the "Act/Act" convention.
///
/// Days in leap years accrue at 1/366, days in regular years at 1/365;
/// `asof` itself is excluded from the count.
pub fn act_act(start: NaiveDate, asof: NaiveDate, _end: NaiveDate) -> Decimal {
    let mut regular_days = 0i64;
    let mut leap_days = 0i64;

    for year in start.year()..=asof.year() {
        let year_begin = NaiveDate::from_ymd_opt(year, 1, 1).expect(FAILED);
        let year_end = NaiveDate::from_ymd_opt(year + 1, 1, 1).expect(FAILED);
        let days = (asof.min(year_end) - start.max(year_begin)).num_days();
        if days <= 0 {
            continue;
        }
        if is_leap_year(year) {
            leap_days += days;
        } else {
            regular_days += days;
        }
    }

    Decimal::from(regular_days) / dec!(365) + Decimal::from(leap_days) / dec!(366)
}

/// Computes the day count fraction for the "Act/360" convention.
pub fn act_360(start: NaiveDate, asof: NaiveDate, _end: NaiveDate) -> Decimal {
    Decimal::from(actual_days(start, asof)) / dec!(360)
}

/// Computes the day count fraction for the "Act/365F" convention.
pub fn act_365_fixed(start: NaiveDate, asof: NaiveDate, _end: NaiveDate) -> Decimal {
    Decimal::from(actual_days(start, asof)) / dec!(365)
}

/// Computes the day count fraction for the "Act/365A" convention.
pub fn act_365_actual(start: NaiveDate, asof: NaiveDate, _end: NaiveDate) -> Decimal {
    let denominator = if has_leap_day(start, asof) {
        dec!(366)
    } else {
        dec!(365)
    };
    Decimal::from(actual_days(start, asof)) / denominator
}

/// Computes the day count fraction for the "Act/365L" convention.
pub fn act_365_leap(start: NaiveDate, asof: NaiveDate, _end: NaiveDate) -> Decimal {
    let denominator = if is_leap_year(asof.year()) {
        dec!(366)
    } else {
        dec!(365)
    };
    Decimal::from(actual_days(start, asof)) / denominator
}

/// Computes the day count fraction for the "NL/365" convention.
pub fn nl_365(start: NaiveDate, asof: NaiveDate, _end: NaiveDate) -> Decimal {
    let leap_day = i64::from(has_leap_day(start, asof));
    Decimal::from(actual_days(start, asof) - leap_day) / dec!(365)
}

/// Computes the day count fraction for the "30/360 ISDA" convention.
pub fn thirty_360_isda(start: NaiveDate, asof: NaiveDate, _end: NaiveDate) -> Decimal {
    let d1 = if start.day() == 31 { 30 } else { i64::from(start.day()) };
    let d2 = if d1 == 30 && asof.day() == 31 {
        30
    } else {
        i64::from(asof.day())
    };
    thirty_360(d1, d2, start, asof)
}

/// Computes the day count fraction for the "30E/360" convention.
pub fn thirty_e_360(start: NaiveDate, asof: NaiveDate, _end: NaiveDate) -> Decimal {
    let d1 = if start.day() == 31 { 30 } else { i64::from(start.day()) };
    let d2 = if asof.day() == 31 { 30 } else { i64::from(asof.day()) };
    thirty_360(d1, d2, start, asof)
}

/// Computes the day count fraction for the "30E+/360" convention.
pub fn thirty_e_plus_360(start: NaiveDate, asof: NaiveDate, _end: NaiveDate) -> Decimal {
    let d1 = if start.day() == 31 { 30 } else { i64::from(start.day()) };
    let asof = if asof.day() == 31 {
        asof.succ_opt().expect(FAILED)
    } else {
        asof
    };
    thirty_360(d1, i64::from(asof.day()), start, asof)
}

/// Computes the day count fraction for the "30/360 German" convention.
pub fn thirty_360_german(start: NaiveDate, asof: NaiveDate, end: NaiveDate) -> Decimal {
    let d1 = if start.day() == 31 || (start.month() == 2 && is_last_day_of_month(start)) {
        30
    } else {
        i64::from(start.day())
    };
    let d2 = if asof.day() == 31 || (asof.month() == 2 && is_last_day_of_month(asof) && end != asof)
    {
        30
    } else {
        i64::from(asof.day())
    };
    thirty_360(d1, d2, start, asof)
}

/// Computes the day count fraction for the "30/360 US" convention.
pub fn thirty_360_us(start: NaiveDate, asof: NaiveDate, _end: NaiveDate) -> Decimal {
    let mut d1 = i64::from(start.day());
    let mut d2 = i64::from(asof.day());

    if is_last_day_of_month(start) {
        d1 = 30;
        if is_last_day_of_month(asof) {
            d2 = 30;
        }
    }
    if d2 == 31 && (d1 == 30 || d1 == 31) {
        d2 = 30;
    }
    if d1 == 31 {
        d1 = 30;
    }

    thirty_360(d1, d2, start, asof)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // The four reference periods used across all convention cases below.
    fn period(index: usize) -> (NaiveDate, NaiveDate) {
        match index {
            1 => (date(2007, 12, 28), date(2008, 2, 28)),
            2 => (date(2007, 12, 28), date(2008, 2, 29)),
            3 => (date(2007, 10, 31), date(2008, 11, 30)),
            _ => (date(2008, 2, 1), date(2009, 5, 31)),
        }
    }

    fn assert_fraction(calculate: FractionFn, index: usize, expected: &str) {
        let (start, asof) = period(index);
        let fraction = calculate(start, asof, asof).round_dp(14);
        assert_eq!(fraction, Decimal::from_str(expected).unwrap());
    }

    #[rstest]
    #[case(1, "0.16942884946478")]
    #[case(2, "0.17216108990194")]
    #[case(3, "1.08243131970956")]
    #[case(4, "1.32625945055768")]
    fn test_act_act(#[case] index: usize, #[case] expected: &str) {
        assert_fraction(act_act, index, expected);
    }

    #[rstest]
    #[case(1, "0.17222222222222")]
    #[case(2, "0.17500000000000")]
    #[case(3, "1.10000000000000")]
    #[case(4, "1.34722222222222")]
    fn test_act_360(#[case] index: usize, #[case] expected: &str) {
        assert_fraction(act_360, index, expected);
    }

    #[rstest]
    #[case(1, "0.16986301369863")]
    #[case(2, "0.17260273972603")]
    #[case(3, "1.08493150684932")]
    #[case(4, "1.32876712328767")]
    fn test_act_365_fixed(#[case] index: usize, #[case] expected: &str) {
        assert_fraction(act_365_fixed, index, expected);
    }

    #[rstest]
    #[case(1, "0.16986301369863")]
    #[case(2, "0.17213114754098")]
    #[case(3, "1.08196721311475")]
    #[case(4, "1.32513661202186")]
    fn test_act_365_actual(#[case] index: usize, #[case] expected: &str) {
        assert_fraction(act_365_actual, index, expected);
    }

    #[rstest]
    #[case(1, "0.16939890710383")]
    #[case(2, "0.17213114754098")]
    #[case(3, "1.08196721311475")]
    #[case(4, "1.32876712328767")]
    fn test_act_365_leap(#[case] index: usize, #[case] expected: &str) {
        assert_fraction(act_365_leap, index, expected);
    }

    #[rstest]
    #[case(1, "0.16986301369863")]
    #[case(2, "0.16986301369863")]
    #[case(3, "1.08219178082192")]
    #[case(4, "1.32602739726027")]
    fn test_nl_365(#[case] index: usize, #[case] expected: &str) {
        assert_fraction(nl_365, index, expected);
    }

    #[rstest]
    #[case(1, "0.16666666666667")]
    #[case(2, "0.16944444444444")]
    #[case(3, "1.08333333333333")]
    #[case(4, "1.33333333333333")]
    fn test_thirty_360_isda(#[case] index: usize, #[case] expected: &str) {
        assert_fraction(thirty_360_isda, index, expected);
    }

    #[rstest]
    #[case(1, "0.16666666666667")]
    #[case(2, "0.16944444444444")]
    #[case(3, "1.08333333333333")]
    #[case(4, "1.33055555555556")]
    fn test_thirty_e_360(#[case] index: usize, #[case] expected: &str) {
        assert_fraction(thirty_e_360, index, expected);
    }

    #[rstest]
    #[case(1, "0.16666666666667")]
    #[case(2, "0.16944444444444")]
    #[case(3, "1.08333333333333")]
    #[case(4, "1.33333333333333")]
    fn test_thirty_e_plus_360(#[case] index: usize, #[case] expected: &str) {
        assert_fraction(thirty_e_plus_360, index, expected);
    }

    #[rstest]
    #[case(1, "0.16666666666667")]
    #[case(2, "0.16944444444444")]
    #[case(3, "1.08333333333333")]
    #[case(4, "1.33055555555556")]
    fn test_thirty_360_german(#[case] index: usize, #[case] expected: &str) {
        assert_fraction(thirty_360_german, index, expected);
    }

    #[rstest]
    #[case(1, "0.16666666666667")]
    #[case(2, "0.16944444444444")]
    #[case(3, "1.08333333333333")]
    #[case(4, "1.33333333333333")]
    fn test_thirty_360_us(#[case] index: usize, #[case] expected: &str) {
        assert_fraction(thirty_360_us, index, expected);
    }

    #[rstest]
    fn test_registry_find_by_name_and_altname() {
        assert!(DAY_COUNTS.find("Act/Act").is_some());
        assert!(DAY_COUNTS.find("actual/actual (isda)").is_some());
        assert!(DAY_COUNTS.find("Eurobond Basis").is_some());
        assert!(DAY_COUNTS.find("No Such Convention").is_none());
        assert_eq!(DAY_COUNTS.all().count(), 11);
    }

    #[rstest]
    fn test_registry_find_for_currency() {
        assert_eq!(DAY_COUNTS.find_for(Currency::USD()).unwrap().name, "Act/360");
        assert_eq!(DAY_COUNTS.find_for(Currency::GBP()).unwrap().name, "Act/365F");
        assert!(DAY_COUNTS.find_for(Currency::BTC()).is_none());
    }

    #[rstest]
    fn test_registry_rejects_duplicate_names() {
        let mut registry = DayCountRegistry::default();
        let convention = *DAY_COUNTS.find("Act/Act").unwrap();
        registry.register(convention).unwrap();
        assert!(registry.register(convention).is_err());
    }

    #[rstest]
    fn test_interest_end_to_end() {
        let principal = Money::new(
            Currency::USD(),
            Decimal::from(1_000_000),
            date(2008, 2, 28),
        );
        let convention = DAY_COUNTS.find("Act/Act").unwrap();
        let interest = convention.interest(
            &principal,
            Decimal::from_str("0.01").unwrap(),
            date(2007, 12, 28),
            date(2008, 2, 28),
            None,
        );
        assert_eq!(
            interest,
            Money::new(Currency::USD(), Decimal::from_str("1694.29").unwrap(), date(2008, 2, 28)),
        );
    }

    #[rstest]
    fn test_interest_on_undefined_principal() {
        let convention = DAY_COUNTS.find("Act/360").unwrap();
        let interest = convention.interest(
            &Money::undefined(),
            Decimal::ONE,
            date(2008, 1, 1),
            date(2008, 2, 1),
            None,
        );
        assert!(interest.is_undefined());
    }
}
