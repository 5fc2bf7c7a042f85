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

//! Represents an amount of money quantized to its currency denomination.

use chrono::NaiveDate;
use moneta_core::formatting::Separable;
use rust_decimal::Decimal;

use crate::types::{
    Currency,
    monetary::{Monetary, PrecisionPolicy},
    price::Price,
};

/// The precision policy of the quantized representation: amounts carry
/// exactly the currency's minor-unit fraction.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct CurrencyScale;

impl PrecisionPolicy for CurrencyScale {
    const LABEL: &'static str = "Money";

    fn apply(currency: Currency, amount: Decimal) -> Decimal {
        currency.quantize(amount)
    }

    fn floor(currency: Currency) -> u32 {
        currency.effective_precision()
    }
}

/// An amount of money in a specified currency denomination as of a value
/// date, quantized to the currency's minor-unit fraction.
pub type Money = Monetary<CurrencyScale>;

impl Monetary<CurrencyScale> {
    /// Creates a new [`Money`] value of zero in the given currency.
    #[must_use]
    pub fn zero(currency: Currency, value_date: NaiveDate) -> Self {
        Self::new(currency, Decimal::ZERO, value_date)
    }

    /// Returns the price representation of this value: the same payload at
    /// undamaged precision (a lossless promotion).
    #[must_use]
    pub fn to_price(&self) -> Price {
        match self {
            Self::Defined(v) => Price::new(v.currency, v.amount, v.value_date),
            Self::Undefined => Price::Undefined,
        }
    }

    /// Returns a formatted string representation with underscore-separated
    /// thousands, or `NA` when undefined.
    #[must_use]
    pub fn to_formatted_string(&self) -> String {
        match self {
            Self::Defined(v) => {
                format!("{} {}", v.amount.separate_with_underscores(), v.currency)
            }
            Self::Undefined => "NA".to_string(),
        }
    }
}
