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

//! Error types for the monetary domain.
//!
//! All of these are unrecoverable at the call site: the algebra performs no
//! internal retries and expects them to propagate to its caller. Division by
//! zero is deliberately absent; it is normalized to the undefined state
//! rather than raised.

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::Currency;

/// An error raised by operations of the monetary-value algebra.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MonetaryError {
    /// Two defined values with differing currencies met in a binary
    /// operation or comparison.
    #[error("{ccy1} vs {ccy2} are incompatible for operation '{operation}'")]
    IncompatibleCurrency {
        /// The currency of the left-hand operand.
        ccy1: Currency,
        /// The currency of the right-hand operand.
        ccy2: Currency,
        /// The name of the attempted operation.
        operation: &'static str,
    },

    /// A payload attribute was read off an undefined monetary value.
    #[error("undefined monetary values do not carry {attribute} information")]
    UndefinedAccess {
        /// The attribute that was accessed.
        attribute: &'static str,
    },
}

/// An error raised when a currency code cannot be resolved by the registry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("currency identified by code '{code}' does not exist")]
pub struct CurrencyLookupError {
    /// The code that failed to resolve.
    pub code: String,
}

/// An error raised by a strict conversion when no foreign exchange rate can
/// be found for the requested pair and date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("foreign exchange rate for {ccy1}/{ccy2} not found as of {asof}")]
pub struct FxRateLookupError {
    /// The base currency of the requested rate.
    pub ccy1: Currency,
    /// The quote currency of the requested rate.
    pub ccy2: Currency,
    /// The date the rate was requested as of.
    pub asof: NaiveDate,
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use super::*;
    use crate::types::Currency;

    #[rstest]
    fn test_incompatible_currency_message() {
        let err = MonetaryError::IncompatibleCurrency {
            ccy1: Currency::USD(),
            ccy2: Currency::EUR(),
            operation: "addition",
        };
        assert_eq!(
            err.to_string(),
            "USD vs EUR are incompatible for operation 'addition'"
        );
    }

    #[rstest]
    fn test_undefined_access_message() {
        let err = MonetaryError::UndefinedAccess {
            attribute: "amount",
        };
        assert_eq!(
            err.to_string(),
            "undefined monetary values do not carry amount information"
        );
    }

    #[rstest]
    fn test_currency_lookup_message() {
        let err = CurrencyLookupError {
            code: "ZZZ".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "currency identified by code 'ZZZ' does not exist"
        );
    }

    #[rstest]
    fn test_fx_rate_lookup_message() {
        let err = FxRateLookupError {
            ccy1: Currency::USD(),
            ccy2: Currency::EUR(),
            asof: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "foreign exchange rate for USD/EUR not found as of 2019-01-01"
        );
    }
}
