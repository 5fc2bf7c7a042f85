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

//! Represents a medium of exchange in a specified denomination.

use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use moneta_core::correctness::{FAILED, check_ascii_uppercase, check_predicate_true, check_valid_string};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ustr::Ustr;

use crate::{
    currencies::CURRENCIES,
    enums::CurrencyType,
    errors::CurrencyLookupError,
    types::quantize::{MAX_PRECISION, quantize},
};

/// Represents a medium of exchange in a specified denomination.
///
/// Extends ISO 4217 to embrace precious metals, crypto assets and
/// alternative units of account.
///
/// Currency values are immutable for their entire lifetime: they are created
/// once (typically at process start from the builtin table) and never
/// mutated. Both string attributes are interned, making the type `Copy` with
/// O(1) equality and hashing over all four attributes.
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub struct Currency {
    /// The currency code (uppercase alphabetic, unique within a registry).
    pub code: Ustr,
    /// The currency display name.
    pub name: Ustr,
    /// The number of minor-unit fractional digits, or `-1` to select
    /// [`MAX_PRECISION`] for instruments without a natural minor unit.
    pub precision: i8,
    /// The classification of the currency.
    pub currency_type: CurrencyType,
}

impl Currency {
    /// Creates a new [`Currency`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code` is not uppercase alphabetic.
    /// - `name` is empty or padded with whitespace.
    /// - `precision` is less than `-1`.
    pub fn new_checked<T: AsRef<str>>(
        code: T,
        name: T,
        precision: i8,
        currency_type: CurrencyType,
    ) -> anyhow::Result<Self> {
        let code = code.as_ref();
        let name = name.as_ref();
        check_ascii_uppercase(code, "code")?;
        check_valid_string(name, "name")?;
        check_predicate_true(precision >= -1, "`precision` can not be less than -1")?;

        Ok(Self {
            code: Ustr::from(code),
            name: Ustr::from(name),
            precision,
            currency_type,
        })
    }

    /// Creates a new [`Currency`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Currency::new_checked`] for
    /// more details.
    pub fn new<T: AsRef<str>>(code: T, name: T, precision: i8, currency_type: CurrencyType) -> Self {
        Self::new_checked(code, name, precision, currency_type).expect(FAILED)
    }

    /// Returns the number of fractional digits amounts in this currency
    /// quantize to, resolving the `-1` sentinel to [`MAX_PRECISION`].
    #[must_use]
    pub fn effective_precision(&self) -> u32 {
        if self.precision < 0 {
            MAX_PRECISION
        } else {
            self.precision as u32
        }
    }

    /// Quantizes `qty` to this currency's minor-unit fraction using
    /// round-half-to-even.
    #[must_use]
    pub fn quantize(&self, qty: Decimal) -> Decimal {
        quantize(qty, self.effective_precision())
    }

    /// Returns `true` if the currency is ordinary legal tender.
    #[must_use]
    pub fn is_money(&self) -> bool {
        self.currency_type == CurrencyType::Money
    }

    /// Returns `true` if the currency is a precious metal.
    #[must_use]
    pub fn is_metal(&self) -> bool {
        self.currency_type == CurrencyType::Metal
    }

    /// Returns `true` if the currency is a crypto asset.
    #[must_use]
    pub fn is_crypto(&self) -> bool {
        self.currency_type == CurrencyType::Crypto
    }

    /// Returns `true` if the currency is an alternative unit of account.
    #[must_use]
    pub fn is_alternative(&self) -> bool {
        self.currency_type == CurrencyType::Alternative
    }
}

impl FromStr for Currency {
    type Err = CurrencyLookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CURRENCIES.lookup(s)
    }
}

impl Debug for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(code={}, name='{}', precision={}, type={})",
            stringify!(Currency),
            self.code,
            self.name,
            self.precision,
            self.currency_type,
        )
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code.as_str())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code: String = Deserialize::deserialize(deserializer)?;
        Self::from_str(&code).map_err(serde::de::Error::custom)
    }
}
