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

//! Enumerations for the monetary domain model.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The classification of a currency.
///
/// Extends ISO 4217 legal tender with precious metals, crypto assets and
/// alternative units of account.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyType {
    /// Ordinary legal tender.
    Money,
    /// A precious metal such as gold or silver.
    Metal,
    /// A crypto asset.
    Crypto,
    /// An alternative unit of account.
    Alternative,
}

/// The type of an account in the balance sheet or income statement.
///
/// Ordering follows the conventional statement layout: assets, liabilities,
/// equities, revenues, expenses.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// Economic resources beneficial to the entity.
    Assets,
    /// Debts and future obligations of the entity.
    Liabilities,
    /// Claims of owners and/or shareholders of the entity.
    Equities,
    /// Revenues resulting in an increase in equities.
    Revenues,
    /// Expenses resulting in a decrease in equities.
    Expenses,
}

/// An increment or decrement event on an account.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    PartialEq,
    Eq,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// An increment event.
    Inc,
    /// A decrement event.
    Dec,
}

impl Direction {
    /// Returns the signed unit value of the direction (`+1` or `-1`).
    #[must_use]
    pub fn value(&self) -> i64 {
        match self {
            Self::Inc => 1,
            Self::Dec => -1,
        }
    }
}
