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

//! Value types for the monetary domain model.
//!
//! This module provides the immutable value types the rest of the workspace
//! is built on: [`Currency`] and the two monetary representations [`Money`]
//! and [`Price`], both instantiations of the generic [`Monetary`] algebra.
//!
//! # Immutability
//!
//! All value types are **immutable**: once constructed, their values cannot
//! change. Every operation returns a new instance rather than modifying an
//! existing one, so values can be shared freely across threads.
//!
//! # Representations
//!
//! | Type    | Amount discipline                                    |
//! |---------|------------------------------------------------------|
//! | `Money` | Quantized to the currency's minor-unit fraction.     |
//! | `Price` | Undamaged precision; rounding bounded by 12 digits.  |
//!
//! Bridging between the two is explicit: `Money::to_price` is lossless,
//! `Price::to_money` quantizes.

pub mod currency;
pub mod monetary;
pub mod money;
pub mod price;
pub mod quantize;

// Re-exports
pub use currency::Currency;
pub use monetary::{Defined, Monetary, PrecisionPolicy};
pub use money::{CurrencyScale, Money};
pub use price::{MaxScale, Price};
pub use quantize::MAX_PRECISION;
