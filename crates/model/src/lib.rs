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

//! A monetary-value algebra with currencies, value dates and an explicit
//! undefined state.
//!
//! The crate is organized around a small set of immutable value types:
//!
//! - [`types::Currency`]: immutable currency metadata with a derived
//!   quantization rule, looked up from the [`currencies::CURRENCIES`]
//!   catalog.
//! - [`types::Money`] and [`types::Price`]: the two instantiations of the
//!   generic [`types::Monetary`] algebra, distinguishing "no monetary value"
//!   from "zero monetary value" without nullable references or exceptions
//!   for ordinary absence.
//! - [`exchange::FxRate`] and the injected [`exchange::FxRateService`]:
//!   the foreign exchange boundary consumed by currency conversion.
//!
//! On top of the core sit the [`dcc`] day-count conventions (interest
//! accrual) and the [`accounting`] bookkeeping layer (journals and
//! ledgers).
//!
//! The algebra itself never logs, prints or performs I/O; the only
//! I/O-shaped boundary is the injected rate-lookup service.

pub mod accounting;
pub mod currencies;
pub mod dcc;
pub mod enums;
pub mod errors;
pub mod exchange;
pub mod types;

// Re-exports
pub use currencies::{CURRENCIES, CurrencyRegistry, CurrencyRegistryBuilder};
pub use enums::CurrencyType;
pub use errors::{CurrencyLookupError, FxRateLookupError, MonetaryError};
pub use exchange::{FxRate, FxRateService};
pub use types::{Currency, Defined, Monetary, Money, Price};
