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

//! Double-entry bookkeeping over the monetary core.
//!
//! Plain bookkeeping glue: accounts and the chart of accounts, journal
//! entries with balanced postings, and general ledgers with running
//! balances. Amounts here are raw decimal quantities; currency discipline
//! is the concern of the value types in [`crate::types`].

pub mod accounts;
pub mod journaling;
pub mod ledger;

// Re-exports
pub use accounts::{Account, ChartOfAccounts};
pub use journaling::{JournalEntry, Posting};
pub use ledger::{
    Balance, DateRange, GeneralLedger, InitialBalances, Ledger, LedgerEntry,
    build_general_ledger,
};
