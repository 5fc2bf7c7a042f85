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

//! General ledgers with running balances.

use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounting::{accounts::Account, journaling::{JournalEntry, Posting}};

/// An inclusive accounting period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The first date of the period.
    pub since: NaiveDate,
    /// The last date of the period.
    pub until: NaiveDate,
}

impl DateRange {
    /// Creates a new [`DateRange`] instance.
    #[must_use]
    pub fn new(since: NaiveDate, until: NaiveDate) -> Self {
        Self { since, until }
    }

    /// Indicates if `date` falls within the period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.since <= date && date <= self.until
    }
}

/// A dated account balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// The date of the balance.
    pub date: NaiveDate,
    /// The balance value.
    pub value: Decimal,
}

/// Opening balances for terminal accounts.
pub type InitialBalances = IndexMap<Account, Balance>;

/// A single line of an account ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The date of the underlying journal entry.
    pub date: NaiveDate,
    /// The description of the underlying journal entry.
    pub description: String,
    /// The posting the line is based on.
    pub posting: Posting,
    /// The running balance after this line.
    pub balance: Decimal,
    /// The counter-accounts of the posting within its journal entry.
    pub counterparts: Vec<Account>,
}

impl LedgerEntry {
    /// Returns the debit amount, if the line is a debit.
    #[must_use]
    pub fn debit(&self) -> Option<Decimal> {
        self.posting.is_debit().then_some(self.posting.amount)
    }

    /// Returns the credit amount, if the line is a credit.
    #[must_use]
    pub fn credit(&self) -> Option<Decimal> {
        self.posting.is_credit().then_some(self.posting.amount)
    }
}

/// An account ledger: an opening balance and a run of entries.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ledger {
    /// The account of the ledger.
    pub account: Account,
    /// The opening balance of the ledger.
    pub initial: Balance,
    /// The ledger entries in posting order.
    pub entries: Vec<LedgerEntry>,
}

impl Ledger {
    /// Creates a new empty [`Ledger`] instance.
    #[must_use]
    pub fn new(account: Account, initial: Balance) -> Self {
        Self {
            account,
            initial,
            entries: Vec::new(),
        }
    }

    /// Returns the balance after the last entry, or the opening balance if
    /// the ledger is empty.
    #[must_use]
    pub fn last_balance(&self) -> Decimal {
        self.entries
            .last()
            .map_or(self.initial.value, |entry| entry.balance)
    }

    /// Adds a new entry for `posting`, carrying the running balance
    /// forward.
    pub fn post(
        &mut self,
        date: NaiveDate,
        description: &str,
        posting: Posting,
        counterparts: Vec<Account>,
    ) -> &LedgerEntry {
        let balance = self.last_balance() + posting.signed_amount();
        self.entries.push(LedgerEntry {
            date,
            description: description.to_string(),
            posting,
            balance,
            counterparts,
        });
        self.entries.last().expect("entry was just pushed")
    }
}

/// A general ledger: one account ledger per touched account over a period.
#[derive(Clone, Debug)]
pub struct GeneralLedger {
    /// The accounting period.
    pub period: DateRange,
    /// The individual account ledgers.
    pub ledgers: IndexMap<Account, Ledger>,
}

/// Builds a general ledger from journal entries falling within `period`.
///
/// Accounts without an opening balance in `initial` open at zero as of the
/// period start.
pub fn build_general_ledger<T>(
    period: DateRange,
    journal: &[JournalEntry<T>],
    initial: &InitialBalances,
) -> GeneralLedger {
    let mut ledgers: IndexMap<Account, Ledger> = initial
        .iter()
        .map(|(account, balance)| (*account, Ledger::new(*account, *balance)))
        .collect();

    for entry in journal.iter().filter(|entry| period.contains(entry.date)) {
        for posting in &entry.postings {
            let counterparts = entry
                .postings
                .iter()
                .filter(|other| other.direction != posting.direction)
                .map(|other| other.account)
                .collect();
            ledgers
                .entry(posting.account)
                .or_insert_with(|| {
                    Ledger::new(
                        posting.account,
                        Balance {
                            date: period.since,
                            value: Decimal::ZERO,
                        },
                    )
                })
                .post(entry.date, &entry.description, *posting, counterparts);
        }
    }

    log::debug!("built general ledger with {} account ledgers", ledgers.len());
    GeneralLedger { period, ledgers }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::enums::AccountType;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn cash() -> Account {
        Account::new("1001", "Cash", AccountType::Assets)
    }

    fn revenue() -> Account {
        Account::new("4001", "Sales", AccountType::Revenues)
    }

    fn sale(day: u32, amount: Decimal) -> JournalEntry<()> {
        let mut entry = JournalEntry::new(date(2019, 1, day), "Sale", ());
        entry.post(cash(), amount).post(revenue(), -amount);
        entry
    }

    #[rstest]
    fn test_date_range_contains() {
        let period = DateRange::new(date(2019, 1, 1), date(2019, 12, 31));
        assert!(period.contains(date(2019, 1, 1)));
        assert!(period.contains(date(2019, 12, 31)));
        assert!(!period.contains(date(2020, 1, 1)));
    }

    #[rstest]
    fn test_ledger_running_balance() {
        let mut ledger = Ledger::new(
            cash(),
            Balance {
                date: date(2019, 1, 1),
                value: dec!(50),
            },
        );
        assert_eq!(ledger.last_balance(), dec!(50));

        let posting = Posting {
            account: cash(),
            direction: crate::enums::Direction::Inc,
            amount: dec!(100),
        };
        let entry = ledger.post(date(2019, 1, 2), "Sale", posting, vec![revenue()]);
        assert_eq!(entry.balance, dec!(150));
        assert_eq!(entry.debit(), Some(dec!(100)));
        assert_eq!(entry.credit(), None);
        assert_eq!(ledger.last_balance(), dec!(150));
    }

    #[rstest]
    fn test_build_general_ledger() {
        let period = DateRange::new(date(2019, 1, 1), date(2019, 1, 31));
        let journal = vec![sale(2, dec!(100)), sale(3, dec!(50))];
        let mut initial = InitialBalances::default();
        initial.insert(
            cash(),
            Balance {
                date: date(2019, 1, 1),
                value: dec!(10),
            },
        );

        let general = build_general_ledger(period, &journal, &initial);
        assert_eq!(general.ledgers.len(), 2);

        let cash_ledger = &general.ledgers[&cash()];
        assert_eq!(cash_ledger.entries.len(), 2);
        assert_eq!(cash_ledger.entries[0].balance, dec!(110));
        assert_eq!(cash_ledger.entries[1].balance, dec!(160));
        assert_eq!(cash_ledger.entries[0].counterparts, vec![revenue()]);

        // Revenue account was not in the opening balances, so it opens at zero.
        let revenue_ledger = &general.ledgers[&revenue()];
        assert_eq!(revenue_ledger.initial.value, dec!(0));
        assert_eq!(revenue_ledger.entries[0].balance, dec!(-100));
        assert_eq!(revenue_ledger.entries[1].balance, dec!(-150));
    }

    #[rstest]
    fn test_build_general_ledger_filters_period() {
        let period = DateRange::new(date(2019, 1, 1), date(2019, 1, 2));
        let journal = vec![sale(2, dec!(100)), sale(15, dec!(50))];
        let general = build_general_ledger(period, &journal, &InitialBalances::default());

        let cash_ledger = &general.ledgers[&cash()];
        assert_eq!(cash_ledger.entries.len(), 1);
        assert_eq!(cash_ledger.last_balance(), dec!(100));
    }
}
