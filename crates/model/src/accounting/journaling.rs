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

//! Journal entries and postings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    accounting::accounts::Account,
    enums::{AccountType, Direction},
};

impl Direction {
    /// Returns the direction corresponding to the sign of `quantity`.
    ///
    /// # Panics
    ///
    /// Panics if `quantity` is zero.
    #[must_use]
    pub fn of(quantity: Decimal) -> Self {
        assert!(!quantity.is_zero(), "direction of a zero quantity is undefined");
        if quantity > Decimal::ZERO {
            Self::Inc
        } else {
            Self::Dec
        }
    }
}

/// The DEBIT/CREDIT convention per increment/decrement event and account
/// type.
fn is_debit(direction: Direction, account_type: AccountType) -> bool {
    match direction {
        Direction::Inc => matches!(
            account_type,
            AccountType::Assets | AccountType::Equities | AccountType::Liabilities
        ),
        Direction::Dec => {
            matches!(account_type, AccountType::Revenues | AccountType::Expenses)
        }
    }
}

/// A single posting of an absolute amount to an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// The account posted to.
    pub account: Account,
    /// The direction of the event.
    pub direction: Direction,
    /// The posted amount (absolute value).
    pub amount: Decimal,
}

impl Posting {
    /// Indicates if this posting is a debit.
    #[must_use]
    pub fn is_debit(&self) -> bool {
        is_debit(self.direction, self.account.account_type)
    }

    /// Indicates if this posting is a credit.
    #[must_use]
    pub fn is_credit(&self) -> bool {
        !self.is_debit()
    }

    /// Returns the amount signed by the direction.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.amount * Decimal::from(self.direction.value())
    }
}

/// A journal entry: a dated, described set of postings originating from a
/// business object of type `T`.
#[derive(Clone, Debug)]
pub struct JournalEntry<T> {
    /// A unique, ephemeral identifier for the entry.
    pub id: Uuid,
    /// The date of the entry.
    pub date: NaiveDate,
    /// A description of the entry.
    pub description: String,
    /// The business object the entry originates from.
    pub source: T,
    /// The postings of the entry.
    pub postings: Vec<Posting>,
}

impl<T> JournalEntry<T> {
    /// Creates a new [`JournalEntry`] instance with no postings.
    #[must_use]
    pub fn new(date: NaiveDate, description: impl Into<String>, source: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            description: description.into(),
            source,
            postings: Vec::new(),
        }
    }

    /// Posts an increment or decrement event (per the sign of `quantity`)
    /// to `account`. A zero quantity posts nothing.
    pub fn post(&mut self, account: Account, quantity: Decimal) -> &mut Self {
        if !quantity.is_zero() {
            self.postings.push(Posting {
                account,
                direction: Direction::of(quantity),
                amount: quantity.abs(),
            });
        }
        self
    }

    /// Returns the increment postings of the entry.
    pub fn increments(&self) -> impl Iterator<Item = &Posting> {
        self.postings
            .iter()
            .filter(|posting| posting.direction == Direction::Inc)
    }

    /// Returns the decrement postings of the entry.
    pub fn decrements(&self) -> impl Iterator<Item = &Posting> {
        self.postings
            .iter()
            .filter(|posting| posting.direction == Direction::Dec)
    }

    /// Checks the entry for consistency: increment amounts must balance
    /// decrement amounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry is unbalanced.
    pub fn validate(&self) -> anyhow::Result<()> {
        let incremented: Decimal = self.increments().map(|posting| posting.amount).sum();
        let decremented: Decimal = self.decrements().map(|posting| posting.amount).sum();
        if incremented != decremented {
            anyhow::bail!(
                "journal entry {} is unbalanced: increments {incremented} vs decrements {decremented}",
                self.id
            )
        }
        Ok(())
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

    fn cash() -> Account {
        Account::new("1001", "Cash", AccountType::Assets)
    }

    fn revenue() -> Account {
        Account::new("4001", "Sales", AccountType::Revenues)
    }

    #[rstest]
    fn test_direction_of_sign() {
        assert_eq!(Direction::of(dec!(1)), Direction::Inc);
        assert_eq!(Direction::of(dec!(-0.5)), Direction::Dec);
    }

    #[rstest]
    #[should_panic(expected = "direction of a zero quantity is undefined")]
    fn test_direction_of_zero_panics() {
        let _ = Direction::of(dec!(0));
    }

    #[rstest]
    fn test_debit_credit_convention() {
        let asset_inc = Posting {
            account: cash(),
            direction: Direction::Inc,
            amount: dec!(100),
        };
        assert!(asset_inc.is_debit());
        assert!(!asset_inc.is_credit());

        let revenue_inc = Posting {
            account: revenue(),
            direction: Direction::Inc,
            amount: dec!(100),
        };
        assert!(revenue_inc.is_credit());

        let revenue_dec = Posting {
            account: revenue(),
            direction: Direction::Dec,
            amount: dec!(100),
        };
        assert!(revenue_dec.is_debit());
    }

    #[rstest]
    fn test_signed_amount() {
        let posting = Posting {
            account: cash(),
            direction: Direction::Dec,
            amount: dec!(25),
        };
        assert_eq!(posting.signed_amount(), dec!(-25));
    }

    #[rstest]
    fn test_post_skips_zero_and_stores_absolute_amounts() {
        let mut entry = JournalEntry::new(date(2019, 1, 1), "Sale", ());
        entry
            .post(cash(), dec!(100))
            .post(revenue(), dec!(-100))
            .post(cash(), dec!(0));

        assert_eq!(entry.postings.len(), 2);
        assert_eq!(entry.postings[0].direction, Direction::Inc);
        assert_eq!(entry.postings[0].amount, dec!(100));
        assert_eq!(entry.postings[1].direction, Direction::Dec);
        assert_eq!(entry.postings[1].amount, dec!(100));

        assert_eq!(entry.increments().count(), 1);
        assert_eq!(entry.decrements().count(), 1);
    }

    #[rstest]
    fn test_validate_balanced() {
        let mut entry = JournalEntry::new(date(2019, 1, 1), "Sale", ());
        entry.post(cash(), dec!(100)).post(revenue(), dec!(-100));
        assert!(entry.validate().is_ok());
    }

    #[rstest]
    fn test_validate_unbalanced() {
        let mut entry = JournalEntry::new(date(2019, 1, 1), "Oops", ());
        entry.post(cash(), dec!(100)).post(revenue(), dec!(-90));
        assert!(entry.validate().is_err());
    }
}
