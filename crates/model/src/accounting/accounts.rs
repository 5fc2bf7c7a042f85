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

//! Accounts and the chart of accounts.

use std::fmt::Display;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::enums::AccountType;

/// An account identified by a unique code within a chart of accounts.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The unique account code.
    pub code: Ustr,
    /// The account display name.
    pub name: Ustr,
    /// The type of the account.
    pub account_type: AccountType,
}

impl Account {
    /// Creates a new [`Account`] instance.
    #[must_use]
    pub fn new<T: AsRef<str>>(code: T, name: T, account_type: AccountType) -> Self {
        Self {
            code: Ustr::from(code.as_ref()),
            name: Ustr::from(name.as_ref()),
            account_type,
        }
    }
}

impl Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.name)
    }
}

#[derive(Clone, Copy, Debug)]
struct Node {
    account: Account,
    parent: Option<Ustr>,
}

/// A chart of accounts: a tree of accounts under five core roots.
///
/// A new chart is seeded with one root account per [`AccountType`], coded
/// `1` through `5`. Accounts added below a root inherit its type.
#[derive(Clone, Debug)]
pub struct ChartOfAccounts {
    nodes: IndexMap<Ustr, Node>,
}

impl ChartOfAccounts {
    /// Creates a new [`ChartOfAccounts`] instance with the five core roots.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = IndexMap::new();
        for (code, name, account_type) in [
            ("1", "Assets", AccountType::Assets),
            ("2", "Liabilities", AccountType::Liabilities),
            ("3", "Equities", AccountType::Equities),
            ("4", "Revenues", AccountType::Revenues),
            ("5", "Expenses", AccountType::Expenses),
        ] {
            let account = Account::new(code, name, account_type);
            nodes.insert(account.code, Node { account, parent: None });
        }
        Self { nodes }
    }

    /// Adds a new account under `parent`, inheriting the parent's type.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` is unknown or `code` is already taken.
    pub fn add(&mut self, parent: &str, code: &str, name: &str) -> anyhow::Result<Account> {
        let parent_code = Ustr::from(parent);
        let Some(parent_node) = self.nodes.get(&parent_code) else {
            anyhow::bail!("parent account '{parent}' does not exist")
        };
        let account = Account::new(code, name, parent_node.account.account_type);
        if self.nodes.contains_key(&account.code) {
            anyhow::bail!("account code '{code}' is already taken")
        }
        self.nodes.insert(
            account.code,
            Node {
                account,
                parent: Some(parent_code),
            },
        );
        Ok(account)
    }

    /// Returns the account identified by `code`, if any.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Account> {
        self.nodes.get(&Ustr::from(code)).map(|node| &node.account)
    }

    /// Returns the parent of the account identified by `code`, if any.
    #[must_use]
    pub fn parent_of(&self, code: &str) -> Option<&Account> {
        let node = self.nodes.get(&Ustr::from(code))?;
        let parent = node.parent?;
        self.find(parent.as_str())
    }

    /// Returns the direct children of the account identified by `code`.
    pub fn children_of(&self, code: &str) -> impl Iterator<Item = &Account> {
        let parent = Ustr::from(code);
        self.nodes
            .values()
            .filter(move |node| node.parent == Some(parent))
            .map(|node| &node.account)
    }

    /// Returns an iterator over all accounts in insertion order (roots
    /// first).
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.nodes.values().map(|node| &node.account)
    }

    /// Returns the number of accounts in the chart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the chart holds no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for ChartOfAccounts {
    fn default() -> Self {
        Self::new()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_new_seeds_core_roots() {
        let coa = ChartOfAccounts::new();
        assert_eq!(coa.len(), 5);

        let names: Vec<&str> = coa.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Assets", "Liabilities", "Equities", "Revenues", "Expenses"]
        );

        assert_eq!(coa.find("1").unwrap().account_type, AccountType::Assets);
        assert_eq!(coa.find("5").unwrap().account_type, AccountType::Expenses);
        assert!(coa.find("boguscode").is_none());
    }

    #[rstest]
    fn test_add_inherits_type_and_links_parent() {
        let mut coa = ChartOfAccounts::new();
        let liquidity = coa.add("1", "1000", "Liquidity").unwrap();
        let bank = coa.add("1000", "1001", "Bank Account").unwrap();

        assert_eq!(liquidity.account_type, AccountType::Assets);
        assert_eq!(bank.account_type, AccountType::Assets);
        assert_eq!(coa.parent_of("1001").unwrap().name.as_str(), "Liquidity");
        assert_eq!(coa.parent_of("1000").unwrap().code.as_str(), "1");
        assert!(coa.parent_of("1").is_none());

        let children: Vec<&str> = coa.children_of("1").map(|a| a.code.as_str()).collect();
        assert_eq!(children, vec!["1000"]);
    }

    #[rstest]
    fn test_add_rejects_unknown_parent() {
        let mut coa = ChartOfAccounts::new();
        assert!(coa.add("9", "9000", "Nowhere").is_err());
    }

    #[rstest]
    fn test_add_rejects_duplicate_code() {
        let mut coa = ChartOfAccounts::new();
        coa.add("1", "1000", "Liquidity").unwrap();
        assert!(coa.add("1", "1000", "Liquidity Again").is_err());
    }

    #[rstest]
    fn test_account_display() {
        let account = Account::new("1000", "Liquidity", AccountType::Assets);
        assert_eq!(account.to_string(), "[1000] Liquidity");
    }
}
