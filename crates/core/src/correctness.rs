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

//! Defensive correctness checks for value-type construction.
//!
//! Constructors come in pairs: `new_checked` returns the error from one of
//! these checks, while `new` unwraps it with the shared [`FAILED`] message.

use rust_decimal::Decimal;

/// Standard message appended when a correctness check is expected to hold.
pub const FAILED: &str = "Condition failed";

/// Checks that `predicate` is true.
///
/// # Errors
///
/// Returns an error with `fail_msg` if `predicate` is false.
#[inline(always)]
pub fn check_predicate_true(predicate: bool, fail_msg: &str) -> anyhow::Result<()> {
    if !predicate {
        anyhow::bail!("{fail_msg}")
    }
    Ok(())
}

/// Checks that `value` is a valid display string: non-empty and free of
/// leading or trailing whitespace.
///
/// # Errors
///
/// Returns an error if `value` is empty or padded with whitespace.
pub fn check_valid_string(value: &str, param: &str) -> anyhow::Result<()> {
    if value.is_empty() {
        anyhow::bail!("invalid string for '{param}', was empty")
    }
    if value != value.trim() {
        anyhow::bail!("invalid string for '{param}', had leading or trailing whitespace: '{value}'")
    }
    Ok(())
}

/// Checks that `value` consists solely of uppercase ASCII letters.
///
/// # Errors
///
/// Returns an error if `value` is empty or contains any other character.
pub fn check_ascii_uppercase(value: &str, param: &str) -> anyhow::Result<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_uppercase()) {
        anyhow::bail!("invalid string for '{param}', must be uppercase alphabetic: '{value}'")
    }
    Ok(())
}

/// Checks that `value` is nonzero.
///
/// # Errors
///
/// Returns an error if `value` is zero.
#[inline(always)]
pub fn check_nonzero_decimal(value: Decimal, param: &str) -> anyhow::Result<()> {
    if value.is_zero() {
        anyhow::bail!("invalid `Decimal` for '{param}', was zero")
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal::Decimal;

    use super::*;

    #[rstest]
    fn test_check_predicate_true() {
        assert!(check_predicate_true(true, "should not fail").is_ok());
        let err = check_predicate_true(false, "it failed").unwrap_err();
        assert_eq!(err.to_string(), "it failed");
    }

    #[rstest]
    #[case("USD", true)]
    #[case("US Dollar", true)]
    #[case("", false)]
    #[case(" padded", false)]
    #[case("padded ", false)]
    fn test_check_valid_string(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(check_valid_string(value, "value").is_ok(), ok);
    }

    #[rstest]
    #[case("USD", true)]
    #[case("XAU", true)]
    #[case("", false)]
    #[case("usd", false)]
    #[case("US1", false)]
    #[case("U D", false)]
    fn test_check_ascii_uppercase(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(check_ascii_uppercase(value, "code").is_ok(), ok);
    }

    #[rstest]
    fn test_check_nonzero_decimal() {
        assert!(check_nonzero_decimal(Decimal::ONE, "rate").is_ok());
        assert!(check_nonzero_decimal(Decimal::ZERO, "rate").is_err());
    }
}
