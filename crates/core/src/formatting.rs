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

//! Number formatting utilities.

use std::fmt::Display;

fn separate_with(s: &str, sep: char) -> String {
    let (neg, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let (int_part, dec_part) = match digits.find('.') {
        Some(pos) => (&digits[..pos], Some(&digits[pos..])),
        None => (digits, None),
    };

    let mut result = String::with_capacity(s.len() + int_part.len() / 3);

    if neg {
        result.push('-');
    }

    let len = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(c);
    }

    if let Some(dec) = dec_part {
        result.push_str(dec);
    }

    result
}

/// Extension trait for formatting numbers with group separators.
///
/// Implemented for anything `Display`able whose rendering is a plain decimal
/// number (an optional sign, digits, an optional fractional part).
pub trait Separable {
    /// Formats the number with commas as thousand separators.
    fn separate_with_commas(&self) -> String;

    /// Formats the number with underscores as thousand separators.
    fn separate_with_underscores(&self) -> String;
}

impl<T: Display> Separable for T {
    fn separate_with_commas(&self) -> String {
        separate_with(&self.to_string(), ',')
    }

    fn separate_with_underscores(&self) -> String {
        separate_with(&self.to_string(), '_')
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;
    use rust_decimal::Decimal;

    use super::*;

    #[rstest]
    #[case("0", "0")]
    #[case("100", "100")]
    #[case("1000", "1_000")]
    #[case("123456", "123_456")]
    #[case("1234567", "1_234_567")]
    #[case("-1234567", "-1_234_567")]
    #[case("1000.25", "1_000.25")]
    #[case("-1000.2500", "-1_000.2500")]
    fn test_separate_with_underscores(#[case] input: &str, #[case] expected: &str) {
        let value = Decimal::from_str(input).unwrap();
        assert_eq!(value.separate_with_underscores(), expected);
    }

    #[rstest]
    fn test_separate_with_commas() {
        assert_eq!(1_234_567_i64.separate_with_commas(), "1,234,567");
        assert_eq!((-1_000_i64).separate_with_commas(), "-1,000");
    }
}
