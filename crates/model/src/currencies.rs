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

//! The currency catalog: a build-then-freeze registry plus the builtin table.
//!
//! A registry is populated in a controlled phase through
//! [`CurrencyRegistryBuilder`] and is read-only once built, so it can be
//! shared across any number of concurrent readers without synchronization.
//! The process-wide [`CURRENCIES`] instance carries ISO 4217 legal tender
//! extended with precious metals and crypto assets.

use std::sync::LazyLock;

use indexmap::IndexMap;
use moneta_core::correctness::FAILED;
use ustr::Ustr;

use crate::{enums::CurrencyType, errors::CurrencyLookupError, types::Currency};

/// A read-only catalog of currencies keyed by code.
#[derive(Clone, Debug, Default)]
pub struct CurrencyRegistry {
    registry: IndexMap<Ustr, Currency>,
}

impl CurrencyRegistry {
    /// Returns the currency identified by `code`.
    ///
    /// # Errors
    ///
    /// Returns a [`CurrencyLookupError`] if `code` is not registered.
    pub fn lookup(&self, code: &str) -> Result<Currency, CurrencyLookupError> {
        self.get(code).ok_or_else(|| CurrencyLookupError {
            code: code.to_string(),
        })
    }

    /// Returns the currency identified by `code`, or `None` if absent.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<Currency> {
        self.registry.get(&Ustr::from(code)).copied()
    }

    /// Returns `true` if `code` identifies a registered currency.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.registry.contains_key(&Ustr::from(code))
    }

    /// Returns an iterator over all registered currencies in code order.
    pub fn all(&self) -> impl Iterator<Item = Currency> + '_ {
        self.registry.values().copied()
    }

    /// Returns an iterator over all registered codes in order.
    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.registry.keys().map(|code| code.as_str())
    }

    /// Returns the number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns `true` if the registry holds no currencies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

/// Populates a [`CurrencyRegistry`].
///
/// Registration is only possible before [`build`](Self::build) consumes the
/// builder; the resulting registry can never be mutated again.
#[derive(Debug, Default)]
pub struct CurrencyRegistryBuilder {
    registry: IndexMap<Ustr, Currency>,
}

impl CurrencyRegistryBuilder {
    /// Creates a new empty [`CurrencyRegistryBuilder`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `currency` under its code.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is already registered.
    pub fn register(&mut self, currency: Currency) -> anyhow::Result<()> {
        if self.registry.contains_key(&currency.code) {
            anyhow::bail!("currency {} is already registered", currency.code)
        }
        self.registry.insert(currency.code, currency);
        Ok(())
    }

    /// Closes the population phase, returning the frozen registry with
    /// entries sorted by code.
    #[must_use]
    pub fn build(mut self) -> CurrencyRegistry {
        self.registry
            .sort_by(|code1, _, code2, _| code1.as_str().cmp(code2.as_str()));
        log::debug!("built currency registry with {} entries", self.registry.len());
        CurrencyRegistry {
            registry: self.registry,
        }
    }
}

/// The process-wide currency catalog.
pub static CURRENCIES: LazyLock<CurrencyRegistry> = LazyLock::new(builtin);

fn builtin() -> CurrencyRegistry {
    use CurrencyType::{Crypto, Metal, Money};

    let mut builder = CurrencyRegistryBuilder::new();
    {
        let mut register = |code: &str, name: &str, precision: i8, currency_type: CurrencyType| {
            builder
                .register(Currency::new(code, name, precision, currency_type))
                .expect(FAILED);
        };

        register("AED", "UAE Dirham", 2, Money);
        register("AFN", "Afghani", 2, Money);
        register("ALL", "Lek", 2, Money);
        register("AMD", "Armenian Dram", 2, Money);
        register("ANG", "Netherlands Antillean Guilder", 2, Money);
        register("AOA", "Kwanza", 2, Money);
        register("ARS", "Argentine Peso", 2, Money);
        register("AUD", "Australian Dollar", 2, Money);
        register("AWG", "Aruban Florin", 2, Money);
        register("AZN", "Azerbaijanian Manat", 2, Money);
        register("BAM", "Convertible Mark", 2, Money);
        register("BBD", "Barbados Dollar", 2, Money);
        register("BCH", "Bitcoin Cash", -1, Crypto);
        register("BDT", "Taka", 2, Money);
        register("BGN", "Bulgarian Lev", 2, Money);
        register("BHD", "Bahraini Dinar", 3, Money);
        register("BIF", "Burundi Franc", 0, Money);
        register("BMD", "Bermudian Dollar", 2, Money);
        register("BND", "Brunei Dollar", 2, Money);
        register("BOB", "Boliviano", 2, Money);
        register("BOV", "Mvdol", 2, Money);
        register("BRL", "Brazilian Real", 2, Money);
        register("BSD", "Bahamian Dollar", 2, Money);
        register("BTC", "Bitcoin", -1, Crypto);
        register("BTN", "Ngultrum", 2, Money);
        register("BWP", "Pula", 2, Money);
        register("BYR", "Belarussian Ruble", 0, Money);
        register("BZD", "Belize Dollar", 2, Money);
        register("CAD", "Canadian Dollar", 2, Money);
        register("CDF", "Congolese Franc", 2, Money);
        register("CHE", "WIR Euro", 2, Money);
        register("CHF", "Swiss Franc", 2, Money);
        register("CHW", "WIR Franc", 2, Money);
        register("CLF", "Unidad de Fomento", 4, Money);
        register("CLP", "Chilean Peso", 0, Money);
        register("CNH", "Yuan Renminbi (Off-shore)", 2, Money);
        register("CNY", "Yuan Renminbi", 2, Money);
        register("COP", "Colombian Peso", 2, Money);
        register("COU", "Unidad de Valor Real", 2, Money);
        register("CRC", "Costa Rican Colon", 2, Money);
        register("CUC", "Peso Convertible", 2, Money);
        register("CUP", "Cuban Peso", 2, Money);
        register("CVE", "Cabo Verde Escudo", 2, Money);
        register("CZK", "Czech Koruna", 2, Money);
        register("DASH", "Dash", -1, Crypto);
        register("DJF", "Djibouti Franc", 0, Money);
        register("DKK", "Danish Krone", 2, Money);
        register("DOP", "Dominican Peso", 2, Money);
        register("DZD", "Algerian Dinar", 2, Money);
        register("EGP", "Egyptian Pound", 2, Money);
        register("EOS", "EOSIO", -1, Crypto);
        register("ERN", "Nakfa", 2, Money);
        register("ETB", "Ethiopian Birr", 2, Money);
        register("ETC", "Ethereum Classic", -1, Crypto);
        register("ETH", "Ethereum", -1, Crypto);
        register("EUR", "Euro", 2, Money);
        register("FJD", "Fiji Dollar", 2, Money);
        register("FKP", "Falkland Islands Pound", 2, Money);
        register("GBP", "Pound Sterling", 2, Money);
        register("GEL", "Lari", 2, Money);
        register("GHS", "Ghana Cedi", 2, Money);
        register("GIP", "Gibraltar Pound", 2, Money);
        register("GMD", "Dalasi", 2, Money);
        register("GNF", "Guinea Franc", 0, Money);
        register("GTQ", "Quetzal", 2, Money);
        register("GYD", "Guyana Dollar", 2, Money);
        register("HKD", "Hong Kong Dollar", 2, Money);
        register("HNL", "Lempira", 2, Money);
        register("HRK", "Kuna", 2, Money);
        register("HTG", "Gourde", 2, Money);
        register("HUF", "Forint", 2, Money);
        register("IDR", "Rupiah", 2, Money);
        register("ILS", "New Israeli Sheqel", 2, Money);
        register("INR", "Indian Rupee", 2, Money);
        register("IOT", "IOTA", -1, Crypto);
        register("IQD", "Iraqi Dinar", 3, Money);
        register("IRR", "Iranian Rial", 2, Money);
        register("ISK", "Iceland Krona", 0, Money);
        register("JMD", "Jamaican Dollar", 2, Money);
        register("JOD", "Jordanian Dinar", 3, Money);
        register("JPY", "Yen", 0, Money);
        register("KES", "Kenyan Shilling", 2, Money);
        register("KGS", "Som", 2, Money);
        register("KHR", "Riel", 2, Money);
        register("KMF", "Comoro Franc", 0, Money);
        register("KPW", "North Korean Won", 2, Money);
        register("KRW", "Won", 0, Money);
        register("KWD", "Kuwaiti Dinar", 3, Money);
        register("KYD", "Cayman Islands Dollar", 2, Money);
        register("KZT", "Tenge", 2, Money);
        register("LAK", "Kip", 2, Money);
        register("LBP", "Lebanese Pound", 2, Money);
        register("LKR", "Sri Lanka Rupee", 2, Money);
        register("LRD", "Liberian Dollar", 2, Money);
        register("LSL", "Loti", 2, Money);
        register("LTC", "Litecoin", -1, Crypto);
        register("LYD", "Libyan Dinar", 3, Money);
        register("MAD", "Moroccan Dirham", 2, Money);
        register("MDL", "Moldovan Leu", 2, Money);
        register("MGA", "Malagasy Ariary", 2, Money);
        register("MKD", "Denar", 2, Money);
        register("MMK", "Kyat", 2, Money);
        register("MNT", "Tugrik", 2, Money);
        register("MOP", "Pataca", 2, Money);
        register("MRO", "Ouguiya", 2, Money);
        register("MUR", "Mauritius Rupee", 2, Money);
        register("MVR", "Rufiyaa", 2, Money);
        register("MWK", "Kwacha", 2, Money);
        register("MXN", "Mexican Peso", 2, Money);
        register("MXV", "Mexican Unidad de Inversion (UDI)", 2, Money);
        register("MYR", "Malaysian Ringgit", 2, Money);
        register("MZN", "Mozambique Metical", 2, Money);
        register("NAD", "Namibia Dollar", 2, Money);
        register("NEO", "NEO", -1, Crypto);
        register("NGN", "Naira", 2, Money);
        register("NIO", "Cordoba Oro", 2, Money);
        register("NOK", "Norwegian Krone", 2, Money);
        register("NPR", "Nepalese Rupee", 2, Money);
        register("NZD", "New Zealand Dollar", 2, Money);
        register("OMG", "OmiseGO", -1, Crypto);
        register("OMR", "Rial Omani", 3, Money);
        register("PAB", "Balboa", 2, Money);
        register("PEN", "Nuevo Sol", 2, Money);
        register("PGK", "Kina", 2, Money);
        register("PHP", "Philippine Peso", 2, Money);
        register("PKR", "Pakistan Rupee", 2, Money);
        register("PLN", "Zloty", 2, Money);
        register("PYG", "Guarani", 0, Money);
        register("QAR", "Qatari Rial", 2, Money);
        register("RON", "Romanian Leu", 2, Money);
        register("RSD", "Serbian Dinar", 2, Money);
        register("RUB", "Russian Ruble", 2, Money);
        register("RWF", "Rwanda Franc", 0, Money);
        register("SAR", "Saudi Riyal", 2, Money);
        register("SBD", "Solomon Islands Dollar", 2, Money);
        register("SCR", "Seychelles Rupee", 2, Money);
        register("SDG", "Sudanese Pound", 2, Money);
        register("SEK", "Swedish Krona", 2, Money);
        register("SGD", "Singapore Dollar", 2, Money);
        register("SHP", "Saint Helena Pound", 2, Money);
        register("SLL", "Leone", 2, Money);
        register("SOS", "Somali Shilling", 2, Money);
        register("SRD", "Surinam Dollar", 2, Money);
        register("SSP", "South Sudanese Pound", 2, Money);
        register("STD", "Dobra", 2, Money);
        register("SVC", "El Salvador Colon", 2, Money);
        register("SYP", "Syrian Pound", 2, Money);
        register("SZL", "Lilangeni", 2, Money);
        register("THB", "Baht", 2, Money);
        register("TJS", "Somoni", 2, Money);
        register("TMT", "Turkmenistan New Manat", 2, Money);
        register("TND", "Tunisian Dinar", 3, Money);
        register("TOP", "Pa'anga", 2, Money);
        register("TRY", "Turkish Lira", 2, Money);
        register("TTD", "Trinidad and Tobago Dollar", 2, Money);
        register("TWD", "New Taiwan Dollar", 2, Money);
        register("TZS", "Tanzanian Shilling", 2, Money);
        register("UAH", "Hryvnia", 2, Money);
        register("UGX", "Uganda Shilling", 0, Money);
        register("USD", "US Dollar", 2, Money);
        register("USN", "US Dollar (Next day)", 2, Money);
        register("UYI", "Uruguay Peso en Unidades Indexadas", 0, Money);
        register("UYU", "Peso Uruguayo", 2, Money);
        register("UZS", "Uzbekistan Sum", 2, Money);
        register("VEF", "Bolivar", 2, Money);
        register("VND", "Dong", 0, Money);
        register("VUV", "Vatu", 0, Money);
        register("WST", "Tala", 2, Money);
        register("XAG", "Silver", -1, Metal);
        register("XAU", "Gold", -1, Metal);
        register("XCD", "East Caribbean Dollar", 2, Money);
        register("XLM", "Stellar", -1, Crypto);
        register("XMR", "Monero", -1, Crypto);
        register("XPD", "Palladium", -1, Metal);
        register("XPT", "Platinum", -1, Metal);
        register("XRP", "Ripple", -1, Crypto);
        register("XSU", "Sucre", -1, Money);
        register("XUA", "ADB Unit of Account", -1, Money);
        register("YER", "Yemeni Rial", 2, Money);
        register("ZAR", "Rand", 2, Money);
        register("ZEC", "Zcash", -1, Crypto);
        register("ZMW", "Zambian Kwacha", 2, Money);
        register("ZWL", "Zimbabwe Dollar", 2, Money);
    }
    builder.build()
}

macro_rules! builtin_accessor {
    ($($code:ident),* $(,)?) => {
        #[allow(non_snake_case)]
        impl Currency {
            $(
                #[doc = concat!("Returns the builtin `", stringify!($code), "` currency.")]
                #[must_use]
                pub fn $code() -> Self {
                    CURRENCIES.lookup(stringify!($code)).expect(FAILED)
                }
            )*
        }
    };
}

builtin_accessor!(
    AUD, BTC, CAD, CHF, DKK, ETH, EUR, GBP, JPY, NOK, NZD, SEK, TRY, USD, XAG, XAU,
);

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_builtin_lookup() {
        assert!(CURRENCIES.contains("USD"));
        assert!(!CURRENCIES.contains("ZZZ"));

        let usd = CURRENCIES.lookup("USD").unwrap();
        assert_eq!(usd.code.as_str(), "USD");
        assert_eq!(usd.name.as_str(), "US Dollar");
        assert_eq!(usd.precision, 2);
        assert_eq!(usd.currency_type, CurrencyType::Money);
    }

    #[rstest]
    fn test_builtin_lookup_unknown_code() {
        let err = CURRENCIES.lookup("ZZZ").unwrap_err();
        assert_eq!(err.code, "ZZZ");
    }

    #[rstest]
    fn test_builtin_sorted_by_code() {
        let codes: Vec<&str> = CURRENCIES.codes().collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
        assert_eq!(codes.len(), CURRENCIES.len());
    }

    #[rstest]
    fn test_builtin_precisions() {
        assert_eq!(CURRENCIES.lookup("JPY").unwrap().precision, 0);
        assert_eq!(CURRENCIES.lookup("BHD").unwrap().precision, 3);
        assert_eq!(CURRENCIES.lookup("CLF").unwrap().precision, 4);
        assert_eq!(CURRENCIES.lookup("BTC").unwrap().precision, -1);
        assert_eq!(CURRENCIES.lookup("XAU").unwrap().precision, -1);
    }

    #[rstest]
    fn test_accessors_match_registry() {
        assert_eq!(Currency::USD(), CURRENCIES.lookup("USD").unwrap());
        assert_eq!(Currency::XAU(), CURRENCIES.lookup("XAU").unwrap());
    }

    #[rstest]
    fn test_builder_rejects_duplicates() {
        let mut builder = CurrencyRegistryBuilder::new();
        builder.register(Currency::USD()).unwrap();
        assert!(builder.register(Currency::USD()).is_err());
    }

    #[rstest]
    fn test_builder_sorts_on_build() {
        let mut builder = CurrencyRegistryBuilder::new();
        builder.register(Currency::USD()).unwrap();
        builder.register(Currency::EUR()).unwrap();
        builder.register(Currency::AUD()).unwrap();
        let registry = builder.build();
        let codes: Vec<&str> = registry.codes().collect();
        assert_eq!(codes, vec!["AUD", "EUR", "USD"]);
    }
}
