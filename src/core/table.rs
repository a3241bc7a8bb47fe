//! Static per-currency display rules.
//!
//! Sorted by code; lookups binary-search this slice.

use crate::core::currency::CurrencyRule;

pub(crate) static CURRENCY_RULES: &[(&str, CurrencyRule)] = &[
    (
        "AED",
        // UAE Dirham
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "AUD",
        // Australian Dollar
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: Some("AU$"),
        },
    ),
    (
        "BHD",
        // Bahraini Dinar
        CurrencyRule {
            decimal_places: 3,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "BND",
        // Brunei Dollar
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "BRL",
        // Brazilian Real
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ".",
            decimal_symbol: ",",
            pattern: "%s %v",
            symbol: Some("R$"),
        },
    ),
    (
        "CAD",
        // Canadian Dollar
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: Some("CA$"),
        },
    ),
    (
        "CHF",
        // Swiss Franc
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "CNY",
        // Chinese Yuan Renminbi
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: Some("CN¥"),
        },
    ),
    (
        "COP",
        // Colombian Peso
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ".",
            decimal_symbol: ",",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "EGP",
        // Egyptian Pound
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "EUR",
        // European Euro
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ".",
            decimal_symbol: ",",
            pattern: "%s%v",
            symbol: Some("€"),
        },
    ),
    (
        "FJD",
        // Fijian Dollar
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ".",
            decimal_symbol: ",",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "GBP",
        // Pound sterling
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s%v",
            symbol: Some("£"),
        },
    ),
    (
        "HKD",
        // Hong Kong Dollar
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: Some("HK$"),
        },
    ),
    (
        "IDR",
        // Indonesian Rupiah
        CurrencyRule {
            decimal_places: 0,
            thousand_symbol: ".",
            decimal_symbol: ",",
            pattern: "%s%v",
            symbol: Some("Rp"),
        },
    ),
    (
        "ILS",
        // Israeli New Shekel
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "INR",
        // Indian Rupee
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s%v",
            symbol: Some("₹"),
        },
    ),
    (
        "JOD",
        // Jordanian Dinar
        CurrencyRule {
            decimal_places: 3,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "JPY",
        // Japanese Yen
        CurrencyRule {
            decimal_places: 0,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s%v",
            symbol: Some("¥"),
        },
    ),
    (
        "KHR",
        // Cambodian Riel
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s%v",
            symbol: Some("៛"),
        },
    ),
    (
        "KRW",
        // South Korean Won
        CurrencyRule {
            decimal_places: 0,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s%v",
            symbol: Some("₩"),
        },
    ),
    (
        "KWD",
        // Kuwaiti Dinar
        // Two places by convention rather than the ISO 4217 three.
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "LAK",
        // Lao Kip
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "LBP",
        // Lebanese Pound
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "LKR",
        // Sri Lankan Rupee
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "MMK",
        // Myanmar Kyat
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "MOP",
        // Macanese Pataca
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "MVR",
        // Maldivian Rufiyaa
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "MXN",
        // Mexican Peso
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "MYR",
        // Malaysian Ringgit
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: Some("RM"),
        },
    ),
    (
        "NPR",
        // Nepalese Rupee
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "NZD",
        // New Zealand Dollar
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: Some("NZ$"),
        },
    ),
    (
        "OMR",
        // Omani Rial
        CurrencyRule {
            decimal_places: 3,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "PHP",
        // Philippine Peso
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s%v",
            symbol: Some("₱"),
        },
    ),
    (
        "PLN",
        // Polish Zloty
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ".",
            decimal_symbol: ",",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "QAR",
        // Qatari Riyal
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "RUB",
        // Russian Ruble
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ".",
            decimal_symbol: ",",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "SAR",
        // Saudi Arabian Riyal
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "SEK",
        // Swedish Krona
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ".",
            decimal_symbol: ",",
            pattern: "%s %v",
            symbol: None,
        },
    ),
    (
        "SGD",
        // Singapore Dollar
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: Some("S$"),
        },
    ),
    (
        "THB",
        // Thai Baht
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s%v",
            symbol: Some("฿"),
        },
    ),
    (
        "TRY",
        // Turkish Lira
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s%v",
            symbol: Some("₺"),
        },
    ),
    (
        "TWD",
        // New Taiwan Dollar
        CurrencyRule {
            decimal_places: 0,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: Some("NT$"),
        },
    ),
    (
        "USD",
        // United States Dollar
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: Some("US$"),
        },
    ),
    (
        "VNC",
        // Vietnamese Dong, legacy non-ISO code (value before symbol)
        CurrencyRule {
            decimal_places: 0,
            thousand_symbol: ".",
            decimal_symbol: ",",
            pattern: "%v%s",
            symbol: Some("₫"),
        },
    ),
    (
        "VND",
        // Vietnamese Dong
        CurrencyRule {
            decimal_places: 0,
            thousand_symbol: ".",
            decimal_symbol: ",",
            pattern: "%s%v",
            symbol: Some("₫"),
        },
    ),
    (
        "ZAR",
        // South African Rand
        CurrencyRule {
            decimal_places: 2,
            thousand_symbol: ",",
            decimal_symbol: ".",
            pattern: "%s %v",
            symbol: None,
        },
    ),
];
