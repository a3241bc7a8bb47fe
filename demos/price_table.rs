//! Renders one stored price in every display mode for a handful of
//! currencies, then reads each string back.

use currency_format::prelude::*;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  currency-format: Price Table Example    ║");
    println!("╚══════════════════════════════════════════╝\n");

    // Prices as stored: minor units.
    let prices = [
        ("USD", 123_456.0),
        ("EUR", -98_765.0),
        ("IDR", 10_500.0),
        ("BHD", 1_234_567.0),
        ("VNC", 25_000.0),
        ("XYZ", 4_200.0),
    ];

    println!(
        "{:<5} {:>14} {:>20} {:>20} {:>16}",
        "CODE", "STORED", "CODE", "SYMBOL", "NONE"
    );
    for (code, minor) in prices {
        let render = |display| {
            let options = FormatOptions::new()
                .with_currency_display(display)
                .with_fallback("?");
            format_currency(code, minor, &options)
                .ok()
                .flatten()
                .unwrap_or_default()
        };
        println!(
            "{:<5} {:>14} {:>20} {:>20} {:>16}",
            code,
            minor,
            render(CurrencyDisplay::Code),
            render(CurrencyDisplay::Symbol),
            render(CurrencyDisplay::None),
        );
    }

    println!("\n━━━ Parsing back ━━━\n");
    for (code, minor) in prices {
        let Ok(Some(text)) = format_currency(code, minor, &FormatOptions::default()) else {
            continue;
        };
        let major = ParseOptions::new().with_output_unit(Unit::Major);
        let parsed_minor =
            unformat_currency(code, &text, &ParseOptions::default()).unwrap_or(f64::NAN);
        let parsed_major = unformat_currency(code, &text, &major).unwrap_or(f64::NAN);
        println!(
            "  {:<20} → minor {:>14}  major {:>14}",
            text, parsed_minor, parsed_major
        );
    }
}
