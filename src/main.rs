//! currency-format CLI
//!
//! Format, parse and convert monetary amounts from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Format minor units (cents) for display
//! currency-format format SGD 123456 --sign always
//!
//! # Parse a display string back to minor units
//! currency-format parse IDR "Rp 10.500"
//!
//! # Format and parse a JSON batch
//! currency-format batch --input amounts.json --format json
//! ```

use currency_format::core::currency::{
    is_recognized, recognized_codes, rule, CurrencyCode, CurrencyRule,
};
use currency_format::format::batch::{format_values, unformat_values};
use currency_format::format::currency::{format_currency, FormatOptions};
use currency_format::format::parse::{unformat_currency, ParseOptions};
use currency_format::numeric::units::{to_major_unit, to_minor_unit};
use std::fmt::Display;
use std::fs;
use std::process;
use std::str::FromStr;

fn print_usage() {
    eprintln!(
        r#"currency-format — minor/major unit conversion and currency display strings

USAGE:
    currency-format <COMMAND> [OPTIONS]

COMMANDS:
    format <CODE> <VALUE>   Format an amount for display
    parse <CODE> <TEXT>     Read an amount back from a display string
    to-minor <CODE> <VALUE> Convert major units to minor units
    to-major <CODE> <VALUE> Convert minor units to major units
    rule <CODE>             Show the display rule for a currency
    list                    List currencies with their own rule
    batch                   Format and parse a JSON batch file
    help                    Show this message

OPTIONS (format):
    --sign <MODE>       auto (default), always or never
    --display <MODE>    code (default), symbol or none
    --unit <UNIT>       Unit of VALUE: minor (default) or major
    --fallback <TEXT>   Printed when VALUE is not a finite number

OPTIONS (parse):
    --unit <UNIT>       Unit of the result: minor (default) or major

OPTIONS (rule, list, batch):
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (batch):
    --input <FILE>      Path to JSON batch file

Set RUST_LOG=trace to see why values fall back.

EXAMPLES:
    currency-format format IDR 10500
    currency-format format MYR -99.1 --display symbol --unit major
    currency-format parse MYR "RM 33.99" --unit major
    currency-format rule USD --format json
    currency-format batch --input amounts.json"#
    );
}

/// JSON schema for batch input. A malformed `currency` is rejected on load.
#[derive(serde::Deserialize)]
struct BatchFile {
    currency: CurrencyCode,
    #[serde(default)]
    format_options: FormatOptions,
    #[serde(default)]
    parse_options: ParseOptions,
    /// Amounts to format. Non-numeric entries get the format fallback.
    #[serde(default)]
    values: Vec<serde_json::Value>,
    /// Display strings to parse. Non-string entries get the parse fallback.
    #[serde(default)]
    texts: Vec<serde_json::Value>,
}

/// JSON output schema for batch results. Unparseable texts are `null`.
#[derive(serde::Serialize)]
struct BatchOutput {
    currency: String,
    formatted: Vec<Option<String>>,
    parsed: Vec<Option<f64>>,
}

#[derive(serde::Serialize)]
struct RuleOutput<'a> {
    code: &'a str,
    recognized: bool,
    #[serde(flatten)]
    rule: &'a CurrencyRule,
}

fn fail(message: impl Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn rule_or_exit(code: &str) -> &'static CurrencyRule {
    rule(code).unwrap_or_else(|e| fail(e))
}

/// Split `args` into positional arguments and `--flag value` pairs.
fn split_args<'a>(args: &'a [String], flags: &[&str]) -> (Vec<&'a str>, Vec<(&'a str, &'a str)>) {
    let mut positional = Vec::new();
    let mut options = Vec::new();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if flags.contains(&arg) {
            i += 1;
            let value = args
                .get(i)
                .unwrap_or_else(|| fail(format!("{} requires a value", arg)));
            options.push((arg, value.as_str()));
        } else if arg.starts_with("--") {
            fail(format!("Unknown option: {}", arg));
        } else {
            positional.push(arg);
        }
        i += 1;
    }
    (positional, options)
}

fn parse_flag<T: FromStr<Err = String>>(value: &str) -> T {
    value.parse().unwrap_or_else(|e: String| fail(e))
}

fn parse_number(value: &str) -> f64 {
    value
        .parse()
        .unwrap_or_else(|_| fail(format!("'{}' is not a number", value)))
}

fn code_and_arg<'a>(positional: &[&'a str], what: &str) -> (&'a str, &'a str) {
    match positional {
        [code, arg] => (*code, *arg),
        _ => fail(format!("expected <CODE> <{}>", what)),
    }
}

fn output_format(options: &[(&str, &str)]) -> String {
    let format = options
        .iter()
        .find(|(flag, _)| *flag == "--format")
        .map(|(_, v)| v.to_string())
        .unwrap_or_else(|| "text".to_string());
    if format != "text" && format != "json" {
        fail("--format requires 'text' or 'json'");
    }
    format
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| fail(e))
}

fn cmd_format(args: &[String]) {
    let (positional, flags) = split_args(args, &["--sign", "--display", "--unit", "--fallback"]);
    let (code, value) = code_and_arg(&positional, "VALUE");

    let mut options = FormatOptions::new();
    for (flag, v) in flags {
        match flag {
            "--sign" => options.sign_display = parse_flag(v),
            "--display" => options.currency_display = parse_flag(v),
            "--unit" => options.input_unit = parse_flag(v),
            _ => options.fallback = Some(v.to_string()),
        }
    }

    match format_currency(code, parse_number(value), &options) {
        Ok(Some(text)) => println!("{}", text),
        Ok(None) => fail(format!("'{}' is not a finite amount", value)),
        Err(e) => fail(e),
    }
}

fn cmd_parse(args: &[String]) {
    let (positional, flags) = split_args(args, &["--unit"]);
    let (code, text) = code_and_arg(&positional, "TEXT");

    let mut options = ParseOptions::new();
    for (_, v) in flags {
        options.output_unit = parse_flag(v);
    }

    let value = unformat_currency(code, text, &options).unwrap_or_else(|e| fail(e));
    if value.is_nan() {
        fail(format!("cannot read '{}' as a {} amount", text, code));
    }
    println!("{}", value);
}

fn cmd_convert(args: &[String], to_minor: bool) {
    let (positional, _) = split_args(args, &[]);
    let (code, value) = code_and_arg(&positional, "VALUE");
    let value = parse_number(value);

    let result = if to_minor {
        to_minor_unit(code, value)
    } else {
        to_major_unit(code, value)
    };
    println!("{}", result.unwrap_or_else(|e| fail(e)));
}

fn print_rule(code: &str, rule: &CurrencyRule) {
    println!(
        "{:<4} places={} thousands={:?} decimal={:?} pattern={:?} symbol={}",
        code,
        rule.decimal_places,
        rule.thousand_symbol,
        rule.decimal_symbol,
        rule.pattern,
        rule.symbol.unwrap_or("-"),
    );
}

fn cmd_rule(args: &[String]) {
    let (positional, flags) = split_args(args, &["--format"]);
    let format = output_format(&flags);
    let code = match positional.as_slice() {
        [code] => *code,
        _ => fail("expected <CODE>"),
    };
    let rule = rule_or_exit(code);

    if format == "json" {
        println!(
            "{}",
            to_json(&RuleOutput {
                code,
                recognized: is_recognized(code),
                rule,
            })
        );
    } else {
        print_rule(code, rule);
        if !is_recognized(code) {
            println!("     (no entry for {}, default rule applies)", code);
        }
    }
}

fn cmd_list(args: &[String]) {
    let (_, flags) = split_args(args, &["--format"]);
    let format = output_format(&flags);

    let rules: Vec<RuleOutput> = recognized_codes()
        .map(|code| RuleOutput {
            code,
            recognized: true,
            rule: rule_or_exit(code),
        })
        .collect();

    if format == "json" {
        println!("{}", to_json(&rules));
    } else {
        for r in &rules {
            print_rule(r.code, r.rule);
        }
        println!("\nTotal currencies: {}", rules.len());
    }
}

fn cmd_batch(args: &[String]) {
    let (_, flags) = split_args(args, &["--input", "--format"]);
    let format = output_format(&flags);
    let path = flags
        .iter()
        .find(|(flag, _)| *flag == "--input")
        .map(|(_, v)| *v)
        .unwrap_or_else(|| fail("--input <FILE> is required"));

    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("cannot read file '{}': {}", path, e)));
    let batch: BatchFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "currency": "IDR",
  "format_options": {{ "currency_display": "symbol" }},
  "values": [10500, -250000],
  "texts": ["Rp 10.500"]
}}"#
        );
        fail(format!("invalid JSON: {}", e))
    });

    let code = batch.currency.as_str();
    let formatted =
        format_values(code, &batch.values, &batch.format_options).unwrap_or_else(|e| fail(e));
    let parsed =
        unformat_values(code, &batch.texts, &batch.parse_options).unwrap_or_else(|e| fail(e));
    log::debug!(
        "batch {}: {} values formatted, {} texts parsed",
        code,
        formatted.len(),
        parsed.len()
    );

    if format == "json" {
        let output = BatchOutput {
            currency: batch.currency.to_string(),
            formatted,
            parsed: parsed
                .into_iter()
                .map(|v| if v.is_nan() { None } else { Some(v) })
                .collect(),
        };
        println!("{}", to_json(&output));
    } else {
        for (value, text) in batch.values.iter().zip(&formatted) {
            println!("{:>20} → {}", value.to_string(), text.as_deref().unwrap_or("(fallback)"));
        }
        for (text, value) in batch.texts.iter().zip(&parsed) {
            println!("{:>20} → {}", text.to_string(), value);
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "format" => cmd_format(rest),
        "parse" => cmd_parse(rest),
        "to-minor" => cmd_convert(rest, true),
        "to-major" => cmd_convert(rest, false),
        "rule" => cmd_rule(rest),
        "list" => cmd_list(rest),
        "batch" => cmd_batch(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_file_rejects_malformed_currency() {
        let err = serde_json::from_str::<BatchFile>(r#"{"currency": "usd", "values": [1]}"#)
            .err()
            .unwrap();
        assert!(err.to_string().contains("usd"), "{err}");

        let batch: BatchFile =
            serde_json::from_str(r#"{"currency": "IDR", "values": [10500]}"#).unwrap();
        assert_eq!(batch.currency.as_str(), "IDR");
        assert_eq!(
            format_values(batch.currency.as_str(), &batch.values, &batch.format_options)
                .unwrap(),
            vec![Some("IDR 10.500".to_string())]
        );
    }

    #[test]
    fn test_batch_file_accepts_unrecognized_code() {
        let batch: BatchFile = serde_json::from_str(r#"{"currency": "XYZ"}"#).unwrap();
        assert_eq!(batch.currency.to_string(), "XYZ");
        assert!(batch.values.is_empty() && batch.texts.is_empty());
    }
}
