//! Formatting of amounts in Indonesian Rupiah.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// Format `amount` as Rupiah with `.` as the thousands separator, e.g. `Rp1.250.000`.
///
/// Amounts are rounded to whole Rupiah. Negative amounts get a leading minus
/// sign before the currency symbol.
pub fn format_rupiah(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| rupiah_formatter("Rp"));

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| rupiah_formatter("-Rp"));

    let amount = amount.round();

    if amount < 0.0 {
        negative_fmt.fmt_string(amount.abs())
    } else if amount > 0.0 {
        positive_fmt.fmt_string(amount)
    } else {
        // numfmt renders zero as a bare "0".
        "Rp0".to_owned()
    }
}

fn rupiah_formatter(prefix: &str) -> Formatter {
    Formatter::currency(prefix)
        .and_then(|formatter| formatter.separator('.'))
        .map(|formatter| formatter.precision(Precision::Decimals(0)))
        .expect("Rupiah prefix and separator are valid numfmt settings")
}
