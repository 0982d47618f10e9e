//! Formatting helpers for dates and prices shown in the availability list.

use time::{Date, Month};

use crate::i18n::Locale;

const MONTHS_FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

fn month_name(month: Month, locale: Locale) -> &'static str {
    let idx = usize::from(u8::from(month)) - 1;
    match locale {
        Locale::Fr => MONTHS_FR[idx],
        Locale::En => MONTHS_EN[idx],
    }
}

/// Long date: `15 juin 2025` / `June 15, 2025`.
pub fn format_date_long(date: Date, locale: Locale) -> String {
    let month = month_name(date.month(), locale);
    match locale {
        Locale::Fr => format!("{} {month} {}", date.day(), date.year()),
        Locale::En => format!("{month} {}, {}", date.day(), date.year()),
    }
}

/// Whole-euro price with thousands grouping: `2 890 €` / `€2,890`.
pub fn format_price(amount: u32, locale: Locale) -> String {
    let digits = amount.to_string();
    let separator = match locale {
        Locale::Fr => '\u{202f}',
        Locale::En => ',',
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    match locale {
        Locale::Fr => format!("{grouped}\u{a0}€"),
        Locale::En => format!("€{grouped}"),
    }
}

/// Keep only digits (and a leading `+`) and group them by two:
/// `0612345678` → `06 12 34 56 78`.
pub fn format_phone(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    let grouped = digits
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");
    if raw.trim_start().starts_with('+') {
        format!("+{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn french_long_date() {
        assert_eq!(format_date_long(date!(2025 - 06 - 15), Locale::Fr), "15 juin 2025");
        assert_eq!(format_date_long(date!(2025 - 08 - 03), Locale::Fr), "3 août 2025");
    }

    #[test]
    fn english_long_date() {
        assert_eq!(format_date_long(date!(2025 - 07 - 20), Locale::En), "July 20, 2025");
    }

    #[test]
    fn prices_are_grouped() {
        assert_eq!(format_price(2890, Locale::Fr), "2\u{202f}890\u{a0}€");
        assert_eq!(format_price(890, Locale::Fr), "890\u{a0}€");
        assert_eq!(format_price(1234567, Locale::En), "€1,234,567");
    }

    #[test]
    fn phone_digits_grouped_by_two() {
        assert_eq!(format_phone("06.12-34 56a78"), "06 12 34 56 78");
        assert_eq!(format_phone("061"), "06 1");
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("+33612345678"), "+33 61 23 45 67 8");
    }
}
