// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Calling-code reference data shown next to the phone field.

use crate::logic::link::normalize;

/// One row of the calling-code reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountryCode {
    pub name: &'static str,
    /// ISO 3166-1 alpha-2 code.
    pub iso: &'static str,
    /// Calling code, digits only.
    pub code: &'static str,
}

const fn cc(name: &'static str, iso: &'static str, code: &'static str) -> CountryCode {
    CountryCode { name, iso, code }
}

/// Common calling codes, sorted by country name.
pub const COUNTRY_CODES: &[CountryCode] = &[
    cc("Argentina", "AR", "54"),
    cc("Australia", "AU", "61"),
    cc("Austria", "AT", "43"),
    cc("Bangladesh", "BD", "880"),
    cc("Belgium", "BE", "32"),
    cc("Brazil", "BR", "55"),
    cc("Canada", "CA", "1"),
    cc("Chile", "CL", "56"),
    cc("China", "CN", "86"),
    cc("Colombia", "CO", "57"),
    cc("Denmark", "DK", "45"),
    cc("Egypt", "EG", "20"),
    cc("Finland", "FI", "358"),
    cc("France", "FR", "33"),
    cc("Germany", "DE", "49"),
    cc("Ghana", "GH", "233"),
    cc("Greece", "GR", "30"),
    cc("India", "IN", "91"),
    cc("Indonesia", "ID", "62"),
    cc("Ireland", "IE", "353"),
    cc("Israel", "IL", "972"),
    cc("Italy", "IT", "39"),
    cc("Japan", "JP", "81"),
    cc("Kenya", "KE", "254"),
    cc("Malaysia", "MY", "60"),
    cc("Mexico", "MX", "52"),
    cc("Morocco", "MA", "212"),
    cc("Netherlands", "NL", "31"),
    cc("New Zealand", "NZ", "64"),
    cc("Nigeria", "NG", "234"),
    cc("Norway", "NO", "47"),
    cc("Pakistan", "PK", "92"),
    cc("Peru", "PE", "51"),
    cc("Philippines", "PH", "63"),
    cc("Poland", "PL", "48"),
    cc("Portugal", "PT", "351"),
    cc("Saudi Arabia", "SA", "966"),
    cc("Singapore", "SG", "65"),
    cc("South Africa", "ZA", "27"),
    cc("South Korea", "KR", "82"),
    cc("Spain", "ES", "34"),
    cc("Sweden", "SE", "46"),
    cc("Switzerland", "CH", "41"),
    cc("Thailand", "TH", "66"),
    cc("Turkey", "TR", "90"),
    cc("Ukraine", "UA", "380"),
    cc("United Arab Emirates", "AE", "971"),
    cc("United Kingdom", "GB", "44"),
    cc("United States", "US", "1"),
    cc("Vietnam", "VN", "84"),
];

/// Filter the reference table.
///
/// Matches the name or ISO code case-insensitively. When the query contains
/// digits, rows whose calling code starts with those digits match too, so
/// "+44" and "44" both find the United Kingdom. An empty query returns
/// every row.
pub fn search(query: &str) -> Vec<&'static CountryCode> {
    let query = query.trim();
    if query.is_empty() {
        return COUNTRY_CODES.iter().collect();
    }

    let lower = query.to_lowercase();
    let digits = normalize(query);

    COUNTRY_CODES
        .iter()
        .filter(|entry| {
            entry.name.to_lowercase().contains(&lower)
                || entry.iso.eq_ignore_ascii_case(query)
                || (!digits.is_empty() && entry.code.starts_with(&digits))
        })
        .collect()
}

/// Calling codes whose national numbers keep their leading `0` after the code.
const KEEPS_TRUNK_ZERO: &[&str] = &["39"];

/// Prefix `code` to the user's input unless the number already starts with it.
///
/// The national trunk prefix `0` is dropped from the local part ("030 1234"
/// in Germany becomes "49 30 1234"), except for codes listed in
/// [`KEEPS_TRUNK_ZERO`]. Numbers already written with the code, or with the
/// `00` international prefix plus the code, are left untouched.
pub fn apply_country_code(raw: &str, code: &str) -> String {
    let rest = raw.trim();
    let digits = normalize(rest);
    if digits.starts_with(code)
        || digits
            .strip_prefix("00")
            .is_some_and(|intl| intl.starts_with(code))
    {
        return rest.to_string();
    }

    let mut local = rest.trim_start_matches('+').trim_start();
    if !KEEPS_TRUNK_ZERO.contains(&code) {
        local = local.trim_start_matches('0').trim_start();
    }
    if local.is_empty() {
        return code.to_string();
    }
    format!("{code} {local}")
}
