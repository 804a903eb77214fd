//! Parsing raw input into a resolved phone number
//!
//! ## Input Forms
//!
//! - International: `+` then calling code then NSN, e.g. `+33 1 02 03 04 05`
//! - National: digits dialed inside the context country, optionally starting
//!   with its trunk prefix, e.g. `01 02 03 04 05` in `FR`
//!
//! Separators of any kind are ignored. Parsing never errors: input that
//! cannot be resolved to a plausible number yields `None`.

use crate::country::CountryCode;
use crate::metadata::{self, Region};

/// Keep the digits of `raw` plus a single `+` if it precedes every digit
///
/// `" +33 (0)1-02"` → `"+33012"`, `"01.02"` → `"0102"`, `"abc"` → `""`.
pub fn clean(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if c == '+' && out.is_empty() {
            out.push(c);
        }
    }
    out
}

/// A number resolved to a region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    region: &'static Region,
    nsn: String,
}

impl PhoneNumber {
    /// Region the number belongs to
    pub fn country(&self) -> CountryCode {
        CountryCode::from_region(self.region)
    }

    /// Country calling code
    pub fn calling_code(&self) -> u16 {
        self.region.calling_code
    }

    /// National significant number (no trunk prefix, no calling code)
    pub fn national_number(&self) -> &str {
        &self.nsn
    }

    /// Digits as dialed domestically: trunk prefix followed by the NSN
    pub fn national_digits(&self) -> String {
        match self.region.trunk_prefix() {
            Some(trunk) => format!("{}{}", trunk, self.nsn),
            None => self.nsn.clone(),
        }
    }

    /// `+<calling code><NSN>` with no separators
    pub fn e164(&self) -> String {
        format!("+{}{}", self.region.calling_code, self.nsn)
    }

    /// Domestic display form, e.g. `01 02 03 04 05`
    pub fn format_national(&self) -> String {
        let trunk = self.region.trunk_prefix().unwrap_or("");
        match self.region.pattern_for(&self.nsn) {
            Some(pattern) => match pattern.national {
                Some(template) => layout(template, &split(&self.nsn, pattern.groups)),
                None => format!(
                    "{}{}",
                    trunk,
                    layout(pattern.international, &split(&self.nsn, pattern.groups))
                ),
            },
            None => format!("{}{}", trunk, generic_groups(&self.nsn).join(" ")),
        }
    }

    /// Display form for callers abroad, e.g. `+33 1 02 03 04 05`
    pub fn format_international(&self) -> String {
        let body = match self.region.pattern_for(&self.nsn) {
            Some(pattern) => layout(pattern.international, &split(&self.nsn, pattern.groups)),
            None => generic_groups(&self.nsn).join(" "),
        };
        format!("+{} {}", self.region.calling_code, body)
    }
}

/// Resolve `raw` against `context`
///
/// A `+` prefix selects international parsing; otherwise the digits are
/// read as a national number dialed in `context`. Either way, a calling code
/// shared by several regions resolves to `context` when it owns the number's
/// prefix, so a number parsed in its own region keeps that region.
pub fn parse(raw: &str, context: CountryCode) -> Option<PhoneNumber> {
    let cleaned = clean(raw);
    match cleaned.strip_prefix('+') {
        Some(digits) => parse_international(digits, context),
        None => parse_national(&cleaned, context),
    }
}

/// Resolve the digits following a `+`
pub(crate) fn parse_international(digits: &str, context: CountryCode) -> Option<PhoneNumber> {
    for len in 1..=digits.len().min(3) {
        let Some(calling_code) = metadata::is_calling_code(&digits[..len]) else {
            continue;
        };
        return resolved(calling_code, &digits[len..], context);
    }
    None
}

fn parse_national(digits: &str, context: CountryCode) -> Option<PhoneNumber> {
    let home = context.region();
    let nsn = match home.trunk_prefix() {
        Some(trunk) => match digits.strip_prefix(trunk) {
            Some(rest) if home.accepts_len(rest) => rest,
            _ => digits,
        },
        None => digits,
    };
    resolved(home.calling_code, nsn, context)
}

fn resolved(calling_code: u16, nsn: &str, context: CountryCode) -> Option<PhoneNumber> {
    let region = metadata::resolve(calling_code, nsn, Some(context.region()))?;
    region.accepts_len(nsn).then(|| PhoneNumber {
        region,
        nsn: nsn.to_string(),
    })
}

fn split<'a>(nsn: &'a str, groups: &[u8]) -> Vec<&'a str> {
    let mut parts = Vec::with_capacity(groups.len());
    let mut start = 0;
    for size in groups {
        let end = start + *size as usize;
        parts.push(&nsn[start..end]);
        start = end;
    }
    parts
}

/// Groups of three with a final group of two to four digits
fn generic_groups(nsn: &str) -> Vec<&str> {
    if nsn.len() <= 4 {
        return vec![nsn];
    }
    let mut parts = Vec::new();
    let mut start = 0;
    while nsn.len() - start > 4 {
        parts.push(&nsn[start..start + 3]);
        start += 3;
    }
    parts.push(&nsn[start..]);
    parts
}

/// Substitute `$1`..`$9` in `template` with `groups`
fn layout(template: &str, groups: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(index) = chars.peek().and_then(|d| d.to_digit(10)) {
                chars.next();
                if let Some(group) = (index as usize).checked_sub(1).and_then(|i| groups.get(i)) {
                    out.push_str(group);
                }
                continue;
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cc(code: &str) -> CountryCode {
        CountryCode::parse(code).unwrap()
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean("01 02 03 04 05"), "0102030405");
        assert_eq!(clean(" +33 (0)1-02"), "+33012");
        assert_eq!(clean("0+1"), "01");
        assert_eq!(clean("++33"), "+33");
        assert_eq!(clean("abc"), "");
        assert_eq!(clean("+"), "+");
    }

    #[test]
    fn test_parse_national_with_trunk() {
        let n = parse("01 02 03 04 05", cc("FR")).unwrap();
        assert_eq!(n.country(), cc("FR"));
        assert_eq!(n.national_number(), "102030405");
        assert_eq!(n.national_digits(), "0102030405");
        assert_eq!(n.e164(), "+33102030405");
    }

    #[test]
    fn test_parse_national_without_trunk() {
        let n = parse("102030405", cc("FR")).unwrap();
        assert_eq!(n.national_number(), "102030405");
    }

    #[test]
    fn test_parse_international() {
        let n = parse("+33 1 02 03 04 05", cc("US")).unwrap();
        assert_eq!(n.country(), cc("FR"));
        assert_eq!(n.calling_code(), 33);

        let us = parse("+1 551 234 5678", cc("FR")).unwrap();
        assert_eq!(us.country(), cc("US"));
        assert_eq!(us.national_number(), "5512345678");
    }

    #[test]
    fn test_parse_incomplete() {
        assert!(parse("01", cc("FR")).is_none());
        assert!(parse("+", cc("FR")).is_none());
        assert!(parse("+33", cc("FR")).is_none());
        assert!(parse("", cc("FR")).is_none());
        assert!(parse("+999123456", cc("FR")).is_none());
    }

    #[test]
    fn test_format_national_fr() {
        let n = parse("+33102030405", cc("FR")).unwrap();
        assert_eq!(n.format_national(), "01 02 03 04 05");
        assert_eq!(n.format_international(), "+33 1 02 03 04 05");
    }

    #[test]
    fn test_format_nanp() {
        let n = parse("5512345678", cc("US")).unwrap();
        assert_eq!(n.format_national(), "(551) 234-5678");
        assert_eq!(n.format_international(), "+1 551-234-5678");
    }

    #[test]
    fn test_format_russia_uses_own_national_template() {
        let n = parse("+79123456789", cc("RU")).unwrap();
        assert_eq!(n.format_national(), "8 (912) 345-67-89");
        assert_eq!(n.format_international(), "+7 912 345-67-89");
    }

    #[test]
    fn test_national_number_of_another_region_under_same_code() {
        // Dialed from the UK, a Jersey mobile is still a Jersey number.
        let n = parse("07700 300123", cc("GB")).unwrap();
        assert_eq!(n.country(), cc("JE"));
        assert_eq!(n.national_digits(), "07700300123");

        let kz = parse("8 701 234 5678", cc("RU")).unwrap();
        assert_eq!(kz.country(), cc("KZ"));
        assert_eq!(kz.national_number(), "7012345678");

        let ca = parse("416 555 0123", cc("US")).unwrap();
        assert_eq!(ca.country(), cc("CA"));
    }

    #[test]
    fn test_context_region_keeps_shared_ranges() {
        let bl = parse("0690 00 12 34", cc("BL")).unwrap();
        assert_eq!(bl.country(), cc("BL"));
        assert_eq!(parse("+590690001234", cc("BL")).unwrap(), bl);
        assert_eq!(parse("+590690001234", cc("FR")).unwrap().country(), cc("GP"));

        let je = parse("+44 800 123 4567", cc("JE")).unwrap();
        assert_eq!(je.country(), cc("JE"));
        assert_eq!(parse("+44 800 123 4567", cc("GB")).unwrap().country(), cc("GB"));
    }

    #[test]
    fn test_every_region_round_trips_its_own_e164() {
        for region in metadata::REGIONS {
            let code = CountryCode::from_region(region);
            let e164 = format!("+{}{}", region.calling_code, region.sample_nsn());
            let n = parse(&e164, code).unwrap_or_else(|| panic!("{} {}", region.code, e164));
            assert_eq!(n.country(), code, "{}", e164);
            assert_eq!(n.e164(), e164);

            let shown = crate::format(&e164, code);
            assert_eq!(shown, n.format_national(), "{}", region.code);
            assert_eq!(
                crate::normalize_for_comparison(&e164, code),
                n.national_digits(),
                "{}",
                region.code
            );
            assert_eq!(parse(&n.national_digits(), code).as_ref(), Some(&n), "{}", region.code);
        }
    }

    #[test]
    fn test_generic_grouping() {
        assert_eq!(generic_groups("1234"), vec!["1234"]);
        assert_eq!(generic_groups("1234567"), vec!["123", "4567"]);
        assert_eq!(generic_groups("12345678"), vec!["123", "456", "78"]);
        assert_eq!(generic_groups("1234567890"), vec!["123", "456", "7890"]);
    }

    #[test]
    fn test_layout() {
        assert_eq!(layout("($1) $2-$3", &["551", "234", "5678"]), "(551) 234-5678");
        assert_eq!(layout("$1 $4", &["a", "b"]), "a ");
        assert_eq!(layout("cost $x", &["a"]), "cost $x");
    }
}
