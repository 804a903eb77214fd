//! Static dialing metadata
//!
//! One [`Region`] per supported two-letter code. Each row carries:
//! - the country calling code (`+33` → 33)
//! - the national (trunk) prefix shown in national format, `""` if none
//! - the allowed lengths of the national significant number (NSN)
//! - for regions sharing a calling code with others, the NSN prefixes that
//!   identify them (the region without prefixes is the main one)
//! - for those same regions, prefixes they own jointly with the main region
//!   (mobile and non-geographic ranges)
//! - optional grouping patterns used for display
//!
//! Region set, lengths and leading digits follow libphonenumber's
//! `PhoneNumberMetadata.xml`. Identifying prefixes are the `leadingDigits`
//! of the secondary region where one exists, otherwise the fixed-line
//! ranges that appear in no other region of the calling code.
//!
//! ## Resolution
//!
//! A number under a shared calling code belongs to:
//! 1. the preferred (context) region, if it is secondary and owns the prefix
//! 2. otherwise the first secondary region identified by the prefix
//! 3. otherwise the main region
//!
//! Step 2 ignores the preference, so resolving a number again with its own
//! region preferred always lands on that region.
//!
//! ## Invariants
//!
//! - Calling codes are prefix-free, so the first 1-3 digit prefix found in
//!   the table is the only possible match.
//! - Exactly one main region exists per calling code.

/// Grouping pattern for a national significant number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pattern {
    /// NSN prefixes this pattern applies to; empty matches any NSN
    pub leading: &'static [&'static str],
    /// Group sizes; must sum to the NSN length for the pattern to apply
    pub groups: &'static [u8],
    /// International layout, `$1`..`$n` stand for the groups
    pub international: &'static str,
    /// National layout when it differs from "trunk prefix + international"
    pub national: Option<&'static str>,
}

impl Pattern {
    pub(crate) const fn new(
        leading: &'static [&'static str],
        groups: &'static [u8],
        international: &'static str,
    ) -> Self {
        Self {
            leading,
            groups,
            international,
            national: None,
        }
    }

    pub(crate) const fn national(self, national: &'static str) -> Self {
        Self {
            national: Some(national),
            ..self
        }
    }

    /// Whether this pattern can lay out `nsn`
    pub(crate) fn matches(&self, nsn: &str) -> bool {
        let total: usize = self.groups.iter().map(|g| *g as usize).sum();
        total == nsn.len()
            && (self.leading.is_empty() || self.leading.iter().any(|p| nsn.starts_with(p)))
    }
}

/// Dialing metadata for one region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Region {
    pub code: &'static str,
    pub name: &'static str,
    pub calling_code: u16,
    trunk: &'static str,
    pub min_len: u8,
    pub max_len: u8,
    pub main: bool,
    pub leading: &'static [&'static str],
    pub shared: &'static [&'static str],
    pub patterns: &'static [Pattern],
}

impl Region {
    /// National prefix dialed (and displayed) before the NSN, if any
    pub(crate) fn trunk_prefix(&self) -> Option<&'static str> {
        if self.trunk.is_empty() {
            None
        } else {
            Some(self.trunk)
        }
    }

    /// Whether `nsn` has an allowed length for this region
    pub(crate) fn accepts_len(&self, nsn: &str) -> bool {
        let len = nsn.len();
        len >= self.min_len as usize && len <= self.max_len as usize
    }

    /// Whether `nsn` carries one of this region's identifying prefixes
    pub(crate) fn claims(&self, nsn: &str) -> bool {
        self.leading.iter().any(|p| nsn.starts_with(p))
    }

    /// Whether `nsn` falls in a range this region owns, alone or jointly
    pub(crate) fn owns(&self, nsn: &str) -> bool {
        self.claims(nsn) || self.shared.iter().any(|p| nsn.starts_with(p))
    }

    /// First grouping pattern applicable to `nsn`
    pub(crate) fn pattern_for(&self, nsn: &str) -> Option<&'static Pattern> {
        self.patterns.iter().find(|p| p.matches(nsn))
    }

    /// Shortest valid-length NSN led by the first identifying prefix
    #[cfg(test)]
    pub(crate) fn sample_nsn(&self) -> String {
        let mut nsn = self.leading.first().copied().unwrap_or("").to_string();
        while nsn.len() < self.min_len as usize {
            nsn.push('2');
        }
        nsn
    }

    const fn secondary(self, leading: &'static [&'static str]) -> Self {
        Self {
            main: false,
            leading,
            ..self
        }
    }

    const fn sharing(self, shared: &'static [&'static str]) -> Self {
        Self { shared, ..self }
    }

    const fn patterns(self, patterns: &'static [Pattern]) -> Self {
        Self { patterns, ..self }
    }
}

const fn r(
    code: &'static str,
    name: &'static str,
    calling_code: u16,
    trunk: &'static str,
    min_len: u8,
    max_len: u8,
) -> Region {
    Region {
        code,
        name,
        calling_code,
        trunk,
        min_len,
        max_len,
        main: true,
        leading: &[],
        shared: &[],
        patterns: &[],
    }
}

/// NANP regions other than the US and Canada, keyed by area code.
const fn nanp(code: &'static str, name: &'static str, area: &'static [&'static str]) -> Region {
    r(code, name, 1, "", 10, 10)
        .secondary(area)
        .sharing(NANP_TOLL_FREE)
        .patterns(NANP)
}

const NO_TRUNK: &str = "";

const NANP_TOLL_FREE: &[&str] = &["800", "833", "844", "855", "866", "877", "888"];

/// UK mobile, personal and non-geographic ranges valid in the Crown Dependencies
const UK_SHARED: &[&str] = &["3", "55", "56", "70", "8", "9"];

/// Mobile ranges common to Guadeloupe, St. Barthélemy and St. Martin
const GP_MOBILE: &[&str] = &["690", "6912", "6913"];

/// Australian ranges valid on Cocos and Christmas Island
const AU_SHARED: &[&str] = &["13", "18", "4"];

// ============================================================================
// Grouping patterns
// ============================================================================

const NANP: &[Pattern] = &[Pattern::new(&[], &[3, 3, 4], "$1-$2-$3").national("($1) $2-$3")];

const FR: &[Pattern] = &[Pattern::new(&[], &[1, 2, 2, 2, 2], "$1 $2 $3 $4 $5")];

const GB: &[Pattern] = &[
    Pattern::new(&["2"], &[2, 4, 4], "$1 $2 $3"),
    Pattern::new(&["7", "1"], &[4, 6], "$1 $2"),
    Pattern::new(&[], &[3, 3, 4], "$1 $2 $3"),
];

const DE: &[Pattern] = &[
    Pattern::new(&["15", "16", "17"], &[3, 8], "$1 $2"),
    Pattern::new(&["15", "16", "17"], &[3, 7], "$1 $2"),
    Pattern::new(&["30", "40", "69", "89"], &[2, 8], "$1 $2"),
    Pattern::new(&["30", "40", "69", "89"], &[2, 7], "$1 $2"),
];

const ES: &[Pattern] = &[
    Pattern::new(&["6", "7"], &[3, 2, 2, 2], "$1 $2 $3 $4"),
    Pattern::new(&["9", "8"], &[3, 3, 3], "$1 $2 $3"),
];

const IT: &[Pattern] = &[
    Pattern::new(&["3"], &[3, 3, 4], "$1 $2 $3"),
    Pattern::new(&["3"], &[3, 3, 3], "$1 $2 $3"),
    Pattern::new(&["0"], &[2, 4, 4], "$1 $2 $3"),
    Pattern::new(&["0"], &[3, 3, 4], "$1 $2 $3"),
];

const BE: &[Pattern] = &[
    Pattern::new(&["4"], &[3, 2, 2, 2], "$1 $2 $3 $4"),
    Pattern::new(&["2", "3", "9"], &[1, 3, 2, 2], "$1 $2 $3 $4"),
    Pattern::new(&[], &[2, 2, 2, 2], "$1 $2 $3 $4"),
];

const NL: &[Pattern] = &[
    Pattern::new(&["6"], &[1, 8], "$1 $2"),
    Pattern::new(&[], &[2, 3, 4], "$1 $2 $3"),
];

const CH: &[Pattern] = &[Pattern::new(&[], &[2, 3, 2, 2], "$1 $2 $3 $4")];

const AT: &[Pattern] = &[
    Pattern::new(&["1"], &[1, 3, 4], "$1 $2 $3"),
    Pattern::new(&["6"], &[3, 7], "$1 $2"),
];

const PT: &[Pattern] = &[Pattern::new(&[], &[3, 3, 3], "$1 $2 $3")];

const PL: &[Pattern] = &[
    Pattern::new(&["5", "6", "7", "8"], &[3, 3, 3], "$1 $2 $3"),
    Pattern::new(&[], &[2, 3, 2, 2], "$1 $2 $3 $4"),
];

const SE: &[Pattern] = &[
    Pattern::new(&["7"], &[2, 3, 2, 2], "$1 $2 $3 $4").national("0$1-$2 $3 $4"),
    Pattern::new(&["8"], &[1, 3, 3, 2], "$1 $2 $3 $4").national("0$1-$2 $3 $4"),
];

const IE: &[Pattern] = &[
    Pattern::new(&["8"], &[2, 3, 4], "$1 $2 $3"),
    Pattern::new(&["1"], &[1, 3, 4], "$1 $2 $3"),
];

const DK: &[Pattern] = &[Pattern::new(&[], &[2, 2, 2, 2], "$1 $2 $3 $4")];

const NO: &[Pattern] = &[
    Pattern::new(&["4", "9"], &[3, 2, 3], "$1 $2 $3"),
    Pattern::new(&[], &[2, 2, 2, 2], "$1 $2 $3 $4"),
];

const FI: &[Pattern] = &[Pattern::new(&["4", "5"], &[2, 3, 4], "$1 $2 $3")];

const RU: &[Pattern] = &[
    Pattern::new(&[], &[3, 3, 2, 2], "$1 $2-$3-$4").national("8 ($1) $2-$3-$4"),
];

const KZ: &[Pattern] = RU;

const UA: &[Pattern] = &[Pattern::new(&[], &[2, 3, 4], "$1 $2 $3")];

const TR: &[Pattern] = &[
    Pattern::new(&["5"], &[3, 3, 2, 2], "$1 $2 $3 $4").national("0$1 $2 $3 $4"),
    Pattern::new(&[], &[3, 3, 2, 2], "$1 $2 $3 $4").national("(0$1) $2 $3 $4"),
];

const GR: &[Pattern] = &[
    Pattern::new(&["69"], &[3, 3, 4], "$1 $2 $3"),
    Pattern::new(&["2"], &[3, 3, 4], "$1 $2 $3"),
];

const JP: &[Pattern] = &[
    Pattern::new(&["70", "80", "90"], &[2, 4, 4], "$1-$2-$3"),
    Pattern::new(&["3", "6"], &[1, 4, 4], "$1-$2-$3"),
];

const KR: &[Pattern] = &[
    Pattern::new(&["1"], &[2, 4, 4], "$1-$2-$3"),
    Pattern::new(&["2"], &[1, 4, 4], "$1-$2-$3"),
    Pattern::new(&["2"], &[1, 3, 4], "$1-$2-$3"),
];

const CN: &[Pattern] = &[
    Pattern::new(&["1"], &[3, 4, 4], "$1 $2 $3").national("$1 $2 $3"),
    Pattern::new(&["10", "2"], &[2, 4, 4], "$1 $2 $3"),
];

const IN: &[Pattern] = &[Pattern::new(&["6", "7", "8", "9"], &[5, 5], "$1 $2")];

const AU: &[Pattern] = &[
    Pattern::new(&["4"], &[3, 3, 3], "$1 $2 $3"),
    Pattern::new(&["2", "3", "7", "8"], &[1, 4, 4], "$1 $2 $3"),
];

const NZ: &[Pattern] = &[
    Pattern::new(&["2"], &[2, 3, 4], "$1 $2 $3"),
    Pattern::new(&["2"], &[2, 3, 3], "$1 $2 $3"),
    Pattern::new(&[], &[1, 3, 4], "$1 $2 $3"),
];

const BR: &[Pattern] = &[
    Pattern::new(&[], &[2, 5, 4], "$1 $2-$3").national("($1) $2-$3"),
    Pattern::new(&[], &[2, 4, 4], "$1 $2-$3").national("($1) $2-$3"),
];

const MX: &[Pattern] = &[
    Pattern::new(&["33", "55", "81"], &[2, 4, 4], "$1 $2 $3"),
    Pattern::new(&[], &[3, 3, 4], "$1 $2 $3"),
];

const AR: &[Pattern] = &[Pattern::new(&["11"], &[2, 4, 4], "$1 $2-$3")];

const ZA: &[Pattern] = &[Pattern::new(&[], &[2, 3, 4], "$1 $2 $3")];

const IL: &[Pattern] = &[
    Pattern::new(&["5"], &[2, 3, 4], "$1-$2-$3"),
    Pattern::new(&[], &[1, 3, 4], "$1-$2-$3"),
];

const SG: &[Pattern] = &[Pattern::new(&[], &[4, 4], "$1 $2")];

const HK: &[Pattern] = SG;

// ============================================================================
// Region table
// ============================================================================

/// Every supported region, in code order
pub(crate) static REGIONS: &[Region] = &[
    r("AC", "Ascension Island", 247, NO_TRUNK, 5, 6),
    r("AD", "Andorra", 376, NO_TRUNK, 6, 9),
    r("AE", "United Arab Emirates", 971, "0", 8, 9),
    r("AF", "Afghanistan", 93, "0", 9, 9),
    nanp("AG", "Antigua & Barbuda", &["268"]),
    nanp("AI", "Anguilla", &["264"]),
    r("AL", "Albania", 355, "0", 6, 9),
    r("AM", "Armenia", 374, "0", 8, 8),
    r("AO", "Angola", 244, NO_TRUNK, 9, 9),
    r("AR", "Argentina", 54, "0", 10, 11).patterns(AR),
    nanp("AS", "American Samoa", &["684"]),
    r("AT", "Austria", 43, "0", 4, 13).patterns(AT),
    r("AU", "Australia", 61, "0", 9, 9).patterns(AU),
    r("AW", "Aruba", 297, NO_TRUNK, 7, 7),
    r("AX", "Åland Islands", 358, "0", 5, 12)
        .secondary(&["18"])
        .sharing(&["4", "50"]),
    r("AZ", "Azerbaijan", 994, "0", 9, 9),
    r("BA", "Bosnia & Herzegovina", 387, "0", 8, 9),
    nanp("BB", "Barbados", &["246"]),
    r("BD", "Bangladesh", 880, "0", 6, 10),
    r("BE", "Belgium", 32, "0", 8, 9).patterns(BE),
    r("BF", "Burkina Faso", 226, NO_TRUNK, 8, 8),
    r("BG", "Bulgaria", 359, "0", 6, 9),
    r("BH", "Bahrain", 973, NO_TRUNK, 8, 8),
    r("BI", "Burundi", 257, NO_TRUNK, 8, 8),
    r("BJ", "Benin", 229, NO_TRUNK, 8, 10),
    r("BL", "St. Barthélemy", 590, "0", 9, 9)
        .secondary(&["59027", "59029", "59051", "59052", "59087"])
        .sharing(GP_MOBILE)
        .patterns(FR),
    nanp("BM", "Bermuda", &["441"]),
    r("BN", "Brunei", 673, NO_TRUNK, 7, 7),
    r("BO", "Bolivia", 591, "0", 8, 8),
    r("BQ", "Caribbean Netherlands", 599, NO_TRUNK, 7, 7).secondary(&["3", "4", "7"]),
    r("BR", "Brazil", 55, "0", 10, 11).patterns(BR),
    nanp("BS", "Bahamas", &["242"]),
    r("BT", "Bhutan", 975, NO_TRUNK, 7, 8),
    r("BW", "Botswana", 267, NO_TRUNK, 7, 8),
    r("BY", "Belarus", 375, "8", 9, 10),
    r("BZ", "Belize", 501, NO_TRUNK, 7, 7),
    r("CA", "Canada", 1, NO_TRUNK, 10, 10)
        .secondary(&[
            "204", "226", "236", "249", "250", "263", "289", "306", "343", "354", "365", "367",
            "368", "382", "387", "403", "416", "418", "428", "431", "437", "438", "450", "460",
            "468", "474", "506", "514", "519", "548", "579", "581", "584", "587", "604", "613",
            "639", "647", "672", "683", "705", "709", "742", "753", "778", "780", "782", "807",
            "819", "825", "867", "873", "879", "902", "905",
        ])
        .sharing(NANP_TOLL_FREE)
        .patterns(NANP),
    r("CC", "Cocos (Keeling) Islands", 61, "0", 9, 9)
        .secondary(&["89162"])
        .sharing(AU_SHARED),
    r("CD", "Congo - Kinshasa", 243, "0", 7, 9),
    r("CF", "Central African Republic", 236, NO_TRUNK, 8, 8),
    r("CG", "Congo - Brazzaville", 242, NO_TRUNK, 9, 9),
    r("CH", "Switzerland", 41, "0", 9, 9).patterns(CH),
    r("CI", "Côte d’Ivoire", 225, NO_TRUNK, 10, 10),
    r("CK", "Cook Islands", 682, NO_TRUNK, 5, 5),
    r("CL", "Chile", 56, NO_TRUNK, 9, 10),
    r("CM", "Cameroon", 237, NO_TRUNK, 8, 9),
    r("CN", "China", 86, "0", 7, 12).patterns(CN),
    r("CO", "Colombia", 57, NO_TRUNK, 10, 10),
    r("CR", "Costa Rica", 506, NO_TRUNK, 8, 8),
    r("CU", "Cuba", 53, "0", 6, 8),
    r("CV", "Cape Verde", 238, NO_TRUNK, 7, 7),
    r("CW", "Curaçao", 599, NO_TRUNK, 7, 8),
    r("CX", "Christmas Island", 61, "0", 9, 9)
        .secondary(&["89164"])
        .sharing(AU_SHARED),
    r("CY", "Cyprus", 357, NO_TRUNK, 8, 8),
    r("CZ", "Czechia", 420, NO_TRUNK, 9, 9).patterns(PT),
    r("DE", "Germany", 49, "0", 6, 13).patterns(DE),
    r("DJ", "Djibouti", 253, NO_TRUNK, 8, 8),
    r("DK", "Denmark", 45, NO_TRUNK, 8, 8).patterns(DK),
    nanp("DM", "Dominica", &["767"]),
    nanp("DO", "Dominican Republic", &["809", "829", "849"]),
    r("DZ", "Algeria", 213, "0", 8, 9),
    r("EC", "Ecuador", 593, "0", 8, 9),
    r("EE", "Estonia", 372, NO_TRUNK, 7, 8),
    r("EG", "Egypt", 20, "0", 8, 10),
    r("EH", "Western Sahara", 212, "0", 9, 9)
        .secondary(&["5288", "5289"])
        .sharing(&["6", "7"]),
    r("ER", "Eritrea", 291, "0", 7, 7),
    r("ES", "Spain", 34, NO_TRUNK, 9, 9).patterns(ES),
    r("ET", "Ethiopia", 251, "0", 9, 9),
    r("FI", "Finland", 358, "0", 5, 12).patterns(FI),
    r("FJ", "Fiji", 679, NO_TRUNK, 7, 7),
    r("FK", "Falkland Islands", 500, NO_TRUNK, 5, 5),
    r("FM", "Micronesia", 691, NO_TRUNK, 7, 7),
    r("FO", "Faroe Islands", 298, NO_TRUNK, 6, 6),
    r("FR", "France", 33, "0", 9, 9).patterns(FR),
    r("GA", "Gabon", 241, NO_TRUNK, 7, 8),
    r("GB", "United Kingdom", 44, "0", 9, 10).patterns(GB),
    nanp("GD", "Grenada", &["473"]),
    r("GE", "Georgia", 995, "0", 9, 9),
    r("GF", "French Guiana", 594, "0", 9, 9).patterns(FR),
    r("GG", "Guernsey", 44, "0", 10, 10)
        .secondary(&["1481", "7781", "7839", "79111", "79117"])
        .sharing(UK_SHARED)
        .patterns(GB),
    r("GH", "Ghana", 233, "0", 9, 9),
    r("GI", "Gibraltar", 350, NO_TRUNK, 8, 8),
    r("GL", "Greenland", 299, NO_TRUNK, 6, 6),
    r("GM", "Gambia", 220, NO_TRUNK, 7, 7),
    r("GN", "Guinea", 224, NO_TRUNK, 8, 9),
    r("GP", "Guadeloupe", 590, "0", 9, 9).patterns(FR),
    r("GQ", "Equatorial Guinea", 240, NO_TRUNK, 9, 9),
    r("GR", "Greece", 30, NO_TRUNK, 10, 10).patterns(GR),
    r("GT", "Guatemala", 502, NO_TRUNK, 8, 8),
    nanp("GU", "Guam", &["671"]),
    r("GW", "Guinea-Bissau", 245, NO_TRUNK, 7, 9),
    r("GY", "Guyana", 592, NO_TRUNK, 7, 7),
    r("HK", "Hong Kong SAR China", 852, NO_TRUNK, 8, 8).patterns(HK),
    r("HN", "Honduras", 504, NO_TRUNK, 8, 8),
    r("HR", "Croatia", 385, "0", 8, 9),
    r("HT", "Haiti", 509, NO_TRUNK, 8, 8),
    r("HU", "Hungary", 36, "06", 8, 9),
    r("ID", "Indonesia", 62, "0", 8, 12),
    r("IE", "Ireland", 353, "0", 7, 9).patterns(IE),
    r("IL", "Israel", 972, "0", 8, 9).patterns(IL),
    r("IM", "Isle of Man", 44, "0", 10, 10)
        .secondary(&["1624", "74576", "7524", "7624", "7924"])
        .sharing(UK_SHARED)
        .patterns(GB),
    r("IN", "India", 91, "0", 10, 10).patterns(IN),
    r("IO", "British Indian Ocean Territory", 246, NO_TRUNK, 7, 7),
    r("IQ", "Iraq", 964, "0", 8, 10),
    r("IR", "Iran", 98, "0", 10, 10),
    r("IS", "Iceland", 354, NO_TRUNK, 7, 9),
    r("IT", "Italy", 39, NO_TRUNK, 6, 11).patterns(IT),
    r("JE", "Jersey", 44, "0", 10, 10)
        .secondary(&[
            "1534", "7509", "77003", "77007", "77008", "7797", "7829", "7937",
        ])
        .sharing(UK_SHARED)
        .patterns(GB),
    nanp("JM", "Jamaica", &["876", "658"]),
    r("JO", "Jordan", 962, "0", 8, 9),
    r("JP", "Japan", 81, "0", 9, 10).patterns(JP),
    r("KE", "Kenya", 254, "0", 9, 10),
    r("KG", "Kyrgyzstan", 996, "0", 9, 9),
    r("KH", "Cambodia", 855, "0", 8, 9),
    r("KI", "Kiribati", 686, "0", 5, 8),
    r("KM", "Comoros", 269, NO_TRUNK, 7, 7),
    nanp("KN", "St. Kitts & Nevis", &["869"]),
    r("KP", "North Korea", 850, "0", 8, 10),
    r("KR", "South Korea", 82, "0", 8, 10).patterns(KR),
    r("KW", "Kuwait", 965, NO_TRUNK, 7, 8),
    nanp("KY", "Cayman Islands", &["345"]),
    r("KZ", "Kazakhstan", 7, "8", 10, 10)
        .secondary(&["33", "7"])
        .patterns(KZ),
    r("LA", "Laos", 856, "0", 8, 10),
    r("LB", "Lebanon", 961, "0", 7, 8),
    nanp("LC", "St. Lucia", &["758"]),
    r("LI", "Liechtenstein", 423, "0", 7, 9),
    r("LK", "Sri Lanka", 94, "0", 9, 9),
    r("LR", "Liberia", 231, "0", 7, 9),
    r("LS", "Lesotho", 266, NO_TRUNK, 8, 8),
    r("LT", "Lithuania", 370, "8", 8, 8),
    r("LU", "Luxembourg", 352, NO_TRUNK, 4, 11),
    r("LV", "Latvia", 371, NO_TRUNK, 8, 8),
    r("LY", "Libya", 218, "0", 9, 9),
    r("MA", "Morocco", 212, "0", 9, 9),
    r("MC", "Monaco", 377, "0", 8, 9),
    r("MD", "Moldova", 373, "0", 8, 8),
    r("ME", "Montenegro", 382, "0", 8, 8),
    r("MF", "St. Martin", 590, "0", 9, 9)
        .secondary(&[
            "59000", "59007", "59009", "59013", "59043", "59050", "59056", "59058", "59077",
            "59079",
        ])
        .sharing(GP_MOBILE)
        .patterns(FR),
    r("MG", "Madagascar", 261, "0", 9, 9),
    r("MH", "Marshall Islands", 692, "1", 7, 7),
    r("MK", "North Macedonia", 389, "0", 8, 8),
    r("ML", "Mali", 223, NO_TRUNK, 8, 8),
    r("MM", "Myanmar (Burma)", 95, "0", 6, 10),
    r("MN", "Mongolia", 976, "0", 8, 10),
    r("MO", "Macao SAR China", 853, NO_TRUNK, 8, 8).patterns(SG),
    nanp("MP", "Northern Mariana Islands", &["670"]),
    r("MQ", "Martinique", 596, "0", 9, 9).patterns(FR),
    r("MR", "Mauritania", 222, NO_TRUNK, 8, 8),
    nanp("MS", "Montserrat", &["664"]),
    r("MT", "Malta", 356, NO_TRUNK, 8, 8),
    r("MU", "Mauritius", 230, NO_TRUNK, 7, 8),
    r("MV", "Maldives", 960, NO_TRUNK, 7, 7),
    r("MW", "Malawi", 265, "0", 7, 9),
    r("MX", "Mexico", 52, NO_TRUNK, 10, 10).patterns(MX),
    r("MY", "Malaysia", 60, "0", 8, 10),
    r("MZ", "Mozambique", 258, NO_TRUNK, 8, 9),
    r("NA", "Namibia", 264, "0", 8, 10),
    r("NC", "New Caledonia", 687, NO_TRUNK, 6, 6),
    r("NE", "Niger", 227, NO_TRUNK, 8, 8),
    r("NF", "Norfolk Island", 672, NO_TRUNK, 5, 6),
    r("NG", "Nigeria", 234, "0", 7, 10),
    r("NI", "Nicaragua", 505, NO_TRUNK, 8, 8),
    r("NL", "Netherlands", 31, "0", 9, 9).patterns(NL),
    r("NO", "Norway", 47, NO_TRUNK, 8, 8).patterns(NO),
    r("NP", "Nepal", 977, "0", 8, 10),
    r("NR", "Nauru", 674, NO_TRUNK, 7, 7),
    r("NU", "Niue", 683, NO_TRUNK, 4, 7),
    r("NZ", "New Zealand", 64, "0", 8, 10).patterns(NZ),
    r("OM", "Oman", 968, NO_TRUNK, 8, 8),
    r("PA", "Panama", 507, NO_TRUNK, 7, 8),
    r("PE", "Peru", 51, "0", 8, 9),
    r("PF", "French Polynesia", 689, NO_TRUNK, 8, 8),
    r("PG", "Papua New Guinea", 675, NO_TRUNK, 7, 8),
    r("PH", "Philippines", 63, "0", 8, 10),
    r("PK", "Pakistan", 92, "0", 9, 10),
    r("PL", "Poland", 48, NO_TRUNK, 9, 9).patterns(PL),
    r("PM", "St. Pierre & Miquelon", 508, "0", 6, 6),
    nanp("PR", "Puerto Rico", &["787", "939"]),
    r("PS", "Palestinian Territories", 970, "0", 8, 9),
    r("PT", "Portugal", 351, NO_TRUNK, 9, 9).patterns(PT),
    r("PW", "Palau", 680, NO_TRUNK, 7, 7),
    r("PY", "Paraguay", 595, "0", 8, 9),
    r("QA", "Qatar", 974, NO_TRUNK, 7, 8),
    r("RE", "Réunion", 262, "0", 9, 9).patterns(FR),
    r("RO", "Romania", 40, "0", 9, 9),
    r("RS", "Serbia", 381, "0", 7, 9),
    r("RU", "Russia", 7, "8", 10, 10).patterns(RU),
    r("RW", "Rwanda", 250, "0", 9, 9),
    r("SA", "Saudi Arabia", 966, "0", 9, 9),
    r("SB", "Solomon Islands", 677, NO_TRUNK, 5, 7),
    r("SC", "Seychelles", 248, NO_TRUNK, 7, 7),
    r("SD", "Sudan", 249, "0", 9, 9),
    r("SE", "Sweden", 46, "0", 7, 9).patterns(SE),
    r("SG", "Singapore", 65, NO_TRUNK, 8, 8).patterns(SG),
    r("SH", "St. Helena", 290, NO_TRUNK, 4, 5),
    r("SI", "Slovenia", 386, "0", 8, 8),
    r("SJ", "Svalbard & Jan Mayen", 47, NO_TRUNK, 8, 8)
        .secondary(&["79"])
        .sharing(&["4", "59", "9"])
        .patterns(NO),
    r("SK", "Slovakia", 421, "0", 9, 9).patterns(PT),
    r("SL", "Sierra Leone", 232, "0", 8, 8),
    r("SM", "San Marino", 378, NO_TRUNK, 6, 10),
    r("SN", "Senegal", 221, NO_TRUNK, 9, 9),
    r("SO", "Somalia", 252, "0", 7, 9),
    r("SR", "Suriname", 597, NO_TRUNK, 6, 7),
    r("SS", "South Sudan", 211, "0", 9, 9),
    r("ST", "São Tomé & Príncipe", 239, NO_TRUNK, 7, 7),
    r("SV", "El Salvador", 503, NO_TRUNK, 7, 8),
    nanp("SX", "Sint Maarten", &["721"]),
    r("SY", "Syria", 963, "0", 8, 9),
    r("SZ", "Eswatini", 268, NO_TRUNK, 8, 8),
    r("TA", "Tristan da Cunha", 290, NO_TRUNK, 4, 5).secondary(&["8"]),
    nanp("TC", "Turks & Caicos Islands", &["649"]),
    r("TD", "Chad", 235, NO_TRUNK, 8, 8),
    r("TG", "Togo", 228, NO_TRUNK, 8, 8),
    r("TH", "Thailand", 66, "0", 8, 9),
    r("TJ", "Tajikistan", 992, NO_TRUNK, 9, 9),
    r("TK", "Tokelau", 690, NO_TRUNK, 4, 7),
    r("TL", "Timor-Leste", 670, NO_TRUNK, 7, 8),
    r("TM", "Turkmenistan", 993, "8", 8, 8),
    r("TN", "Tunisia", 216, NO_TRUNK, 8, 8),
    r("TO", "Tonga", 676, NO_TRUNK, 5, 7),
    r("TR", "Türkiye", 90, "0", 10, 10).patterns(TR),
    nanp("TT", "Trinidad & Tobago", &["868"]),
    r("TV", "Tuvalu", 688, NO_TRUNK, 5, 7),
    r("TW", "Taiwan", 886, "0", 8, 9),
    r("TZ", "Tanzania", 255, "0", 9, 9),
    r("UA", "Ukraine", 380, "0", 9, 9).patterns(UA),
    r("UG", "Uganda", 256, "0", 9, 9),
    r("US", "United States", 1, NO_TRUNK, 10, 10).patterns(NANP),
    r("UY", "Uruguay", 598, "0", 8, 8),
    r("UZ", "Uzbekistan", 998, NO_TRUNK, 9, 9),
    r("VA", "Vatican City", 39, NO_TRUNK, 6, 11)
        .secondary(&["06698"])
        .sharing(&["3"])
        .patterns(IT),
    nanp("VC", "St. Vincent & Grenadines", &["784"]),
    r("VE", "Venezuela", 58, "0", 10, 10),
    nanp("VG", "British Virgin Islands", &["284"]),
    nanp("VI", "U.S. Virgin Islands", &["340"]),
    r("VN", "Vietnam", 84, "0", 9, 10),
    r("VU", "Vanuatu", 678, NO_TRUNK, 5, 7),
    r("WF", "Wallis & Futuna", 681, NO_TRUNK, 6, 6),
    r("WS", "Samoa", 685, NO_TRUNK, 5, 7),
    r("XK", "Kosovo", 383, "0", 8, 9),
    r("YE", "Yemen", 967, "0", 7, 9),
    r("YT", "Mayotte", 262, "0", 9, 9)
        .secondary(&["269", "63"])
        .patterns(FR),
    r("ZA", "South Africa", 27, "0", 9, 9).patterns(ZA),
    r("ZM", "Zambia", 260, "0", 9, 9),
    r("ZW", "Zimbabwe", 263, "0", 9, 10),
];

/// Look up a region by its (uppercase) two-letter code
pub(crate) fn region(code: &str) -> Option<&'static Region> {
    REGIONS
        .binary_search_by(|r| r.code.cmp(code))
        .ok()
        .map(|i| &REGIONS[i])
}

/// Resolve the region `nsn` belongs to under `calling_code`
///
/// `preferred` is the region the number is being read in, if any.
pub(crate) fn resolve(
    calling_code: u16,
    nsn: &str,
    preferred: Option<&'static Region>,
) -> Option<&'static Region> {
    if let Some(region) = preferred {
        if region.calling_code == calling_code
            && !region.main
            && region.accepts_len(nsn)
            && region.owns(nsn)
        {
            return Some(region);
        }
    }
    let mut main = None;
    for region in REGIONS.iter().filter(|r| r.calling_code == calling_code) {
        if region.main {
            main = Some(region);
        } else if region.claims(nsn) {
            return Some(region);
        }
    }
    main
}

/// Whether `digits` is an assigned country calling code
pub(crate) fn is_calling_code(digits: &str) -> Option<u16> {
    if digits.starts_with('0') {
        return None;
    }
    let code: u16 = digits.parse().ok()?;
    REGIONS
        .iter()
        .any(|r| r.calling_code == code && r.main)
        .then_some(code)
}
