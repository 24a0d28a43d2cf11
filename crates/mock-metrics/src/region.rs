//! Countries shown in the regional breakdown.

/// A country entry in the regional breakdown table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code.
    pub code: &'static str,
    /// English display name.
    pub name: &'static str,
}

const fn country(code: &'static str, name: &'static str) -> Country {
    Country { code, name }
}

/// Countries in the order the regional breakdown reports them.
pub const COUNTRIES: [Country; 18] = [
    country("US", "United States"),
    country("CA", "Canada"),
    country("MX", "Mexico"),
    country("BR", "Brazil"),
    country("AR", "Argentina"),
    country("GB", "United Kingdom"),
    country("DE", "Germany"),
    country("FR", "France"),
    country("CN", "China"),
    country("IN", "India"),
    country("JP", "Japan"),
    country("AU", "Australia"),
    country("ZA", "South Africa"),
    country("NG", "Nigeria"),
    country("EG", "Egypt"),
    country("RU", "Russia"),
    country("KR", "South Korea"),
    country("SG", "Singapore"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn country_codes_are_unique() {
        let codes: HashSet<_> = COUNTRIES.iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), COUNTRIES.len());
    }

    #[test]
    fn country_codes_are_two_uppercase_letters() {
        for entry in COUNTRIES {
            assert_eq!(entry.code.len(), 2, "{entry:?}");
            assert!(entry.code.chars().all(|c| c.is_ascii_uppercase()), "{entry:?}");
        }
    }
}
