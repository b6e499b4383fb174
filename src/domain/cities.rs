/// The fixed list of cities a full crawl walks through, in crawl order.
pub const TOP_CITIES: &[&str] = &[
    "london",
    "manchester",
    "birmingham",
    "leeds",
    "liverpool",
    "newcastle",
    "sheffield",
    "bristol",
    "nottingham",
    "southampton",
    "portsmouth",
    "brighton",
    "leicester",
    "coventry",
    "hull",
    "stoke",
    "plymouth",
    "wolverhampton",
    "derby",
    "swansea",
    "cardiff",
    "middlesbrough",
    "sunderland",
    "oxford",
    "cambridge",
    "york",
    "bath",
    "exeter",
    "norwich",
    "canterbury",
    "gloucester",
    "peterborough",
    "preston",
    "blackpool",
    "bournemouth",
    "reading",
    "milton keynes",
    "blackburn",
    "bolton",
    "luton",
    "northampton",
    "swindon",
    "southend",
    "wigan",
    "warrington",
    "huddersfield",
    "ipswich",
    "colchester",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicate_cities() {
        let mut seen = std::collections::HashSet::new();
        for city in TOP_CITIES {
            assert!(seen.insert(*city), "duplicate city: {}", city);
        }
    }

    #[test]
    fn test_cities_are_lowercase() {
        for city in TOP_CITIES {
            assert_eq!(*city, city.to_lowercase());
            assert!(!city.is_empty());
        }
    }
}
