/// `singular` for one item, otherwise `plural`
pub fn to_plural<'a>(singular: &'a str, plural: &'a str, count: usize) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// Upper-cased initials of the first two words
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_plural() {
        assert_eq!(to_plural("detection", "3 detections", 1), "detection");
        assert_eq!(to_plural("detection", "3 detections", 3), "3 detections");
        assert_eq!(to_plural("Data Model", "Data Models", 0), "Data Models");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("jane doe"), "JD");
        assert_eq!(initials("Ada"), "A");
        assert_eq!(initials(""), "");
    }
}
