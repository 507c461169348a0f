use super::*;

#[test]
fn email_shape() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@sub.example.org"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a@.b"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@@b.co"));
    assert!(!is_valid_email("a b@c.de"));
    assert!(!is_valid_email(""));
}

#[test]
fn name_length_bounds() {
    assert!(is_valid_name(" A "));
    assert!(!is_valid_name("   "));
    assert!(is_valid_name(&"é".repeat(50)));
    assert!(!is_valid_name(&"x".repeat(51)));
}

#[test]
fn first_name_charset() {
    assert!(is_valid_first_name_format("Jean-Luc"));
    assert!(is_valid_first_name_format("Zoë O'Neil"));
    assert!(is_valid_first_name_format("Ørjan"));
    assert!(!is_valid_first_name_format("R2D2"));
    assert!(!is_valid_first_name_format("Łukasz"));
    assert!(!is_valid_first_name_format("×"));
    assert!(!is_valid_first_name_format(""));
}

#[test]
fn title_case_keeps_separators() {
    assert_eq!(title_case("  jEAN-luc  "), "Jean-Luc");
    assert_eq!(title_case("senior  product manager"), "Senior  Product Manager");
    assert_eq!(title_case("élodie"), "Élodie");
    assert_eq!(title_case("   "), "");
}

#[test]
fn last_name_and_email_formatting() {
    assert_eq!(format_last_name(" dupont "), "DUPONT");
    assert_eq!(normalize_email(" Ada@Example.COM "), "ada@example.com");
}
