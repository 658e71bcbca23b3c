//! Name list split/join laws

use bibo_domain::{format_name_list, parse_name_list, PersonName};
use proptest::prelude::*;

fn name_part() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,10}( [A-Z]\\.)?"
}

proptest! {
    #[test]
    fn format_inverts_parse(
        people in prop::collection::vec((name_part(), name_part()), 1..6)
    ) {
        let input = people
            .iter()
            .map(|(family, given)| format!("{}, {}", family, given))
            .collect::<Vec<_>>()
            .join(" and ");

        let names = parse_name_list(&input);
        prop_assert_eq!(names.len(), people.len());
        prop_assert_eq!(format_name_list(&names), input);
    }

    #[test]
    fn parse_keeps_order(
        people in prop::collection::vec((name_part(), name_part()), 1..6)
    ) {
        let input = people
            .iter()
            .map(|(family, given)| format!("{}, {}", family, given))
            .collect::<Vec<_>>()
            .join(" and ");

        let families: Vec<String> = parse_name_list(&input)
            .iter()
            .filter_map(|n| n.family_name().map(str::to_string))
            .collect();
        let expected: Vec<String> = people.into_iter().map(|(family, _)| family).collect();
        prop_assert_eq!(families, expected);
    }
}

#[test]
fn test_mixed_forms_round_trip() {
    let input = "Smith, Alice and Plato and van der Berg, Jan";
    let names = parse_name_list(input);
    assert_eq!(names.len(), 3);
    assert_eq!(names[1], PersonName::new("Plato").unwrap());
    assert_eq!(names[2].family_name(), Some("van der Berg"));
    assert_eq!(format_name_list(&names), input);
}
