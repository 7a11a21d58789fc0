use crate::tests::utils::parse_selections;
use crate::SelectionKey;

#[test]
fn field_key_includes_alias_and_name() {
    let selections = parse_selections("{ id boss: manager { id } }");

    assert_eq!(
        SelectionKey::of(&selections[0]),
        Some(SelectionKey::Field { alias: None, name: "id" }),
    );
    assert_eq!(
        SelectionKey::of(&selections[1]),
        Some(SelectionKey::Field { alias: Some("boss"), name: "manager" }),
    );
}

#[test]
fn inline_fragment_key_is_its_type_condition() {
    let selections = parse_selections("{ ... on User { id } ... { id } }");

    assert_eq!(
        SelectionKey::of(&selections[0]),
        Some(SelectionKey::InlineFragment { type_condition: Some("User") }),
    );
    assert_eq!(
        SelectionKey::of(&selections[1]),
        Some(SelectionKey::InlineFragment { type_condition: None }),
    );
}

#[test]
fn fragment_spreads_have_no_key() {
    let selections = parse_selections("{ ...UserFields }");
    assert_eq!(SelectionKey::of(&selections[0]), None);
}

#[test]
fn keys_display_as_graphql_source() {
    let selections = parse_selections(
        "{ id boss: manager { id } ... on User { id } ... { id } }",
    );
    let displayed: Vec<String> =
        selections.iter()
            .filter_map(SelectionKey::of)
            .map(|key| key.to_string())
            .collect();

    assert_eq!(displayed, vec!["id", "boss: manager", "... on User", "..."]);
}
