use proptest::prelude::*;

/// Strategy for generating strings made only of reference delimiters
pub fn delimiter_only_strategy() -> impl Strategy<Value = String> {
    "[, \r\n\t]{0,32}"
}

/// Strategy for generating fragments that are neither ids nor GUIDs
pub fn malformed_fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z][a-zA-Z_]{0,8}",
        Just("-1".to_string()),
        Just("99999999999".to_string()),
        Just("umb://document/nope".to_string()),
    ]
}

/// A fragment of a picker value, tagged with the id it should resolve to
#[derive(Debug, Clone)]
pub enum Fragment {
    Valid(i32),
    Malformed(String),
}

/// Strategy for generating mixed valid and malformed fragments
pub fn fragments_strategy(max_id: i32) -> impl Strategy<Value = Vec<Fragment>> {
    prop::collection::vec(
        prop_oneof![
            (0..max_id).prop_map(Fragment::Valid),
            malformed_fragment_strategy().prop_map(Fragment::Malformed),
        ],
        0..24,
    )
}

/// Strategy for picking a delimiter
pub fn delimiter_strategy() -> impl Strategy<Value = char> {
    prop_oneof![Just(','), Just(' '), Just('\r'), Just('\n'), Just('\t')]
}
