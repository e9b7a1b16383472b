use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_FINDINGS);
    assert_ne!(EXIT_SUCCESS, EXIT_FATAL);
    assert_ne!(EXIT_FINDINGS, EXIT_FATAL);
}

#[test]
fn fatal_exit_code_is_two() {
    assert_eq!(EXIT_FATAL, 2);
}
