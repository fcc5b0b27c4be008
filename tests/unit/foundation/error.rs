use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CadenceError::invalid_range("x")
            .to_string()
            .contains("invalid range:")
    );
    assert!(
        CadenceError::invalid_config("x")
            .to_string()
            .contains("invalid config:")
    );
    assert!(
        CadenceError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CadenceError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CadenceError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
