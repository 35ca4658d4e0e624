use super::*;

#[test]
fn resolve_known_names() {
    assert_eq!(Type::resolve("string"), Ok(Type::String));
    assert_eq!(Type::resolve("any"), Ok(Type::Any));
    assert_eq!(Type::resolve("number"), Ok(Type::Number));
    assert_eq!(Type::resolve("bool"), Ok(Type::Boolean));
}

#[test]
fn resolve_ignores_case() {
    assert_eq!(Type::resolve("Bool"), Ok(Type::Boolean));
    assert_eq!(Type::resolve("NUMBER"), Ok(Type::Number));
    assert_eq!(Type::resolve("sTrInG"), Ok(Type::String));
}

#[test]
fn resolve_rejects_unknown_name() {
    let err = Type::resolve("Blob").unwrap_err();
    assert_eq!(err, UnknownType("Blob".to_owned()));
    assert_eq!(
        err.to_string(),
        "invalid type `Blob` (expected one of: string, any, number, bool)"
    );
}

#[test]
fn resolve_does_not_accept_long_boolean_name() {
    assert!(Type::resolve("boolean").is_err());
}

#[test]
fn serializes_as_declared_name() {
    let json = serde_json::to_string(&[Type::String, Type::Any, Type::Number, Type::Boolean])
        .unwrap();
    assert_eq!(json, r#"["string","any","number","bool"]"#);
}
