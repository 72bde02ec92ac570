///
/// # Integration Tests for quill-runtime
///
/// Exercises the value model the way generated code does: through the
/// re-exported runtime surface only, covering keyword identity, nil safety,
/// record construction and enumeration, protocol uniformity across object
/// literals and native maps, and member access with receiver binding.
///

use indexmap::IndexMap;

use quill_runtime::{
    Capability, Function, Keyword, MapKey, ObjectLiteral, PropertyKey, PropertyLookupError, Record,
    RuntimeConfig, Value, ValueMap, dot, init, record_keys, record_values,
};

fn object(entries: Vec<(&str, Value)>) -> Value {
    Value::from(ObjectLiteral::from_entries(entries))
}

/// What a generated `for key, value in record` loop would call
fn enumerate_record(record: &Value) -> Result<Vec<(Value, Value)>, PropertyLookupError> {
    let keys = dot(record, Capability::RecordKeys)?;
    let values = dot(record, Capability::RecordValues)?;
    let keys = keys.as_function().expect("keys slot").call(&[])?;
    let values = values.as_function().expect("values slot").call(&[])?;
    let keys = keys.as_list().unwrap_or_default().to_vec();
    let values = values.as_list().unwrap_or_default().to_vec();
    Ok(keys.into_iter().zip(values).collect())
}

#[test]
fn test_init_preloads_keywords() {
    let config = RuntimeConfig::from_toml_str(
        r#"
[runtime]
log_level = "error"
preload_keywords = ["it-preload-ok", "it-preload-error"]
"#,
    )
    .expect("valid config");

    let preloaded = init(&config).expect("init");
    assert_eq!(preloaded.len(), 2);
    assert_eq!(Keyword::get("it-preload-ok"), Some(preloaded[0]));
    assert_eq!(Keyword::for_name("it-preload-error"), preloaded[1]);

    // a second init keeps the installed subscriber and stays idempotent
    let again = init(&config).expect("second init");
    assert_eq!(again, preloaded);
}

#[test]
fn test_init_rejects_bad_level() {
    let config = RuntimeConfig {
        log_level: "chatty".to_string(),
        ..RuntimeConfig::default()
    };
    assert!(init(&config).is_err());
}

#[test]
fn test_keyword_identity_and_text() {
    let a = Keyword::for_name("it-foo");
    let b = Keyword::for_name("it-foo");
    let c = Keyword::for_name("it-bar");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(Keyword::for_name("foo").to_string(), "foo");
    assert_eq!(Value::from(a), Value::from(b));
}

#[test]
fn test_nil_safety() {
    let missing = dot(&object(vec![]), "anything").expect("lookup");
    assert!(missing.is_nil());
    assert_eq!(dot(&missing, Capability::TypeTag), Ok(Value::from("Nil")));

    let err = dot(&missing, "street").unwrap_err();
    assert_eq!(err.member, PropertyKey::from("street"));
    insta::assert_snapshot!(err.to_string(), @"Nil does not have property: street");
}

#[test]
fn test_record_round_trip() {
    let record = object(vec![("a", Value::Int(1)), ("b", Value::Int(2))]);
    assert_eq!(
        enumerate_record(&record).expect("enumerate"),
        vec![
            (Value::from("a"), Value::Int(1)),
            (Value::from("b"), Value::Int(2)),
        ]
    );

    let record = object(vec![("a", Value::Int(1)), ("a", Value::Int(2))]);
    assert_eq!(
        enumerate_record(&record).expect("enumerate"),
        vec![(Value::from("a"), Value::Int(2))]
    );
}

#[test]
fn test_protocol_uniformity() {
    let literal = ObjectLiteral::from_entries([("x", 1)]);
    let mut native: IndexMap<&str, i64> = IndexMap::new();
    native.insert("x", 1);

    assert_eq!(literal.keys().collect::<Vec<_>>(), vec![Value::from("x")]);
    assert_eq!(Record::keys(&native).collect::<Vec<_>>(), vec![Value::from("x")]);
    assert_eq!(literal.values().collect::<Vec<_>>(), vec![Value::Int(1)]);
    assert_eq!(Record::values(&native).collect::<Vec<_>>(), vec![Value::Int(1)]);

    let mut map = ValueMap::new();
    map.insert(MapKey::from("x"), Value::Int(1));
    let dynamic_map = Value::from(map);
    let dynamic_literal = Value::from(literal);
    for record in [&dynamic_literal, &dynamic_map] {
        assert_eq!(record_keys(record), Some(vec![Value::from("x")]));
        assert_eq!(record_values(record), Some(vec![Value::Int(1)]));
        assert_eq!(
            enumerate_record(record).expect("enumerate"),
            vec![(Value::from("x"), Value::Int(1))]
        );
    }
}

#[test]
fn test_member_access_semantics() {
    assert_eq!(dot(&object(vec![("a", Value::Int(5))]), "a"), Ok(Value::Int(5)));
    assert_eq!(dot(&object(vec![("a", Value::Null)]), "a"), Ok(Value::Nil));
    assert_eq!(dot(&object(vec![]), "missing"), Ok(Value::Nil));

    let greet = Function::new("greet", |this, _args| dot(this, "name"));
    let lee = object(vec![("name", Value::from("Lee")), ("greet", Value::from(greet))]);
    let bound = dot(&lee, "greet").expect("lookup");
    let bound = bound.as_function().expect("callable");
    assert!(bound.is_bound());
    assert_eq!(bound.call(&[]), Ok(Value::from("Lee")));
}

#[test]
fn test_keywords_as_tags() {
    let ok = Keyword::for_name("it-status-ok");
    let response = object(vec![
        ("status", Value::from(ok)),
        ("body", Value::from("hello")),
    ]);
    let status = dot(&response, "status").expect("lookup");
    assert_eq!(status, Value::from(Keyword::for_name("it-status-ok")));
    assert_eq!(dot(&status, "value"), Ok(Value::from("it-status-ok")));
}
