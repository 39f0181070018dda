use crate::{
    to_bool_e, to_i64_e, to_string_e, to_u8_e,
    traits::DynValue,
    value::{Value, indirect::resolve, resolve_alias},
};
use chrono::{FixedOffset, TimeDelta, TimeZone};

// ---- helpers -----------------------------------------------------------

fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

#[derive(Debug)]
struct Username(String);

impl DynValue for Username {
    fn type_name(&self) -> &'static str {
        "Username"
    }

    fn as_basic(&self) -> Option<Value> {
        Some(Value::Text(self.0.clone()))
    }
}

#[derive(Debug)]
struct Opaque;

impl DynValue for Opaque {
    fn type_name(&self) -> &'static str {
        "Opaque"
    }
}

// ---- construction ------------------------------------------------------

#[test]
fn from_impls_pick_the_width_variant() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(-7_i8), Value::Int8(-7));
    assert_eq!(Value::from(-7_i64), Value::Int64(-7));
    assert_eq!(Value::from(7_u16), Value::Uint16(7));
    assert_eq!(Value::from(7_usize), Value::Uint64(7));
    assert_eq!(Value::from(-7_isize), Value::Int64(-7));
    assert_eq!(Value::from(2.5_f32), Value::Float32(2.5));
    assert_eq!(Value::from("hi"), Value::Text("hi".into()));
    assert_eq!(Value::from(String::from("hi")), Value::Text("hi".into()));
}

#[test]
fn calendar_enums_normalize_to_ordinals() {
    assert_eq!(Value::from(chrono::Weekday::Sun), Value::Int64(0));
    assert_eq!(Value::from(chrono::Weekday::Tue), Value::Int64(2));
    assert_eq!(Value::from(chrono::Month::January), Value::Int64(1));
    assert_eq!(Value::from(chrono::Month::December), Value::Int64(12));
}

#[test]
fn options_become_reference_chains() {
    assert_eq!(Value::from(None::<i32>), Value::Option(None));

    let chained = Value::from(Some(5_i32));
    let (resolved, ok) = resolve(&chained);
    assert_eq!(resolved, &Value::Int32(5));
    assert!(ok);
}

#[test]
fn json_values_adapt_losslessly() {
    let json: serde_json::Value = serde_json::from_str(
        r#"{"name":"gohan","level":9000,"ratio":0.5,"tags":["a","b"],"missing":null}"#,
    )
    .unwrap();
    let value = Value::from(json);

    let entries = value.as_map().unwrap();
    let lookup = |name: &str| {
        entries
            .iter()
            .find(|(k, _)| k.as_text() == Some(name))
            .map(|(_, v)| v)
            .unwrap()
    };

    assert_eq!(lookup("name"), &Value::Text("gohan".into()));
    // numbers stay textual so each target kind decides how to read them
    assert_eq!(lookup("level"), &Value::number("9000"));
    assert_eq!(lookup("ratio"), &Value::number("0.5"));
    assert_eq!(lookup("missing"), &Value::Null);
    assert_eq!(
        lookup("tags"),
        &Value::List(vec![v_txt("a"), v_txt("b")])
    );

    assert_eq!(to_i64_e(lookup("level")).unwrap(), 9000);
}

// ---- identity ----------------------------------------------------------

#[test]
fn type_names_follow_the_payload() {
    assert_eq!(Value::Bool(true).type_name(), "bool");
    assert_eq!(Value::Uint8(1).type_name(), "u8");
    assert_eq!(Value::number("1").type_name(), "number");
    assert_eq!(Value::Null.type_name(), "nil");
    assert_eq!(Value::dynamic(Opaque).type_name(), "Opaque");
}

#[test]
fn numeric_variants_are_flagged() {
    assert!(Value::Int8(1).is_numeric());
    assert!(Value::Float64(0.5).is_numeric());
    assert!(!Value::number("1").is_numeric());
    assert!(!Value::Bool(true).is_numeric());
    assert!(Value::Null.is_null());
}

#[test]
fn dynamic_payloads_compare_by_identity() {
    let a = Value::dynamic(Opaque);
    let b = Value::dynamic(Opaque);
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
}

// ---- alias resolution --------------------------------------------------

#[test]
fn alias_resolution_applies_to_dynamic_payloads_only() {
    assert_eq!(resolve_alias(&v_txt("plain")), None);
    assert_eq!(resolve_alias(&Value::Null), None);
    assert_eq!(resolve_alias(&Value::dynamic(Opaque)), None);
    assert_eq!(
        resolve_alias(&Value::dynamic(Username("ana".into()))),
        Some(v_txt("ana"))
    );
}

#[test]
fn aliases_coerce_like_their_basic_value() {
    let wrapped = Value::dynamic(Username("255".into()));
    assert_eq!(to_string_e(&wrapped).unwrap(), "255");
    assert_eq!(to_u8_e(&wrapped).unwrap(), 255);
    assert!(to_bool_e(&wrapped).unwrap_err().is_parse());

    let plain = v_txt("255");
    assert_eq!(to_u8_e(&wrapped).unwrap(), to_u8_e(&plain).unwrap());
}

// ---- serialization -----------------------------------------------------

#[test]
fn values_serialize_for_diagnostics() {
    let offset = FixedOffset::east_opt(0).unwrap();
    let value = Value::Map(vec![
        (v_txt("flag"), Value::Bool(true)),
        (v_txt("count"), Value::number("42")),
        (v_txt("nothing"), Value::Null),
        (
            v_txt("when"),
            Value::Timestamp(offset.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap()),
        ),
        (v_txt("wait"), Value::Duration(TimeDelta::seconds(1))),
        (v_txt("items"), Value::List(vec![Value::Int64(1)])),
    ]);

    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(json["flag"], serde_json::json!(true));
    assert_eq!(json["count"], serde_json::json!(42));
    assert_eq!(json["nothing"], serde_json::Value::Null);
    assert_eq!(json["when"], serde_json::json!("2009-11-10T23:00:00+00:00"));
    assert_eq!(json["wait"], serde_json::json!(1_000_000_000_i64));
    assert_eq!(json["items"], serde_json::json!([1]));
}
