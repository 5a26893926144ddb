//! Bracket-style query-string codec.
//!
//! `key[]=a&key[]=b` for lists, numbers and `true`/`false` literals coerced on
//! parse, keys sorted on output, strict percent-encoding.

use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Flat field name -> scalar or list of scalars
pub type ParamBag = Map<String, Value>;

const ARRAY_SUFFIX: &str = "[]";

/// Parses a query string. Never fails: malformed pieces decode to raw text or are skipped.
pub fn parse(query: &str) -> ParamBag {
    let trimmed = query.trim().trim_start_matches(&['?', '#', '&'][..]);

    let mut accumulator: BTreeMap<String, Value> = BTreeMap::new();

    for param in trimmed.split('&') {
        if param.is_empty() {
            continue;
        }

        let param = param.replace('+', " ");
        let (raw_key, raw_value) = match param.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (param.as_str(), None),
        };

        let key = decode(raw_key);
        let value = coerce(raw_value.map(decode));

        match key.strip_suffix(ARRAY_SUFFIX) {
            Some(name) => match accumulator.get_mut(name) {
                Some(Value::Array(items)) => items.push(value),
                Some(existing) => {
                    let previous = existing.take();
                    *existing = Value::Array(vec![previous, value]);
                }
                None => {
                    accumulator.insert(name.to_string(), Value::Array(vec![value]));
                }
            },
            // a repeated plain key keeps the last value
            None => {
                accumulator.insert(key, value);
            }
        }
    }

    accumulator.into_iter().collect()
}

/// Serializes a bag. Keys are sorted, empty lists are omitted, `null` becomes a bare key.
pub fn stringify(params: &ParamBag) -> String {
    let mut keys: Vec<&String> = params.keys().collect();
    keys.sort();

    let mut parts = Vec::new();
    for key in keys {
        let encoded_key = encode(key);
        match &params[key] {
            Value::Array(items) => {
                for item in items {
                    match item {
                        Value::Null => parts.push(format!("{encoded_key}{ARRAY_SUFFIX}")),
                        other => match scalar_text(other) {
                            Some(text) => parts.push(format!(
                                "{encoded_key}{ARRAY_SUFFIX}={}",
                                encode(&text)
                            )),
                            None => log::warn!("url params: nested value under '{key}' skipped"),
                        },
                    }
                }
            }
            Value::Null => parts.push(encoded_key),
            other => match scalar_text(other) {
                Some(text) => parts.push(format!("{encoded_key}={}", encode(&text))),
                None => log::warn!("url params: nested value under '{key}' skipped"),
            },
        }
    }

    parts.join("&")
}

/// Drops falsy values except numbers and booleans: `null` and the empty string go,
/// `0` and `false` stay. Lists are kept even when empty.
pub fn strip_falsy(params: ParamBag) -> ParamBag {
    params
        .into_iter()
        .filter(|(_, value)| match value {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        })
        .collect()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

fn decode(text: &str) -> String {
    urlencoding::decode(text)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| text.to_string())
}

fn coerce(value: Option<String>) -> Value {
    let Some(text) = value else {
        return Value::Null;
    };

    if let Some(number) = parse_number(&text) {
        return Value::Number(number);
    }

    match text.to_lowercase().as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(text),
    }
}

fn parse_number(text: &str) -> Option<Number> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (radix, digits) = match trimmed.get(..2) {
        Some("0x") | Some("0X") => (16, &trimmed[2..]),
        Some("0o") | Some("0O") => (8, &trimmed[2..]),
        Some("0b") | Some("0B") => (2, &trimmed[2..]),
        _ => (10, trimmed),
    };
    if radix != 10 {
        return u64::from_str_radix(digits, radix).ok().map(Number::from);
    }

    // f64::from_str also accepts "inf" and "nan"
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E');
    if !trimmed.chars().all(allowed) {
        return None;
    }

    let parsed: f64 = trimmed.parse().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    if parsed.fract() == 0.0 && parsed.abs() < 9_007_199_254_740_992.0 {
        return Some(Number::from(parsed as i64));
    }
    Number::from_f64(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: Value) -> ParamBag {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_round_trip_keeps_types() {
        let params = bag(json!({ "a": 1, "b": ["x", "y"], "c": true }));
        let query = stringify(&params);
        assert_eq!(query, "a=1&b[]=x&b[]=y&c=true");
        assert_eq!(parse(&query), params);
    }

    #[test]
    fn test_strip_falsy_keeps_zero_and_false() {
        let params = bag(json!({ "d": "", "e": false, "f": 0, "g": null, "h": [] }));
        let cleaned = strip_falsy(params);
        assert_eq!(cleaned, bag(json!({ "e": false, "f": 0, "h": [] })));
        assert_eq!(stringify(&cleaned), "e=false&f=0");
    }

    #[test]
    fn test_keys_are_sorted() {
        let params = bag(json!({ "pageSize": 25, "logTypes": ["AWS.ALB"], "page": 1 }));
        assert_eq!(stringify(&params), "logTypes[]=AWS.ALB&page=1&pageSize=25");
    }

    #[test]
    fn test_strict_encoding() {
        let params = bag(json!({ "nameContains": "a b&c!(x)*'~" }));
        assert_eq!(
            stringify(&params),
            "nameContains=a%20b%26c%21%28x%29%2A%27~"
        );
        assert_eq!(parse(&stringify(&params)), params);
    }

    #[test]
    fn test_parse_coercions() {
        let parsed = parse("?n=12&f=1.5&neg=-3&hex=0x1F&t=TRUE&s=abc&blank=&bare");
        assert_eq!(
            parsed,
            bag(json!({
                "n": 12,
                "f": 1.5,
                "neg": -3,
                "hex": 31,
                "t": true,
                "s": "abc",
                "blank": "",
                "bare": null
            }))
        );
    }

    #[test]
    fn test_parse_leaves_words_that_look_numeric_as_text() {
        let parsed = parse("a=inf&b=NaN&c=1e3&d=%20");
        assert_eq!(parsed["a"], json!("inf"));
        assert_eq!(parsed["b"], json!("NaN"));
        assert_eq!(parsed["c"], json!(1000));
        assert_eq!(parsed["d"], json!(" "));
    }

    #[test]
    fn test_plus_decodes_to_space() {
        assert_eq!(parse("q=hello+world")["q"], json!("hello world"));
    }

    #[test]
    fn test_repeated_keys() {
        let parsed = parse("tag[]=a&tag[]=b&page=1&page=2");
        assert_eq!(parsed["tag"], json!(["a", "b"]));
        assert_eq!(parsed["page"], json!(2));
    }

    #[test]
    fn test_array_elements_are_coerced() {
        assert_eq!(parse("ids[]=1&ids[]=x&ids[]=false")["ids"], json!([1, "x", false]));
    }

    #[test]
    fn test_malformed_input_is_tolerated() {
        let parsed = parse("&&=&%zz=%E0%A4%A&ok=1");
        assert_eq!(parsed["ok"], json!(1));
        assert_eq!(parsed[""], json!(""));
        assert!(parsed.contains_key("%zz"));
    }

    #[test]
    fn test_empty_query() {
        assert!(parse("").is_empty());
        assert!(parse("?").is_empty());
        assert_eq!(stringify(&ParamBag::new()), "");
    }

    #[test]
    fn test_null_inside_list() {
        let params = bag(json!({ "k": ["a", null] }));
        assert_eq!(stringify(&params), "k[]=a&k[]");
        assert_eq!(parse("k[]=a&k[]"), params);
    }
}
