//! Strict parse-and-validate step for external payloads.
//!
//! Policy: reject, never clamp. A single malformed element fails the whole
//! fetch as `IoError::Malformed` with a JSON-pointer-style location — no
//! silent zero-substitution, no NaN/negative values reaching the ranking.
//!
//! Any `total` present in the payload is ignored; totals are recomputed from
//! the three counts. Duplicate country codes are a data-quality smell, not a
//! rejection: they are logged and passed through (the ranking tolerates them).

use std::collections::BTreeSet;

use serde_json::Value;

use medal_core::{CountryMedals, MedalRecord};

use crate::{IoError, IoResult};

/// Parse a medals payload: a JSON array of objects, each with a non-empty
/// string `code` and non-negative integer `gold`/`silver`/`bronze`.
pub fn parse_medals(bytes: &[u8]) -> IoResult<Vec<MedalRecord>> {
    let root: Value = serde_json::from_slice(bytes)?;
    let arr = root
        .as_array()
        .ok_or_else(|| IoError::malformed("/", "expected a JSON array of medal objects"))?;

    let mut out = Vec::with_capacity(arr.len());
    let mut seen: BTreeSet<String> = BTreeSet::new();

    for (i, element) in arr.iter().enumerate() {
        let obj = element
            .as_object()
            .ok_or_else(|| IoError::malformed(format!("/{i}"), "expected an object"))?;

        let code = obj
            .get("code")
            .and_then(Value::as_str)
            .ok_or_else(|| IoError::malformed(format!("/{i}/code"), "expected a string"))?;
        if code.is_empty() {
            return Err(IoError::malformed(format!("/{i}/code"), "must be non-empty"));
        }
        if !seen.insert(code.to_string()) {
            tracing::warn!(code, index = i, "duplicate country code in payload");
        }

        let gold = count_field(obj, i, "gold")?;
        let silver = count_field(obj, i, "silver")?;
        let bronze = count_field(obj, i, "bronze")?;

        out.push(MedalRecord::from_counts(CountryMedals {
            code: code.to_string(),
            gold,
            silver,
            bronze,
        }));
    }

    Ok(out)
}

/// One medal-count field: present, an integer (no floats), non-negative,
/// and within `u32`.
fn count_field(
    obj: &serde_json::Map<String, Value>,
    index: usize,
    name: &str,
) -> IoResult<u32> {
    let pointer = || format!("/{index}/{name}");
    let value = obj
        .get(name)
        .ok_or_else(|| IoError::malformed(pointer(), "missing field"))?;

    match value.as_u64() {
        Some(n) if n <= u32::MAX as u64 => Ok(n as u32),
        Some(_) => Err(IoError::malformed(pointer(), "count out of range")),
        None => {
            let msg = if value.as_i64().is_some() {
                "count must be non-negative"
            } else if value.is_number() {
                "count must be an integer"
            } else {
                "expected a number"
            };
            Err(IoError::malformed(pointer(), msg))
        }
    }
}

/// Parse a flags payload: a JSON object mapping country code → flag asset.
pub fn parse_flags(bytes: &[u8]) -> IoResult<std::collections::BTreeMap<String, String>> {
    let root: Value = serde_json::from_slice(bytes)?;
    let obj = root
        .as_object()
        .ok_or_else(|| IoError::malformed("/", "expected a JSON object"))?;

    let mut out = std::collections::BTreeMap::new();
    for (code, value) in obj {
        let flag = value
            .as_str()
            .ok_or_else(|| IoError::malformed(format!("/{code}"), "expected a string"))?;
        out.insert(code.clone(), flag.to_string());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer_of(err: IoError) -> String {
        match err {
            IoError::Malformed { pointer, .. } => pointer,
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn well_formed_payload_parses_with_recomputed_totals() {
        let payload = br#"[
            {"code":"NOR","gold":16,"silver":8,"bronze":13},
            {"code":"GER","gold":12,"silver":10,"bronze":5,"total":999}
        ]"#;
        let records = parse_medals(payload).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].total, 37);
        // Payload `total` is ignored, never trusted.
        assert_eq!(records[1].total, 27);
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_medals(b"[]").unwrap().is_empty());
    }

    #[test]
    fn non_array_root_is_rejected() {
        let err = parse_medals(br#"{"medals":[]}"#).unwrap_err();
        assert_eq!(pointer_of(err), "/");
    }

    #[test]
    fn negative_count_rejects_whole_fetch() {
        let payload = br#"[
            {"code":"AAA","gold":1,"silver":0,"bronze":0},
            {"code":"BBB","gold":-2,"silver":0,"bronze":0}
        ]"#;
        let err = parse_medals(payload).unwrap_err();
        assert_eq!(pointer_of(err), "/1/gold");
    }

    #[test]
    fn float_count_is_rejected() {
        let err =
            parse_medals(br#"[{"code":"AAA","gold":1.5,"silver":0,"bronze":0}]"#).unwrap_err();
        assert_eq!(pointer_of(err), "/0/gold");
    }

    #[test]
    fn missing_field_is_rejected() {
        let err = parse_medals(br#"[{"code":"AAA","gold":1,"silver":0}]"#).unwrap_err();
        assert_eq!(pointer_of(err), "/0/bronze");
    }

    #[test]
    fn wrong_typed_count_is_rejected() {
        let err =
            parse_medals(br#"[{"code":"AAA","gold":"9","silver":0,"bronze":0}]"#).unwrap_err();
        assert_eq!(pointer_of(err), "/0/gold");
    }

    #[test]
    fn empty_code_is_rejected() {
        let err = parse_medals(br#"[{"code":"","gold":1,"silver":0,"bronze":0}]"#).unwrap_err();
        assert_eq!(pointer_of(err), "/0/code");
    }

    #[test]
    fn duplicate_codes_pass_through() {
        let payload = br#"[
            {"code":"DUP","gold":1,"silver":0,"bronze":0},
            {"code":"DUP","gold":2,"silver":0,"bronze":0}
        ]"#;
        assert_eq!(parse_medals(payload).unwrap().len(), 2);
    }

    #[test]
    fn invalid_json_maps_to_malformed() {
        assert!(matches!(
            parse_medals(b"not json"),
            Err(IoError::Malformed { .. })
        ));
    }

    #[test]
    fn flags_object_parses_and_rejects_non_strings() {
        let flags = parse_flags(br#"{"NOR":"no.svg","GER":"de.svg"}"#).unwrap();
        assert_eq!(flags.get("NOR").map(String::as_str), Some("no.svg"));
        assert!(parse_flags(br#"{"NOR":7}"#).is_err());
        assert!(parse_flags(br#"["NOR"]"#).is_err());
    }
}
