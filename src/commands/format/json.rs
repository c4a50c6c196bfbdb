//! JSON building and the success envelope

use serde::Serialize;
use serde_json::Value;

use mdp_core::error::Result;

/// Wrap `data` in the success envelope
pub fn success_envelope(data: Value) -> Value {
    serde_json::json!({
        "ok": true,
        "data": data,
    })
}

/// Print the success envelope as pretty JSON
pub fn print_success(data: Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&success_envelope(data))?);
    Ok(())
}

/// Serialize `entity`, merge in the fields of each `computed` object, then drop `omit` keys
pub fn entity_json(entity: &impl Serialize, computed: &[Value], omit: &[&str]) -> Result<Value> {
    let mut value = serde_json::to_value(entity)?;
    if let Some(obj) = value.as_object_mut() {
        for extra in computed {
            if let Some(fields) = extra.as_object() {
                obj.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        for key in omit {
            obj.remove(*key);
        }
    }
    Ok(value)
}
