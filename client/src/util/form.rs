//! Form serialization to a JSON object.
//!
//! Named fields become string members. A name that appears more than once
//! becomes an array of its values in document order.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde_json::{Map, Value};

/// Fold `(name, value)` pairs into a JSON object.
pub fn fields_to_json<I, K, V>(fields: I) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut map = Map::new();
    for (name, value) in fields {
        let name = name.into();
        if name.is_empty() {
            continue;
        }
        let value = Value::String(value.into());
        match map.get_mut(&name) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                map.insert(name, value);
            }
        }
    }
    Value::Object(map)
}

/// Serialize the successful controls of `form`. File inputs are skipped.
#[cfg(feature = "hydrate")]
pub fn serialize_form(form: &web_sys::HtmlFormElement) -> Value {
    use wasm_bindgen::JsCast;

    let Ok(data) = web_sys::FormData::new_with_form(form) else {
        return Value::Object(Map::new());
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return Value::Object(Map::new());
    };
    let fields = entries.filter_map(Result::ok).filter_map(|entry| {
        let pair = entry.dyn_into::<js_sys::Array>().ok()?;
        Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
    });
    fields_to_json(fields)
}

/// Resolve the form that dispatched a submit event.
#[cfg(feature = "hydrate")]
pub fn event_form(ev: &leptos::ev::SubmitEvent) -> Option<web_sys::HtmlFormElement> {
    use wasm_bindgen::JsCast;

    ev.target()?.dyn_into::<web_sys::HtmlFormElement>().ok()
}

/// Whether a `class` attribute value contains `class`.
pub fn has_class(class_attr: &str, class: &str) -> bool {
    class_attr.split_whitespace().any(|c| c == class)
}
