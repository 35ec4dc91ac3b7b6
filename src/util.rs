// Formatting and console helpers
use serde::Serialize;
use wasm_bindgen::JsValue;

/// Integral values print without a fraction, others with at most two decimals.
pub fn format_num(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v.fract() == 0.0 {
        return format!("{}", v as i64);
    }
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Logs `value` as an expandable object; falls back to `Debug` text.
pub fn clog_json<T: Serialize + std::fmt::Debug>(label: &str, value: &T) {
    let parsed = serde_json::to_string(value)
        .ok()
        .and_then(|s| js_sys::JSON::parse(&s).ok());
    match parsed {
        Some(obj) => web_sys::console::log_2(&JsValue::from_str(label), &obj),
        None => clog(&format!("{} {:?}", label, value)),
    }
}
