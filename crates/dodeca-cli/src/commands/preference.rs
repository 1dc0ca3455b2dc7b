use crate::support::{parse_shape_or_exit, print_json_or_exit, shape_json};
use dodeca_shape::{DecodedPreference, SHAPE_PREFERENCE_KEY, decode_preference};
use serde_json::json;

pub fn run(raw: Option<String>, default: String, json_output: bool) {
    let default = parse_shape_or_exit(&default);
    let DecodedPreference { shape, substituted } = decode_preference(raw.as_deref(), default);
    log::debug!("decoded {SHAPE_PREFERENCE_KEY:?} = {shape} (substituted: {substituted})");

    if json_output {
        let payload = json!({
            "key": SHAPE_PREFERENCE_KEY,
            "raw": raw,
            "default": default.name(),
            "substituted": substituted,
            "shape": shape_json(shape),
        });
        print_json_or_exit(&payload, "preference");
    } else {
        println!("dodeca-shape preference");
        println!("  Key: {SHAPE_PREFERENCE_KEY}");
        println!("  Shape: {shape}");
        if substituted {
            println!("  Default substituted: {default}");
        }
    }
}
