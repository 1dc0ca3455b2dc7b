use dodeca_shape::Shape;
use serde_json::{Value, json};

pub fn shape_json(shape: Shape) -> Value {
    json!({
        "index": shape.to_index(),
        "name": shape.name(),
        "icon": shape.icon_name(),
    })
}

pub fn print_json_or_exit(payload: &Value, label: &str) {
    let rendered = serde_json::to_string_pretty(payload).unwrap_or_else(|err| {
        eprintln!("error: failed to render {label} json: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
}

pub fn parse_shape_or_exit(name: &str) -> Shape {
    name.parse().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}
