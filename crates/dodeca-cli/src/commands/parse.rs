use crate::support::{print_json_or_exit, shape_json};
use dodeca_shape::Shape;
use serde_json::{Value, json};

pub fn run(name: String, json_output: bool) {
    let found = Shape::parse_or_none(&name);

    if json_output {
        let payload = json!({
            "input": name,
            "found": found.is_some(),
            "shape": found.map_or(Value::Null, shape_json),
        });
        print_json_or_exit(&payload, "parse");
    } else {
        println!("dodeca-shape parse");
        match found {
            Some(shape) => println!("  Shape: {shape}"),
            None => println!("  Shape: not found ({name:?})"),
        }
    }

    if found.is_none() {
        std::process::exit(1);
    }
}
