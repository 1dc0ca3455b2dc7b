use crate::support::{print_json_or_exit, shape_json};
use dodeca_shape::Shape;
use serde_json::{Value, json};

pub fn run(json_output: bool) {
    if json_output {
        let shapes: Vec<Value> = Shape::iter().map(shape_json).collect();
        print_json_or_exit(&json!({ "shapes": shapes }), "shape list");
        return;
    }

    println!("dodeca-shape list");
    for shape in Shape::iter() {
        println!(
            "  {}: {} ({})",
            shape.to_index(),
            shape,
            shape.icon_name()
        );
    }
}
