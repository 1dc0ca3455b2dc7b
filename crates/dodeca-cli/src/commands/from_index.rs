use crate::support::{print_json_or_exit, shape_json};
use dodeca_shape::Shape;

pub fn run(index: i64, json_output: bool) {
    let shape = Shape::from_index(index).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });

    if json_output {
        print_json_or_exit(&shape_json(shape), "from-index");
    } else {
        println!("{shape}");
    }
}
