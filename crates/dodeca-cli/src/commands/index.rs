use crate::support::{parse_shape_or_exit, print_json_or_exit, shape_json};

pub fn run(name: String, json_output: bool) {
    let shape = parse_shape_or_exit(&name);

    if json_output {
        print_json_or_exit(&shape_json(shape), "index");
    } else {
        println!("{}", shape.to_index());
    }
}
