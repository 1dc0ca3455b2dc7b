//! Integration tests: index and name conversions over the whole shape set.

use dodeca_shape::{Shape, ShapeError};

#[test]
fn index_round_trips_from_integers() {
    for i in 0..5i64 {
        let shape = Shape::from_index(i).expect("index in range");
        assert_eq!(shape.to_index() as i64, i);
    }
}

#[test]
fn index_round_trips_from_shapes() {
    for shape in Shape::ALL {
        assert_eq!(Shape::from_index(shape.to_index() as i64), Ok(shape));
    }
}

#[test]
fn name_round_trips() {
    for shape in Shape::ALL {
        assert_eq!(Shape::parse_or_none(&shape.to_string()), Some(shape));
    }
}

#[test]
fn cross_scenario() {
    assert_eq!(Shape::parse_or_none("CROSS"), Some(Shape::Cross));
    assert_eq!(Shape::parse_or_none("cross"), None);
    assert_eq!(Shape::from_index(2), Ok(Shape::Cross));
    assert_eq!(Shape::Cross.to_index(), 2);

    let err = Shape::from_index(7).unwrap_err();
    assert_eq!(err, ShapeError::IndexOutOfRange { index: 7, len: 5 });
    assert_eq!(err.to_string(), "shape index 7 out of range (expected 0..5)");
}

#[test]
fn shapes_are_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            std::thread::spawn(move || {
                (0..5i64)
                    .map(|i| Shape::from_index((i + t) % 5).unwrap().to_index())
                    .sum::<usize>()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 10);
    }
}
