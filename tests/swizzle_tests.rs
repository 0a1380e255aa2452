// tests/swizzle_tests.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vecn::{get_vector_type, vec2, vec3, vec4, Value, VecError, Vector};

fn vec5(xs: [f64; 5]) -> Vector {
    get_vector_type(5).unwrap().call(xs).unwrap()
}

#[test]
fn single_value_access_by_name() {
    let v = vec4(4.0, 5.0, 6.0, 7.0);
    assert_eq!(v.get("x"), Some(Value::Number(4.0)));
    assert_eq!(v.get("y"), Some(Value::Number(5.0)));
    assert_eq!(v.get("z"), Some(Value::Number(6.0)));
    assert_eq!(v.get("w"), Some(Value::Number(7.0)));
}

#[test]
fn swizzles_have_the_requested_dimension() {
    let v = vec3(1.0, 2.0, 3.0);
    assert!(matches!(v.get("x"), Some(Value::Number(_))));
    assert_eq!(v.swizzle_vector("xx").unwrap().dimension(), 2);
    assert_eq!(v.swizzle_vector("xxxx").unwrap().dimension(), 4);
    assert_eq!(v.swizzle_vector(&"x".repeat(20)).unwrap().dimension(), 20);
}

#[test]
fn no_swizzling_on_large_vectors() {
    let v = vec5([8.0, 9.0, 10.0, 11.0, 12.0]);
    assert_eq!(v.get("x"), None);
    assert_eq!(v.swizzle("xy"), None);
}

#[test]
fn no_swizzling_beyond_dimension() {
    let v = vec3(1.0, 2.0, 3.0);
    assert_eq!(v.get("w"), None);
    assert_eq!(v.get("xxyzxw"), None);
    assert_eq!(vec2(1.0, 2.0).get("rgb"), None);
}

#[test]
fn swizzles_gather_in_order() {
    let v1 = vec3(1.0, 2.0, 3.0);
    let v2 = vec4(4.0, 5.0, 6.0, 7.0);
    assert_eq!(v1.swizzle_vector("xyxxz").unwrap(), vec5([1.0, 2.0, 1.0, 1.0, 3.0]));
    assert_eq!(v2.swizzle_vector("wxz").unwrap(), vec3(7.0, 4.0, 6.0));
    assert_eq!(vec4(1.0, 2.0, 3.0, 4.0).get("wxz"), Some(Value::Vector(vec3(4.0, 1.0, 3.0))));
}

#[test]
fn swizzle_results_are_typed_by_the_registry() {
    let xy = vec3(1.0, 2.0, 3.0).swizzle_vector("xy").unwrap();
    assert_eq!(xy.vec_type(), &get_vector_type(2).unwrap());
}

#[test]
fn colour_and_texture_aliases() {
    let v = vec3(1.0, 2.0, 3.0);
    assert_eq!(v.swizzle_vector("rgr").unwrap(), vec3(1.0, 2.0, 1.0));
    assert_eq!(v.swizzle_vector("sps").unwrap(), vec3(1.0, 3.0, 1.0));
}

#[test]
fn mixed_alphabets_are_not_swizzles() {
    let mut v = vec3(1.0, 2.0, 3.0);
    assert_eq!(v.get("xg"), None);
    assert_eq!(v.set("xg", [1.0, 2.0]), Ok(false));
    assert_eq!(v, vec3(1.0, 2.0, 3.0));
}

#[test]
fn first_symbol_matches_index_zero() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let d: usize = rng.gen_range(2..=4);
        let xs: Vec<f64> = (0..d).map(|_| rng.gen_range(-10.0..10.0)).collect();
        let v = get_vector_type(d).unwrap().call(xs).unwrap();
        for key in ["x", "r", "s"] {
            assert_eq!(v.get(key), Some(Value::Number(v[0])));
        }
        assert_eq!(v.swizzle_vector("xy").unwrap().as_slice(), &[v[0], v[1]]);
        // a valid symbol that names a component past this vector
        if d < 4 {
            let past = &"xyzw"[d..d + 1];
            assert_eq!(v.get(past), None);
            assert_eq!(v.get(&format!("x{past}")), None);
        }
    }
}

#[test]
fn assignment_by_name() {
    let mut v = vec3(1.0, 2.0, 3.0);
    assert_eq!(v.set("z", 42.0), Ok(true));
    assert_eq!(v, vec3(1.0, 2.0, 42.0));
}

#[test]
fn assignment_through_swizzle() {
    let source = vec3(1.0, 2.0, 3.0);
    let mut v = vec3(1.0, 2.0, 3.0);
    v.set("xy", source.swizzle_vector("yy").unwrap()).unwrap();
    assert_eq!(v, vec3(2.0, 2.0, 3.0));

    let mut v = vec3(1.0, 2.0, 3.0);
    v.set("yz", vec2(9.0, 9.0)).unwrap();
    assert_eq!(v, vec3(1.0, 9.0, 9.0));

    let mut v = vec4(0.0, 0.0, 0.0, 0.0);
    v.set("abgr", [1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(v, vec4(4.0, 3.0, 2.0, 1.0));
}

#[test]
fn assignment_beyond_dimension_is_ignored() {
    let mut v = vec3(1.0, 2.0, 3.0);
    let copy = v.clone();
    assert_eq!(v.set("w", 5.0), Ok(false));
    assert_eq!(v, copy);
    assert_eq!(v.set("xw", [1.0, 2.0]), Ok(false));
    assert_eq!(v, copy);
}

#[test]
fn repeated_symbols_cannot_be_assigned() {
    let mut v = vec3(1.0, 2.0, 3.0);
    assert_eq!(
        v.set("xx", [1.0, 2.0]),
        Err(VecError::DuplicateSwizzle { swizzle: "xx".into() })
    );
    assert_eq!(v, vec3(1.0, 2.0, 3.0));
}

#[test]
fn assignment_with_invalid_types() {
    let mut v = vec3(1.0, 2.0, 3.0);
    assert!(matches!(v.set("x", true), Err(VecError::NonNumeric { .. })));
    assert!(matches!(v.set("x", "string"), Err(VecError::NonNumeric { .. })));
    assert!(matches!(v.set("x", Value::List(vec![])), Err(VecError::NonNumeric { .. })));

    let bad: Vec<Value> = vec![
        Value::from(vec![Value::from("a"), Value::from(1.0)]),
        Value::from(vec![Value::Null, Value::from(1.0)]),
        Value::from(vec![Value::from(0.0), Value::from(true)]),
        Value::from(vec![Value::List(vec![]), Value::from(1.0)]),
    ];
    for rhs in bad {
        assert!(matches!(v.set("xy", rhs), Err(VecError::NonNumeric { .. })));
    }
    assert_eq!(v, vec3(1.0, 2.0, 3.0));
}

#[test]
fn assignment_with_invalid_length() {
    let mut v = vec3(1.0, 2.0, 3.0);
    let zzz = v.swizzle_vector("zzz").unwrap();
    assert_eq!(
        v.set("xy", zzz),
        Err(VecError::LengthMismatch { expected: 2, got: 3 })
    );
    assert_eq!(v.set("xy", 4.0), Err(VecError::NotASequence { found: "Number" }));
    assert_eq!(v, vec3(1.0, 2.0, 3.0));
}
