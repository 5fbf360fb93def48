use super::*;

#[test]
fn fixed_yields_values_in_order() {
    let mut src = FixedRandom::new(vec![0.1, 0.2, 0.3]);
    assert_eq!(src.unit(), 0.1);
    assert_eq!(src.unit(), 0.2);
    assert_eq!(src.unit(), 0.3);
}

#[test]
fn fixed_cycles_when_exhausted() {
    let mut src = FixedRandom::new(vec![0.4, 0.6]);
    src.unit();
    src.unit();
    assert_eq!(src.unit(), 0.4);
    assert_eq!(src.unit(), 0.6);
}

#[test]
fn fixed_empty_yields_zero() {
    let mut src = FixedRandom::new(Vec::new());
    assert_eq!(src.unit(), 0.0);
    assert_eq!(src.unit(), 0.0);
}

#[test]
fn thread_random_stays_in_unit_interval() {
    let mut src = ThreadRandom;
    for _ in 0..100 {
        let v = src.unit();
        assert!((0.0..1.0).contains(&v), "out of range: {v}");
    }
}
