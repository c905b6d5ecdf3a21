use kira_calorimetry::math::stats::{median, median_present, sub_present};

#[test]
fn median_odd_even() {
    let mut v1 = vec![3.0, 1.0, 2.0];
    assert_eq!(median(&mut v1), Some(2.0));
    let mut v2 = vec![4.0, 1.0, 2.0, 3.0];
    assert_eq!(median(&mut v2), Some(2.5));
}

#[test]
fn median_empty_is_none() {
    let mut v: Vec<f64> = Vec::new();
    assert_eq!(median(&mut v), None);
}

#[test]
fn median_present_skips_missing_and_nan() {
    let values = vec![Some(10.0), None, Some(30.0), Some(f64::NAN), Some(20.0), None];
    assert_eq!(median_present(values), Some(20.0));
    assert_eq!(median_present(vec![None, None]), None);
}

#[test]
fn sub_present_propagates_missing() {
    assert_eq!(sub_present(Some(5.0), Some(2.0)), Some(3.0));
    assert_eq!(sub_present(None, Some(2.0)), None);
    assert_eq!(sub_present(Some(5.0), None), None);
}
