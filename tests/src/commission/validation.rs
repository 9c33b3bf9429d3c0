use commcalc_common::error::InputError;
use commcalc_common::input::{FormState, InputField};

#[test]
fn zero_toa_never_reaches_the_engine() {
    let form = FormState::new(Some(0.0), Some(16.0), Some(400.0));
    let err = form.validate().unwrap_err();

    assert!(err.is_fatal());
    assert_eq!(err, InputError::OutOfRange(vec![(InputField::Toa, 0.0)]));
}

#[test]
fn unset_average_is_a_warning() {
    let form = FormState::new(Some(15.0), None, Some(400.0));
    let err = form.validate().unwrap_err();

    assert!(!err.is_fatal());
    assert_eq!(err, InputError::Missing(vec![InputField::AvgPercent]));
}

#[test]
fn negative_weekly_margin_is_rejected() {
    let form = FormState::new(Some(15.0), Some(16.0), Some(-400.0));
    assert_eq!(
        form.validate().unwrap_err().fields(),
        vec![InputField::GmPerWeek]
    );
}

#[test]
fn reset_returns_to_all_unset() {
    let mut form = FormState::new(Some(15.0), Some(16.0), Some(400.0));
    assert!(form.validate().is_ok());

    form.reset();
    assert_eq!(
        form.validate().unwrap_err(),
        InputError::Missing(InputField::ALL.to_vec())
    );
}
