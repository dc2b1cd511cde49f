use tsalign_resample::{
    EdgeBehavior, InterpolationMode, ResampleConfig, ResampleError, TimeSeries, resample,
    resample_slices,
};

fn run(
    driving_t: &[f64],
    driving_v: &[f64],
    reference_t: &[f64],
    reference_v: &[f64],
    edge: EdgeBehavior,
) -> Result<tsalign_resample::Resampled, ResampleError> {
    resample_slices(
        driving_t,
        driving_v,
        reference_t,
        reference_v,
        edge,
        InterpolationMode::Linear,
    )
}

#[test]
fn error_empty_reference() {
    let result = run(&[0.0], &[0.0], &[], &[], EdgeBehavior::ZeroHold);
    assert_eq!(result, Err(ResampleError::EmptyReference));
}

#[test]
fn error_empty_reference_even_with_empty_driving() {
    let result = run(&[], &[], &[], &[], EdgeBehavior::Ignore);
    assert_eq!(result, Err(ResampleError::EmptyReference));
}

#[test]
fn error_length_mismatch_driving() {
    let result = run(&[0.0, 1.0], &[0.0], &[0.0], &[0.0], EdgeBehavior::Ignore);
    assert_eq!(
        result,
        Err(ResampleError::LengthMismatch {
            field: "driving",
            expected: 2,
            got: 1,
        })
    );
}

#[test]
fn error_length_mismatch_reference() {
    let result = run(&[0.0], &[0.0], &[0.0], &[0.0, 1.0], EdgeBehavior::Ignore);
    assert_eq!(
        result,
        Err(ResampleError::LengthMismatch {
            field: "reference",
            expected: 1,
            got: 2,
        })
    );
}

#[test]
fn error_unsorted_reference() {
    let result = run(
        &[0.0],
        &[0.0],
        &[0.0, 2.0, 1.0],
        &[0.0, 0.0, 0.0],
        EdgeBehavior::Ignore,
    );
    assert_eq!(
        result,
        Err(ResampleError::NotSorted {
            series: "reference",
            index: 2,
        })
    );
}

#[test]
fn error_unsorted_driving() {
    let result = run(&[3.0, 1.0], &[0.0, 0.0], &[0.0], &[0.0], EdgeBehavior::Ignore);
    assert_eq!(
        result,
        Err(ResampleError::NotSorted {
            series: "driving",
            index: 1,
        })
    );
}

#[test]
fn error_non_finite_driving_time() {
    let result = run(
        &[0.0, f64::INFINITY],
        &[0.0, 0.0],
        &[0.0],
        &[0.0],
        EdgeBehavior::Ignore,
    );
    assert_eq!(
        result,
        Err(ResampleError::NonFiniteTime {
            series: "driving",
            index: 1,
        })
    );
}

#[test]
fn error_zero_width_low_boundary_under_extrapolate() {
    let result = run(
        &[-1.0],
        &[0.0],
        &[0.0, 0.0, 1.0],
        &[1.0, 2.0, 3.0],
        EdgeBehavior::Extrapolate,
    );
    assert!(matches!(
        result,
        Err(ResampleError::ZeroWidthInterval { lo: 0, hi: 1, .. })
    ));
}

#[test]
fn error_zero_width_high_boundary_under_extrapolate() {
    let result = run(
        &[5.0],
        &[0.0],
        &[0.0, 1.0, 1.0],
        &[1.0, 2.0, 3.0],
        EdgeBehavior::Extrapolate,
    );
    assert!(matches!(
        result,
        Err(ResampleError::ZeroWidthInterval { lo: 1, hi: 2, .. })
    ));
}

#[test]
fn duplicate_boundary_is_fine_without_extrapolation() {
    let result = run(
        &[-1.0, 0.5, 5.0],
        &[0.0; 3],
        &[0.0, 1.0, 1.0],
        &[1.0, 2.0, 3.0],
        EdgeBehavior::ZeroHold,
    )
    .unwrap();
    assert_eq!(result.y(), &[1.0, 1.5, 3.0]);
}

#[test]
fn no_output_is_ever_nan_for_finite_input() {
    let driving = TimeSeries::new(&[-5.0, 0.0, 0.5, 1.0, 9.0], &[0.0; 5]).unwrap();
    let reference = TimeSeries::new(&[0.0, 1.0], &[3.0, 4.0]).unwrap();
    let config = ResampleConfig::new().with_edge(EdgeBehavior::Extrapolate);
    let out = resample(&driving, &reference, &config).unwrap();
    assert!(out.y().iter().all(|v| v.is_finite()));
    assert!(out.dt().iter().all(|v| v.is_finite()));
}
