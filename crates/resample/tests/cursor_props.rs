//! The resumable search must agree with a fresh search for every query.

use proptest::prelude::*;
use tsalign_resample::{
    EdgeBehavior, InterpolationMode, ResampleConfig, TimeSeries, find_lower_bound, resample,
};

/// Sorted integer-valued times, optionally with repeats.
fn arb_times(max_len: usize, allow_repeats: bool) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-500i32..500, 1..max_len).prop_map(move |mut v| {
        v.sort_unstable();
        if !allow_repeats {
            v.dedup();
        }
        v.into_iter().map(f64::from).collect()
    })
}

fn arb_edge() -> impl Strategy<Value = EdgeBehavior> {
    prop_oneof![
        Just(EdgeBehavior::Ignore),
        Just(EdgeBehavior::ZeroHold),
        Just(EdgeBehavior::Extrapolate),
    ]
}

fn arb_mode() -> impl Strategy<Value = InterpolationMode> {
    prop_oneof![
        Just(InterpolationMode::ZeroHold),
        Just(InterpolationMode::Linear),
    ]
}

/// Straightforward per-point model: full search from index 0 every time.
fn model(
    xt: &[f64],
    xv: &[f64],
    yt: &[f64],
    yv: &[f64],
    edge: EdgeBehavior,
    mode: InterpolationMode,
) -> Vec<(f64, f64, f64, f64)> {
    let last = yt.len() - 1;
    let (m_low, m_high) = if edge == EdgeBehavior::Extrapolate && last > 0 {
        (
            (yv[1] - yv[0]) / (yt[1] - yt[0]),
            (yv[last] - yv[last - 1]) / (yt[last] - yt[last - 1]),
        )
    } else {
        (0.0, 0.0)
    };

    let mut out = Vec::new();
    for (&t, &x) in xt.iter().zip(xv) {
        if t >= yt[0] && t <= yt[last] {
            let i = find_lower_bound(t, yt, 0);
            let (y, dt) = if yt[i] == t {
                (yv[i], 0.0)
            } else if mode == InterpolationMode::ZeroHold {
                (yv[i - 1], t - yt[i - 1])
            } else {
                let frac = (t - yt[i - 1]) / (yt[i] - yt[i - 1]);
                let dt = if (t - yt[i - 1]).abs() < (t - yt[i]).abs() {
                    t - yt[i - 1]
                } else {
                    t - yt[i]
                };
                (frac * yv[i] + (1.0 - frac) * yv[i - 1], dt)
            };
            out.push((x, y, t, dt));
        } else if edge == EdgeBehavior::ZeroHold {
            if t < yt[0] {
                out.push((x, yv[0], t, t - yt[0]));
            } else {
                out.push((x, yv[last], t, t - yt[last]));
            }
        } else if edge == EdgeBehavior::Extrapolate {
            if t < yt[0] {
                out.push((x, yv[0] + m_low * (t - yt[0]), t, t - yt[0]));
            } else {
                out.push((x, yv[last] + m_high * (t - yt[last]), t, t - yt[last]));
            }
        }
    }
    out
}

proptest! {
    #[test]
    fn resumable_search_matches_fresh_search(
        xt in arb_times(64, true),
        yt in arb_times(32, false),
        seed in 0u32..1000,
        edge in arb_edge(),
        mode in arb_mode(),
    ) {
        let xv: Vec<f64> = (0..xt.len()).map(|i| f64::from(seed) + i as f64).collect();
        let yv: Vec<f64> = (0..yt.len()).map(|i| ((i as u32 * 7 + seed) % 13) as f64).collect();

        let driving = TimeSeries::new(&xt, &xv).unwrap();
        let reference = TimeSeries::new(&yt, &yv).unwrap();
        let config = ResampleConfig::new().with_edge(edge).with_interpolation(mode);
        let out = resample(&driving, &reference, &config).unwrap();

        let rows: Vec<_> = out.iter().map(|p| (p.x, p.y, p.t, p.dt)).collect();
        prop_assert_eq!(rows, model(&xt, &xv, &yt, &yv, edge, mode));
    }

    #[test]
    fn output_never_longer_than_driving(
        xt in arb_times(64, true),
        yt in arb_times(32, false),
        edge in arb_edge(),
    ) {
        let xv = vec![0.0; xt.len()];
        let yv = vec![1.0; yt.len()];
        let driving = TimeSeries::new(&xt, &xv).unwrap();
        let reference = TimeSeries::new(&yt, &yv).unwrap();
        let out = resample(&driving, &reference, &ResampleConfig::new().with_edge(edge)).unwrap();

        prop_assert!(out.len() <= xt.len());
        if edge != EdgeBehavior::Ignore {
            prop_assert_eq!(out.len(), xt.len());
        }
    }
}
