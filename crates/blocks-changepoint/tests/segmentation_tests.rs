//! End-to-end segmentation scenarios

mod common;

use approx::assert_relative_eq;
use blocks_changepoint::{
    bayesian_blocks, default_priors, BackgroundIntegral, BatchEventSegmenter, BayesianBlocks,
    BayesianBlocksBuilder, Diagnostic, EventStream, FitnessModel, FitnessStrategy, StepEvaluation,
};
use blocks_core::{default_backend, Error, Result, ScalarBackend};
use common::*;

fn detector(p0: f64) -> BayesianBlocks<ScalarBackend> {
    BayesianBlocks::new(ScalarBackend, p0).unwrap()
}

#[test]
fn test_constant_rate_is_one_block() {
    let times = evenly_spaced(1000, 0.0, 1.0);
    let seg = detector(0.05).segment(&times, 0.0, 1.0).unwrap();

    assert_eq!(seg.edges(), &[0.0, 1.0]);
    assert_eq!(seg.change_points(), &[0, 1000]);
}

#[test]
fn test_aggressive_prior_splits_off_first_cell() {
    // At p0 = 0.99 only the first prior is negative, so isolating the first
    // event is the one split that pays
    let n = 1000;
    let times = evenly_spaced(n, 0.0, 1.0);
    let edges = detector(0.99).segment(&times, 0.0, 1.0).unwrap().into_edges();

    assert_eq!(edges.len(), 3);
    assert_eq!(edges[0], 0.0);
    assert_relative_eq!(edges[1], 1.0 / n as f64, epsilon = 1e-12);
    assert_eq!(edges[2], 1.0);
}

#[test]
fn test_conservative_prior_keeps_noise_in_one_block() {
    let times = uniform_events(200, 0.0, 1.0, 7);
    let edges = detector(1e-10).segment(&times, 0.0, 1.0).unwrap().into_edges();
    assert_eq!(edges, vec![0.0, 1.0]);
}

#[test]
fn test_more_permissive_prior_never_gives_fewer_blocks() {
    let times = piecewise_process(&[(0.0, 1.0, 200.0), (1.0, 1.5, 600.0), (1.5, 3.0, 250.0)], 11);

    let mut previous = 0;
    for p0 in [1e-8, 1e-4, 0.01, 0.05, 0.3, 0.9] {
        let count = detector(p0).segment(&times, 0.0, 3.0).unwrap().block_count();
        assert!(count >= previous, "p0 = {p0}: {count} blocks after {previous}");
        previous = count;
    }
}

#[test]
fn test_step_rate_change_points() {
    let times = piecewise_process(&[(0.0, 1.0, 100.0), (1.0, 1.2, 2000.0), (1.2, 2.0, 100.0)], 3);
    let seg = detector(0.05).segment(&times, 0.0, 2.0).unwrap();
    let edges = seg.edges();

    assert!(edges.len() >= 4, "edges: {edges:?}");
    let near = |t: f64| edges.iter().any(|&e| (e - t).abs() < 0.05);
    assert!(near(1.0), "no edge near the rise: {edges:?}");
    assert!(near(1.2), "no edge near the fall: {edges:?}");
}

#[test]
fn test_burst_over_uniform_background() {
    let times = background_with_burst(1000, 0.505, 10, 1e-5, 42);
    let seg = detector(0.05).segment(&times, 0.0, 1.0).unwrap();
    assert!(seg.edges().len() >= 3);

    let global_rate = times.len() as f64;
    let curve = seg.light_curve(&times);
    let burst = curve
        .blocks()
        .iter()
        .filter(|b| b.start >= 0.5 && b.stop <= 0.51)
        .map(|b| b.rate())
        .fold(0.0, f64::max);

    assert!(
        burst > 10.0 * global_rate,
        "burst rate {burst} vs global {global_rate}"
    );
    assert_eq!(curve.total_counts(), times.len());
}

#[test]
fn test_spread_burst_is_below_detection() {
    // Ten extra events spread over [0.5, 0.51] only double the local rate:
    // about 4 nats of likelihood against two priors of about 6 each
    let mut times = uniform_events(1000, 0.0, 1.0, 42);
    times.extend((0..10).map(|j| 0.5 + 0.01 * (j as f64 + 0.5) / 10.0));
    times.sort_by(|a, b| a.partial_cmp(b).unwrap());
    times.dedup();

    let seg = detector(0.05).segment(&times, 0.0, 1.0).unwrap();
    assert_eq!(seg.edges(), &[0.0, 1.0]);
}

#[test]
fn test_duplicate_events_are_rejected() {
    let mut times = uniform_events(100, 0.0, 1.0, 5);
    let duplicate = times[40];
    times.insert(41, duplicate);

    let err = detector(0.05).segment(&times, 0.0, 1.0).unwrap_err();
    assert!(matches!(err, Error::InputOrdering(_)));
}

#[test]
fn test_events_outside_interval_are_rejected() {
    let times = [0.2, 0.4, 1.6, 1.8];
    let err = detector(0.05).segment(&times, 0.0, 1.0).unwrap_err();
    assert!(matches!(err, Error::InputOrdering(_)));
}

#[test]
fn test_zero_and_one_event() {
    let edges = bayesian_blocks(&[], 0.0, 10.0, 0.05, None, FitnessModel::Poisson).unwrap();
    assert_eq!(edges, vec![0.0, 10.0]);

    let edges = bayesian_blocks(&[4.2], 0.0, 10.0, 0.05, None, FitnessModel::Poisson).unwrap();
    assert_eq!(edges, vec![0.0, 10.0]);
}

#[test]
fn test_invalid_probability_fails_before_any_work() {
    let err = bayesian_blocks(&[0.5], 0.0, 1.0, 0.0, None, FitnessModel::Poisson).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
}

#[test]
fn test_linear_background_matches_unweighted() {
    // B(x) = 2x only rescales time, which shifts every candidate equally
    let times = background_with_burst(500, 0.3, 20, 1e-4, 9);
    let plain = detector(0.05).segment(&times, 0.0, 1.0).unwrap();

    let background = |x: f64| 2.0 * x;
    let weighted = detector(0.05)
        .segment_with_background(&times, 0.0, 1.0, &background)
        .unwrap();

    assert_eq!(weighted.edges(), plain.edges());
}

#[test]
fn test_background_explains_rising_rate() {
    // Quantiles of a density proportional to t on [0, 1]
    let n = 1000;
    let times: Vec<f64> = (0..n).map(|i| ((i as f64 + 0.5) / n as f64).sqrt()).collect();

    let plain = detector(0.05).segment(&times, 0.0, 1.0).unwrap();
    assert!(plain.block_count() > 1);

    // Expected cumulative counts n * x^2 turn the events into a unit-rate grid
    let background = move |x: f64| n as f64 * x * x;
    let weighted = detector(0.05)
        .segment_with_background(&times, 0.0, 1.0, &background)
        .unwrap();
    assert_eq!(weighted.edges(), &[0.0, 1.0]);
}

/// Poisson fitness written out against the cell edges
struct PoissonReplica;

impl FitnessStrategy for PoissonReplica {
    fn priors(&self, n: usize, p0: f64) -> Result<Vec<f64>> {
        Ok(default_priors(n, p0))
    }

    fn evaluate(&self, r: usize, edges: &[f64]) -> Result<StepEvaluation> {
        let t_stop = edges[edges.len() - 1];
        let tail = t_stop - edges[r + 1];
        let fitness: Vec<f64> = (0..=r)
            .map(|k| {
                let counts = (r - k + 1) as f64;
                let duration = (t_stop - edges[k]) - tail;
                counts * (counts / duration).ln()
            })
            .collect();

        let whole = Diagnostic::new(fitness[0], edges[0], edges[r + 1]);
        Ok(StepEvaluation::new(fitness).with_diagnostics(vec![whole]))
    }
}

#[test]
fn test_custom_strategy_reproduces_poisson() {
    let times = piecewise_process(&[(0.0, 2.0, 50.0), (2.0, 2.5, 400.0), (2.5, 4.0, 50.0)], 17);
    let detector = detector(0.05);

    let expected = detector.segment(&times, 0.0, 4.0).unwrap();
    let custom = detector
        .segment_with(&times, 0.0, 4.0, None, FitnessModel::Custom(&PoissonReplica))
        .unwrap();

    assert_eq!(custom.edges(), expected.edges());
    assert!(expected.peak().is_none());
    assert!(custom.peak().is_some());
}

struct Failing;

impl FitnessStrategy for Failing {
    fn priors(&self, n: usize, _p0: f64) -> Result<Vec<f64>> {
        Ok(vec![1.0; n])
    }

    fn evaluate(&self, r: usize, _edges: &[f64]) -> Result<StepEvaluation> {
        if r == 3 {
            return Err(anyhow::anyhow!("likelihood did not converge").into());
        }
        Ok(StepEvaluation::new(vec![0.0; r + 1]))
    }
}

#[test]
fn test_custom_strategy_errors_propagate() {
    let times = evenly_spaced(10, 0.0, 1.0);
    let err = detector(0.05)
        .segment_with(&times, 0.0, 1.0, None, FitnessModel::Custom(&Failing))
        .unwrap_err();

    assert!(matches!(err, Error::Other(_)));
    assert!(err.to_string().contains("did not converge"));
}

#[test]
fn test_default_backend_agrees_with_scalar() {
    let times = piecewise_process(&[(0.0, 1.0, 300.0), (1.0, 1.1, 3000.0), (1.1, 2.0, 300.0)], 23);

    let scalar = detector(0.05).segment(&times, 0.0, 2.0).unwrap();
    let simd = BayesianBlocks::new(default_backend(), 0.05)
        .unwrap()
        .segment(&times, 0.0, 2.0)
        .unwrap();

    assert_eq!(simd.edges(), scalar.edges());
}

#[test]
fn test_deterministic() {
    let times = uniform_events(500, -3.0, 5.0, 31);
    let detector = BayesianBlocksBuilder::new()
        .false_positive_rate(0.2)
        .build()
        .unwrap();

    let first = detector.segment(&times, -3.0, 5.0).unwrap();
    let second = detector.segment(&times, -3.0, 5.0).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_light_curve_conserves_events() {
    let segments = [(10.0, 20.0, 20.0), (20.0, 21.0, 300.0), (21.0, 40.0, 20.0)];
    let times = piecewise_process(&segments, 8);
    let seg = detector(0.01).segment(&times, 10.0, 40.0).unwrap();
    let curve = seg.light_curve(&times);

    assert_eq!(curve.len(), seg.block_count());
    assert_eq!(curve.total_counts(), times.len());

    let table = curve.to_string();
    assert!(table.starts_with("#Tstart Tstop counts\n"));
    assert_eq!(table.lines().count(), seg.block_count() + 1);
}

#[test]
fn test_batch_matches_individual_runs() {
    let a = uniform_events(300, 0.0, 1.0, 1);
    let b = background_with_burst(300, 0.7, 15, 1e-4, 2);
    let c = Vec::new();
    let streams = [
        EventStream::new(&a, 0.0, 1.0),
        EventStream::new(&b, 0.0, 1.0),
        EventStream::new(&c, 0.0, 1.0),
    ];

    let detector = detector(0.05);
    let batch = detector.segment_batch(&streams).unwrap();

    assert_eq!(batch.len(), 3);
    for (stream, result) in streams.iter().zip(&batch) {
        let single = detector
            .segment(stream.times, stream.t_start, stream.t_stop)
            .unwrap();
        assert_eq!(&single, result);
    }
}

#[test]
fn test_batch_reports_first_failure() {
    let good = uniform_events(50, 0.0, 1.0, 4);
    let bad = [0.5, 0.2];
    let streams = [EventStream::new(&good, 0.0, 1.0), EventStream::new(&bad, 0.0, 1.0)];

    let err = detector(0.05).segment_batch(&streams).unwrap_err();
    assert!(matches!(err, Error::InputOrdering(_)));
}

#[test]
fn test_background_trait_object() {
    struct Flat;

    impl BackgroundIntegral for Flat {
        fn integral(&self, x: f64) -> f64 {
            x
        }
    }

    let times = uniform_events(100, 0.0, 1.0, 12);
    let plain = detector(0.05).segment(&times, 0.0, 1.0).unwrap();
    let weighted = detector(0.05)
        .segment_with(&times, 0.0, 1.0, Some(&Flat), FitnessModel::Poisson)
        .unwrap();

    assert_eq!(weighted.edges(), plain.edges());
}
