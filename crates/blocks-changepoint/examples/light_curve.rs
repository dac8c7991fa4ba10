//! Segment an event list and print its Bayesian Blocks light curve
//!
//! Usage: `light_curve [EVENTS_FILE] [P0]`
//!
//! `EVENTS_FILE` holds one arrival time per line (lines starting with `#` are
//! skipped). Without it a synthetic flare over a flat background is used.
//! Set `RUST_LOG=blocks_changepoint=debug` to follow the pipeline.

use anyhow::{bail, Context};
use blocks_changepoint::BayesianBlocksBuilder;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn read_events(path: &str) -> anyhow::Result<Vec<f64>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            line.parse::<f64>()
                .with_context(|| format!("bad event time {line:?}"))
        })
        .collect()
}

/// 20 counts/s background with a 400 counts/s flare between 40 s and 45 s
fn synthetic_events() -> anyhow::Result<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(2013);
    let mut times = Vec::new();
    for (start, stop, rate) in [(0.0, 40.0, 20.0), (40.0, 45.0, 400.0), (45.0, 100.0, 20.0)] {
        let waiting = Exp::new(rate).context("invalid rate")?;
        let mut t = start + waiting.sample(&mut rng);
        while t < stop {
            times.push(t);
            t += waiting.sample(&mut rng);
        }
    }
    Ok(times)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (times, t_start, t_stop) = match args.next() {
        Some(path) => {
            let times = read_events(&path)?;
            let (Some(&first), Some(&last)) = (times.first(), times.last()) else {
                bail!("{path} holds no events");
            };
            (times, first, last)
        }
        None => (synthetic_events()?, 0.0, 100.0),
    };
    let p0: f64 = match args.next() {
        Some(p0) => p0.parse().context("P0 must be a number")?,
        None => 1e-3,
    };

    info!(n_events = times.len(), p0, "segmenting");
    let detector = BayesianBlocksBuilder::new().false_positive_rate(p0).build()?;
    let segmentation = detector.segment(&times, t_start, t_stop)?;

    eprintln!("{segmentation}");
    print!("{}", segmentation.light_curve(&times));
    Ok(())
}
