use std::ops::RangeInclusive;

pub mod distribution;

/// `n` evenly spaced points over `range`. Both endpoints are hit exactly.
pub fn linspace(range: RangeInclusive<f64>, n: usize) -> impl ExactSizeIterator<Item = f64> {
    let (start, end) = range.into_inner();
    #[allow(clippy::cast_precision_loss)]
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| {
        if n > 1 && i == n - 1 {
            end
        } else {
            #[allow(clippy::cast_precision_loss)]
            let i = i as f64;
            start + step * i
        }
    })
}

/// Replace every non-finite entry with the closest preceding finite one. A leading run of
/// non-finite entries takes the first finite value instead.
///
/// Densities that diverge at an endpoint of their support (_e.g._, Beta with α < 1 at 0) end up
/// reported as the density one grid step inside.
pub fn patch_non_finite(values: &mut [f64]) {
    let Some(first) = values.iter().position(|v| v.is_finite()) else {
        values.fill(0.0);
        return;
    };
    let mut last = values[first];
    values[..first].fill(last);
    for v in &mut values[first..] {
        if v.is_finite() {
            last = *v;
        } else {
            *v = last;
        }
    }
}

/// Force a sampled CDF into `[0, 1]` and make it non-decreasing.
pub fn monotone_probability(values: &mut [f64]) {
    let mut running = 0.0_f64;
    for v in values {
        // NaN fails both comparisons and collapses onto the running value.
        let clamped = if *v > 1.0 {
            1.0
        } else if *v >= 0.0 {
            *v
        } else {
            0.0
        };
        running = running.max(clamped);
        *v = running;
    }
}
