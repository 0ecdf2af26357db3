// ---------------------------------------------------------------------------
// Smoothed trend curve (locally weighted linear regression)
// ---------------------------------------------------------------------------

/// Fraction of the points used as the smoothing neighbourhood.
const DEFAULT_SPAN: f64 = 0.6;

/// Number of evaluation points along the x range.
const CURVE_SAMPLES: usize = 60;

/// Fit a lowess-style trend through `(x, y)` pairs: at each of
/// [`CURVE_SAMPLES`] evaluation points a weighted linear regression over the
/// nearest [`DEFAULT_SPAN`] fraction of the data, tricube weights by distance.
///
/// Returns the curve as `[x, y]` points ordered by x. Fewer than two input
/// points yield an empty curve; zero x-spread yields a single flat segment
/// at the mean.
pub fn lowess(points: &[(f64, f64)]) -> Vec<[f64; 2]> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut sorted: Vec<(f64, f64)> = points.to_vec();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let x_min = sorted[0].0;
    let x_max = sorted[sorted.len() - 1].0;
    if (x_max - x_min).abs() < f64::EPSILON {
        let mean = sorted.iter().map(|p| p.1).sum::<f64>() / sorted.len() as f64;
        return vec![[x_min, mean], [x_max, mean]];
    }

    let k = ((DEFAULT_SPAN * sorted.len() as f64).ceil() as usize).clamp(2, sorted.len());

    (0..CURVE_SAMPLES)
        .map(|i| {
            let x = x_min + (x_max - x_min) * i as f64 / (CURVE_SAMPLES - 1) as f64;
            [x, local_fit(&sorted, x, k)]
        })
        .collect()
}

/// Weighted least-squares line over the `k` points nearest to `x`,
/// evaluated at `x`.
fn local_fit(sorted: &[(f64, f64)], x: f64, k: usize) -> f64 {
    let mut distances: Vec<(f64, usize)> = sorted
        .iter()
        .enumerate()
        .map(|(i, p)| ((p.0 - x).abs(), i))
        .collect();
    distances.sort_by(|a, b| a.0.total_cmp(&b.0));
    let neighbours = &distances[..k];
    let bandwidth = neighbours[k - 1].0.max(f64::EPSILON);

    let mut sw = 0.0;
    let mut swx = 0.0;
    let mut swy = 0.0;
    let mut swxx = 0.0;
    let mut swxy = 0.0;
    for &(dist, i) in neighbours {
        let w = tricube(dist / bandwidth);
        let (xi, yi) = sorted[i];
        sw += w;
        swx += w * xi;
        swy += w * yi;
        swxx += w * xi * xi;
        swxy += w * xi * yi;
    }

    let denom = sw * swxx - swx * swx;
    if denom.abs() < 1e-12 {
        // Neighbourhood is degenerate (all x equal); fall back to the mean.
        return swy / sw;
    }
    let slope = (sw * swxy - swx * swy) / denom;
    let intercept = (swy - slope * swx) / sw;
    slope * x + intercept
}

fn tricube(u: f64) -> f64 {
    let u = u.abs().min(1.0);
    let t = 1.0 - u * u * u;
    t * t * t
}
