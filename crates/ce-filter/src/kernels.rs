/// Normalized 1D Gaussian of an explicit odd size.
///
/// `g[i] ∝ exp(-(i - r)^2 / (2 sigma^2))` with `r = (size - 1) / 2`, scaled
/// so that `sum(g) == 1`.
pub fn gaussian_kernel(size: usize, sigma: f32) -> Vec<f32> {
    assert!(size % 2 == 1, "gaussian kernel size must be odd");
    assert!(
        sigma.is_finite() && sigma > 0.0,
        "sigma must be > 0 and finite"
    );

    let radius = (size / 2) as isize;
    let denom = 2.0 * sigma * sigma;
    let mut g: Vec<f32> = (-radius..=radius)
        .map(|x| {
            let xf = x as f32;
            (-(xf * xf) / denom).exp()
        })
        .collect();

    let sum: f32 = g.iter().sum();
    for gi in &mut g {
        *gi /= sum;
    }
    g
}

/// Binomial smoothing taps of the given length (`[1, 2, 1]`, `[1, 4, 6, 4, 1]`, ...).
pub fn binomial_kernel(size: usize) -> Vec<f32> {
    assert!(size >= 1, "binomial kernel needs at least one tap");
    let mut taps = vec![1.0f32];
    for _ in 1..size {
        taps = convolve_taps(&taps, &[1.0, 1.0]);
    }
    taps
}

/// Separable pair `(second_derivative, smoothing)` of the Sobel operator of
/// aperture `size` (odd, >= 3). The 2D second derivative along one axis is
/// `second_derivative` on that axis and `smoothing` on the other.
pub fn sobel_second_derivative(size: usize) -> (Vec<f32>, Vec<f32>) {
    assert!(
        size >= 3 && size % 2 == 1,
        "sobel aperture must be odd and >= 3"
    );
    let d2 = convolve_taps(&binomial_kernel(size - 2), &[1.0, -2.0, 1.0]);
    (d2, binomial_kernel(size))
}

fn convolve_taps(a: &[f32], b: &[f32]) -> Vec<f32> {
    let mut out = vec![0.0f32; a.len() + b.len() - 1];
    for (i, &av) in a.iter().enumerate() {
        for (j, &bv) in b.iter().enumerate() {
            out[i + j] += av * bv;
        }
    }
    out
}
