use ce_core::{BorderMode, map_index};

/// Correlates `signal` with a centred kernel of `2 * radius + 1` taps.
///
/// `out[i] = sum_k signal[i + k - radius] * kernel[k]`. Every kernel used in
/// this workspace is symmetric, so this equals true convolution.
pub fn convolve_f32(
    signal: &[f32],
    kernel: &[f32],
    radius: usize,
    border: &BorderMode<f32>,
    out: &mut [f32],
) {
    assert_eq!(out.len(), signal.len(), "out must match signal length");
    assert_eq!(
        kernel.len(),
        2 * radius + 1,
        "kernel len must be 2*radius+1"
    );

    let n = signal.len();
    if n == 0 {
        return;
    }

    let interior_start = radius.min(n);
    let interior_end = n.saturating_sub(radius).max(interior_start);

    for i in (0..interior_start).chain(interior_end..n) {
        out[i] = border_tap_sum(signal, kernel, radius, i, border);
    }

    // Full kernel footprint lies inside the signal.
    for (i, out_i) in out
        .iter_mut()
        .enumerate()
        .take(interior_end)
        .skip(interior_start)
    {
        let window = &signal[i - radius..=i + radius];
        *out_i = window.iter().zip(kernel).map(|(&s, &k)| s * k).sum();
    }
}

fn border_tap_sum(
    signal: &[f32],
    kernel: &[f32],
    radius: usize,
    i: usize,
    border: &BorderMode<f32>,
) -> f32 {
    let mut acc = 0.0f32;
    for (k, &kv) in kernel.iter().enumerate() {
        let idx = i as isize + k as isize - radius as isize;
        let v = match map_index(idx, signal.len(), border) {
            Some(j) => signal[j],
            None => match border {
                BorderMode::Constant(c) => *c,
                _ => unreachable!("non-constant borders map every index"),
            },
        };
        acc += v * kv;
    }
    acc
}
