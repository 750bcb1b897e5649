//! Chebyshev series evaluation.
//!
//! Both the series and its derivative use the Clenshaw recurrence: the
//! derivative of `Σ c_k T_k(s)` is `Σ k·c_k U_{k-1}(s)`, which is again a
//! three-term recurrence over Chebyshev polynomials of the second kind.

/// `Σ c_k T_k(s)` for normalised time `s` in `[-1, 1]`.
pub fn clenshaw(coeffs: &[f64], s: f64) -> f64 {
    let Some((&c0, rest)) = coeffs.split_first() else {
        return 0.0;
    };
    let two_s = 2.0 * s;
    let (mut b1, mut b2) = (0.0, 0.0);
    for &c in rest.iter().rev() {
        (b1, b2) = (c + two_s * b1 - b2, b1);
    }
    c0 + s * b1 - b2
}

/// `d/ds Σ c_k T_k(s)`.
pub fn clenshaw_derivative(coeffs: &[f64], s: f64) -> f64 {
    if coeffs.len() < 2 {
        return 0.0;
    }
    let two_s = 2.0 * s;
    let (mut b1, mut b2) = (0.0, 0.0);
    // a_j = (j + 1)·c_{j+1} over the U basis; Σ a_j U_j(s) = b_0.
    for (k, &c) in coeffs.iter().enumerate().skip(1).rev() {
        (b1, b2) = (k as f64 * c + two_s * b1 - b2, b1);
    }
    b1
}
