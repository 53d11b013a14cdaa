//! Real roots of the depressed cubic x³ + ax + b = 0

use core::f64::consts::PI;

use ecviz_common::sort_unique;

/// Real solutions of x³ + ax + b = 0, ascending, without exact duplicates.
///
/// With q = a/3, r = -b/2 and Δ = q³ + r²:
///
/// - Δ > 0: a single root from Cardano's formula,
/// - Δ < 0: three roots from the trigonometric form,
/// - Δ = 0: the double root and the simple root (one value when a = b = 0).
///
/// Always returns between one and three values for finite inputs.
pub fn cubic_roots(a: f64, b: f64) -> Vec<f64> {
    let q = a / 3.0;
    let r = -b / 2.0;
    let delta = q * q * q + r * r;

    let mut roots = if delta > 0.0 {
        // s = cbrt(r ± √Δ) taken on the larger radicand, then t = -q/s
        // since s·t = -q; avoids cancellation in r - √Δ.
        let sd = delta.sqrt();
        let s = if r >= 0.0 { (r + sd).cbrt() } else { (r - sd).cbrt() };
        let t = -q / s;
        vec![s + t]
    } else if delta < 0.0 {
        let u = 2.0 * (-q).sqrt();
        let theta = (b / (q * u)).clamp(-1.0, 1.0).acos();
        vec![
            u * (theta / 3.0).cos(),
            u * ((theta + 2.0 * PI) / 3.0).cos(),
            u * ((theta + 4.0 * PI) / 3.0).cos(),
        ]
    } else {
        vec![2.0 * r.cbrt(), (-r).cbrt()]
    };

    sort_unique(&mut roots);
    roots
}
