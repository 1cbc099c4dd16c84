use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::GeometryError;
use crate::misc::Invertible;

use super::Polynomial;

fn random_polynomial(rng: &mut StdRng) -> Polynomial<f64> {
    Polynomial::new(
        rng.random_range(-5.0..5.0),
        rng.random_range(-5.0..5.0),
        rng.random_range(-5.0..5.0),
        rng.random_range(-5.0..5.0),
    )
}

#[test]
fn eval_at_zero_is_constant_term() {
    let p = Polynomial::new(1.25_f32, -3., 8., 0.5);
    assert_eq!(p.eval(0.), 1.25);
    assert_relative_eq!(p.eval(1.), 1.25 - 3. + 8. + 0.5);
}

#[test]
fn derivative_is_consistent_with_differentiate() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..64 {
        let p = random_polynomial(&mut rng);
        let t = rng.random_range(-2.0..2.0);
        assert_relative_eq!(p.differentiate(1).eval(t), p.eval_derivative(t), epsilon = 1e-5);
        assert_relative_eq!(p.eval_nth(t, 1), p.eval_derivative(t), epsilon = 1e-5);
        assert_relative_eq!(p.eval_nth(t, 0), p.eval(t), epsilon = 1e-5);
    }
}

#[test]
fn differentiate_past_degree_is_zero() {
    let constant = Polynomial::constant(4.0_f64);
    assert_eq!(constant.differentiate(1), Polynomial::zero());
    assert_eq!(constant.differentiate(5), Polynomial::zero());

    let cubic = Polynomial::new(1.0_f64, 2., 3., 4.);
    assert_eq!(cubic.differentiate(3), Polynomial::constant(24.));
    assert_eq!(cubic.differentiate(4), Polynomial::zero());
}

#[test]
fn degree_is_highest_nonzero_coefficient() {
    assert_eq!(Polynomial::constant(0.0_f64).degree(), 0);
    assert_eq!(Polynomial::constant(3.0_f64).degree(), 0);
    assert_eq!(Polynomial::linear(0.0_f64, 1.).degree(), 1);
    assert_eq!(Polynomial::new(0.0_f64, 0., 2., 0.).degree(), 2);
    assert_eq!(Polynomial::new(0.0_f64, 0., 0., -1.).degree(), 3);
}

#[test]
fn split_reproduces_both_halves() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..32 {
        let p = random_polynomial(&mut rng);
        let u = rng.random_range(0.05..0.95);
        let (pre, post) = p.split01(u);
        for i in 0..=10 {
            let s = i as f64 / 10.;
            assert_relative_eq!(pre.eval(s), p.eval(u * s), epsilon = 1e-9);
            assert_relative_eq!(post.eval(s), p.eval(u + (1. - u) * s), epsilon = 1e-9);
        }
    }
}

#[test]
fn compose_substitutes_affine_parameter() {
    let p = Polynomial::new(2.0_f64, -1., 0.5, 3.);
    let g = p.compose(0.3, -2.);
    for i in 0..=8 {
        let t = i as f64 / 4. - 1.;
        assert_relative_eq!(g.eval(t), p.eval(0.3 - 2. * t), epsilon = 1e-10);
    }
}

#[test]
fn scale_parameter_space() {
    let p = Polynomial::new(1.0_f64, 2., 3., 4.);
    assert_eq!(p.scale_parameter_space(1.), p);
    let scaled = p.scale_parameter_space(2.);
    assert_relative_eq!(scaled.eval(1.), p.eval(0.5));
    assert_relative_eq!(scaled.eval(3.), p.eval(1.5));
}

#[test]
fn invert_reverses_direction() {
    let p = Polynomial::new(0.0_f64, 1., -2., 5.);
    let r = p.inverse();
    assert_relative_eq!(r.eval(0.), p.eval(1.));
    assert_relative_eq!(r.eval(1.), p.eval(0.));
    assert_relative_eq!(r.eval(0.2), p.eval(0.8), epsilon = 1e-12);
}

#[test]
fn fit_cubic_passes_through_samples() {
    let p = Polynomial::fit_cubic_from0(0.5_f64, 1., 2., 1., -1., 0., 4.);
    assert_relative_eq!(p.eval(0.), 1., epsilon = 1e-10);
    assert_relative_eq!(p.eval(0.5), -1., epsilon = 1e-10);
    assert_relative_eq!(p.eval(1.), 0., epsilon = 1e-10);
    assert_relative_eq!(p.eval(2.), 4., epsilon = 1e-10);

    let reference = Polynomial::new(0.5_f64, -1., 2., 0.75);
    let fitted = Polynomial::fit_cubic(
        -1.,
        0.5,
        1.5,
        3.,
        reference.eval(-1.),
        reference.eval(0.5),
        reference.eval(1.5),
        reference.eval(3.),
    );
    assert_relative_eq!(fitted.c0, reference.c0, epsilon = 1e-9);
    assert_relative_eq!(fitted.c1, reference.c1, epsilon = 1e-9);
    assert_relative_eq!(fitted.c2, reference.c2, epsilon = 1e-9);
    assert_relative_eq!(fitted.c3, reference.c3, epsilon = 1e-9);
}

#[test]
fn fit_cubic_with_coincident_samples_is_nan() {
    assert!(Polynomial::fit_cubic_from0(0.5_f64, 0.5, 2., 1., 2., 3., 4.).is_nan());
    assert!(Polynomial::fit_cubic_from0(0.0_f64, 0.5, 2., 1., 2., 3., 4.).is_nan());
    assert!(Polynomial::fit_cubic(1.0_f32, 2., 3., 3., 1., 2., 3., 4.).is_nan());
}

#[test]
fn nan_propagates() {
    let nan = Polynomial::<f64>::nan();
    assert!(nan.is_nan());
    assert!((nan + Polynomial::constant(1.)).is_nan());
    assert!((nan * 0.).is_nan());
    assert!(nan.eval(0.5).is_nan());
    assert!(nan.split01(0.5).0.is_nan());
    let (min, max) = nan.output_range01();
    assert!(min.is_nan() && max.is_nan());
    assert!(!Polynomial::<f64>::zero().is_nan());
}

#[test]
fn coefficient_index_out_of_range() {
    let mut p = Polynomial::new(1.0_f64, 2., 3., 4.);
    assert_eq!(p.coefficient(2), Ok(3.));
    assert_eq!(
        p.coefficient(4),
        Err(GeometryError::IndexOutOfRange { index: 4, len: 4 })
    );
    assert!(p.set_coefficient(3, -1.).is_ok());
    assert_eq!(p.c3, -1.);
    assert!(p.set_coefficient(7, 0.).is_err());
}

#[test]
fn output_range_finds_interior_extrema() {
    // t - t^2 peaks at t = 0.5
    let p = Polynomial::quadratic(0.0_f64, 1., -1.);
    let (min, max) = p.output_range01();
    assert_relative_eq!(min, 0.);
    assert_relative_eq!(max, 0.25);

    // monotonic cubic only uses the end points
    let p = Polynomial::new(1.0_f64, 1., 0., 1.);
    assert_eq!(p.output_range01(), (1., 3.));

    // cubic with two interior extrema
    let p = Polynomial::new(0.0_f64, 2., -9., 9.);
    let extrema = p.local_extrema01();
    assert_eq!(extrema.len(), 2);
    let (min, max) = p.output_range01();
    let samples = (0..=1000).map(|i| p.eval(i as f64 / 1000.));
    let (smin, smax) = samples.fold((f64::MAX, f64::MIN), |(a, b), v| (a.min(v), b.max(v)));
    assert_relative_eq!(min, smin, epsilon = 1e-4);
    assert_relative_eq!(max, smax, epsilon = 1e-4);
}

#[test]
fn roots_of_factored_cubic() {
    // 2 (t - 0.25)(t - 0.5)(t - 2)
    let p = Polynomial::new(-0.5_f64, 3.25, -5.5, 2.);
    let roots = p.roots();
    assert_eq!(roots.len(), 3);
    assert_relative_eq!(roots.as_slice()[0], 0.25, epsilon = 1e-9);
    assert_relative_eq!(roots.as_slice()[1], 0.5, epsilon = 1e-9);
    assert_relative_eq!(roots.as_slice()[2], 2., epsilon = 1e-9);
    assert!(Polynomial::constant(1.0_f64).roots().is_empty());
}

#[test]
fn display_lists_coefficients() {
    let p = Polynomial::new(1.0_f64, 2., 3., 4.);
    assert_eq!(p.to_string(), "1 + 2t + 3t^2 + 4t^3");
}
