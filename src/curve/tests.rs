use approx::assert_relative_eq;
use nalgebra::{Isometry2, Isometry3, Point2, Point3, Vector2, Vector3};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::algebra::Rotor3;
use crate::closest_parameter::PointProjectionOptions;
use crate::error::GeometryError;
use crate::misc::{Invertible, Transformable};
use crate::polynomial::Polynomial;

use super::{PolynomialCurve2D, PolynomialCurve3D};

/// Monomial form of the Bezier arch through (0, 0), (1, 2), (2, 2), (3, 0)
fn arch() -> PolynomialCurve2D<f64> {
    PolynomialCurve2D::new(
        Vector2::new(0., 0.),
        Vector2::new(3., 6.),
        Vector2::new(0., -6.),
        Vector2::new(0., 0.),
    )
}

fn twisted_cubic() -> PolynomialCurve3D<f64> {
    PolynomialCurve3D::new(
        Vector3::new(0., 0., 0.),
        Vector3::new(1., 0., 0.),
        Vector3::new(0., 1., 0.),
        Vector3::new(0., 0., 1.),
    )
}

fn random_curve(rng: &mut StdRng) -> PolynomialCurve3D<f64> {
    let mut v = || {
        Vector3::new(
            rng.random_range(-2.0..2.0),
            rng.random_range(-2.0..2.0),
            rng.random_range(-2.0..2.0),
        )
    };
    PolynomialCurve3D::new(v(), v(), v(), v())
}

#[test]
fn eval_arch() {
    let curve = arch();
    assert_relative_eq!(curve.eval(0.), Point2::new(0., 0.));
    assert_relative_eq!(curve.eval(1.), Point2::new(3., 0.));
    assert_relative_eq!(curve.eval(0.5), Point2::new(1.5, 1.5));
    assert_eq!(curve.degree(), 2);
}

#[test]
fn derivatives_match_finite_differences() {
    let mut rng = StdRng::seed_from_u64(7);
    let h = 1e-6;
    for _ in 0..16 {
        let curve = random_curve(&mut rng);
        let t = rng.random_range(0.0..1.0);
        let fd = (curve.eval(t + h) - curve.eval(t - h)) / (2. * h);
        assert_relative_eq!(curve.eval_derivative(t), fd, epsilon = 1e-6);

        let fd2 = (curve.eval_derivative(t + h) - curve.eval_derivative(t - h)) / (2. * h);
        assert_relative_eq!(curve.eval_second_derivative(t), fd2, epsilon = 1e-6);

        assert_relative_eq!(curve.eval_nth(t, 1), curve.differentiate(1).eval_vector(t), epsilon = 1e-10);
        assert_relative_eq!(curve.eval_nth(t, 3), curve.eval_third_derivative());
        assert_eq!(curve.eval_nth(t, 4), Vector3::zeros());
    }
}

#[test]
fn split_reproduces_both_halves() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..16 {
        let curve = random_curve(&mut rng);
        let u = rng.random_range(0.05..0.95);
        let (pre, post) = curve.split01(u);
        for s in [0., 0.2, 0.5, 0.9, 1.] {
            assert_relative_eq!(pre.eval(s), curve.eval(u * s), epsilon = 1e-10);
            assert_relative_eq!(post.eval(s), curve.eval(u + (1. - u) * s), epsilon = 1e-10);
        }
    }
}

#[test]
fn bounds_of_arch() {
    let bounds = arch().bounds01();
    assert_relative_eq!(*bounds.min(), Vector2::new(0., 0.));
    assert_relative_eq!(*bounds.max(), Vector2::new(3., 1.5));
    assert!(bounds.contains(&Point2::new(1.5, 1.)));
    assert!(!bounds.contains(&Point2::new(1.5, 1.6)));
}

#[test]
fn axis_access() {
    let mut curve = arch();
    assert_eq!(curve.axis(1), Ok(Polynomial::new(0., 6., -6., 0.)));
    assert_eq!(
        curve.axis(2),
        Err(GeometryError::IndexOutOfRange { index: 2, len: 2 })
    );
    curve.set_axis(0, Polynomial::linear(1., 1.)).unwrap();
    assert_relative_eq!(curve.eval(1.), Point2::new(2., 0.));
    assert!(curve.set_axis(5, Polynomial::zero()).is_err());
    assert!(curve.coefficient(4).is_err());
    assert!(curve.set_coefficient(4, Vector2::zeros()).is_err());

    let rebuilt = PolynomialCurve2D::from_axes(&[curve.axis(0).unwrap(), curve.axis(1).unwrap()]).unwrap();
    assert_eq!(rebuilt, curve);
    assert_eq!(
        PolynomialCurve2D::<f64>::from_axes(&[Polynomial::zero()]),
        Err(GeometryError::DimensionMismatch {
            expected: 2,
            actual: 1
        })
    );
    assert_eq!(
        PolynomialCurve3D::<f64>::from_axes(&[Polynomial::zero(); 4]),
        Err(GeometryError::DimensionMismatch {
            expected: 3,
            actual: 4
        })
    );
}

#[test]
fn nan_curve_propagates() {
    let nan = PolynomialCurve2D::<f64>::nan();
    assert!(nan.is_nan());
    assert!(nan.eval(0.5).x.is_nan());
    assert!(!arch().is_nan());
    assert!((arch() * f64::NAN).is_nan());
}

#[test]
fn fit_cubic_through_samples() {
    let curve = twisted_cubic();
    let xs = [0.25, 0.5, 1.];
    let fitted = PolynomialCurve3D::fit_cubic_from0(
        xs[0],
        xs[1],
        xs[2],
        [
            curve.eval_vector(0.),
            curve.eval_vector(xs[0]),
            curve.eval_vector(xs[1]),
            curve.eval_vector(xs[2]),
        ],
    );
    for (a, b) in fitted.coefficients().iter().zip(curve.coefficients().iter()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-10);
    }

    let coincident = PolynomialCurve3D::fit_cubic_from0(0.5, 0.5, 1., [Vector3::zeros(); 4]);
    assert!(coincident.is_nan());
}

#[test]
fn invert_reverses_direction() {
    let curve = twisted_cubic();
    let inverted = curve.inverse();
    for t in [0., 0.3, 1.] {
        assert_relative_eq!(inverted.eval(t), curve.eval(1. - t), epsilon = 1e-12);
    }
}

#[test]
fn scaling_curve() {
    let curve = arch() * 2.;
    assert_relative_eq!(curve.eval(0.5), Point2::new(3., 3.));
    assert_relative_eq!((curve / 2.).eval(0.5), Point2::new(1.5, 1.5));
    let stretched = arch().scale_parameter_space(2.);
    assert_relative_eq!(stretched.eval(1.), arch().eval(0.5));
}

#[test]
fn transform_by_homogeneous_matrix() {
    let iso = Isometry2::new(Vector2::new(1., -2.), 0.7);
    let curve = arch();
    let transformed = curve.transformed(&iso.to_homogeneous());
    for t in [0., 0.25, 0.8] {
        assert_relative_eq!(transformed.eval(t), iso * curve.eval(t), epsilon = 1e-12);
    }

    let iso = Isometry3::new(Vector3::new(0., 3., 1.), Vector3::new(0.2, -0.4, 1.));
    let curve = twisted_cubic();
    let transformed = curve.transformed(&iso.to_homogeneous());
    for t in [0., 0.25, 0.8] {
        assert_relative_eq!(transformed.eval(t), iso * curve.eval(t), epsilon = 1e-12);
    }
}

#[test]
fn transform_by_rotor() {
    let rotor = Rotor3::from_angle_axis(1.2, &Vector3::y_axis());
    let curve = twisted_cubic();
    let rotated = curve.transformed(&rotor);
    for t in [0., 0.5, 1.] {
        let expected = rotor.rotate(&curve.eval_vector(t));
        assert_relative_eq!(rotated.eval_vector(t), expected, epsilon = 1e-12);
    }
}

#[test]
fn curvature_of_arch_apex() {
    let curvature = arch().curvature_at(0.5).unwrap();
    assert_relative_eq!(curvature.tangent_vector(), Vector2::new(1., 0.));
    assert_relative_eq!(curvature.kappa(), 4. / 3., epsilon = 1e-12);

    let point = PolynomialCurve2D::constant(&Point2::new(1., 1.));
    assert!(point.curvature_at(0.5).is_err());
}

#[test]
fn frenet_frame_of_twisted_cubic() {
    let frame = twisted_cubic().frenet_frame_at(0.).unwrap();
    assert_relative_eq!(*frame.tangent(), Vector3::x());
    assert_relative_eq!(*frame.normal(), Vector3::y());
    assert_relative_eq!(*frame.binormal(), Vector3::z());

    let line = PolynomialCurve3D::linear(Vector3::zeros(), Vector3::new(1., 1., 0.));
    assert!(line.frenet_frame_at(0.5).is_none());
}

#[test]
fn transported_frames_stay_orthonormal() {
    let curve = twisted_cubic();
    let parameters = (0..=20).map(|i| i as f64 / 20.).collect::<Vec<_>>();
    let frames = curve.compute_frenet_frames(&parameters);
    assert_eq!(frames.len(), parameters.len());
    for (frame, t) in frames.iter().zip(parameters.iter()) {
        assert_relative_eq!(*frame.position(), curve.eval(*t));
        assert_relative_eq!(*frame.tangent(), curve.eval_derivative(*t).normalize(), epsilon = 1e-10);
        assert_relative_eq!(frame.normal().norm(), 1., epsilon = 1e-10);
        assert_relative_eq!(frame.tangent().dot(frame.normal()), 0., epsilon = 1e-10);
        assert_relative_eq!(frame.binormal().dot(frame.normal()), 0., epsilon = 1e-10);
    }
    assert!(curve.compute_frenet_frames(&[]).is_empty());
}

#[test]
fn transported_frames_on_a_line_do_not_twist() {
    let line = PolynomialCurve3D::linear(Vector3::new(1., 2., 3.), Vector3::new(0., 0., 2.));
    let frames = line.compute_frenet_frames(&[0., 0.5, 1.]);
    for frame in frames.iter() {
        assert_relative_eq!(*frame.tangent(), Vector3::z());
        assert_relative_eq!(*frame.normal(), *frames[0].normal(), epsilon = 1e-12);
    }
}

#[test]
fn project_point_above_arch() {
    let (closest, t) = arch().project_point(&Point2::new(1.5, 5.));
    assert!(t > 0. && t < 1.);
    assert!(closest.y < 2.);
    assert_relative_eq!(t, 0.5, epsilon = 1e-6);
    assert_relative_eq!(closest, Point2::new(1.5, 1.5), epsilon = 1e-6);
}

#[test]
fn project_point_beyond_end_points() {
    let curve = arch();
    let (closest, t) = curve.project_point(&Point2::new(-2., -1.));
    assert_eq!(t, 0.);
    assert_relative_eq!(closest, Point2::new(0., 0.));

    let (closest, t) = curve.project_point(&Point2::new(5., -1.));
    assert_eq!(t, 1.);
    assert_relative_eq!(closest, Point2::new(3., 0.));
}

#[test]
fn project_point_on_curve_is_idempotent() {
    let curve = twisted_cubic();
    for t0 in [0.2, 0.5, 0.7] {
        let on = curve.eval(t0);
        let (closest, t) = curve.project_point(&on);
        assert_relative_eq!(t, t0, epsilon = 1e-3);
        assert_relative_eq!(closest, on, epsilon = 1e-4);
    }

    let (closest, t) = arch().project_point(&arch().eval(0.5));
    assert_relative_eq!(t, 0.5, epsilon = 1e-3);
    assert_relative_eq!(closest, Point2::new(1.5, 1.5), epsilon = 1e-4);
}

#[test]
fn project_point_onto_degenerate_curve() {
    let curve = PolynomialCurve3D::constant(&Point3::new(1., 2., 3.));
    let (closest, t) = curve.project_point(&Point3::new(4., 5., 6.));
    assert_eq!(t, 0.);
    assert_eq!(closest, Point3::new(1., 2., 3.));
}

#[test]
fn project_point_keeps_estimate_where_hessian_vanishes() {
    // the squared distance to the origin is 1 + (t - 0.5)^4
    let curve = PolynomialCurve2D::new(
        Vector2::new(1., 0.25),
        Vector2::new(0., -1.),
        Vector2::new(0., 1.),
        Vector2::new(0., 0.),
    );
    let (closest, t) = curve.project_point(&Point2::origin());
    assert_relative_eq!(t, 0.5, epsilon = 1e-9);
    assert_relative_eq!(closest, Point2::new(1., 0.), epsilon = 1e-12);
}

#[test]
fn project_point_without_refinement_uses_bracket_midpoints() {
    let options = PointProjectionOptions::default()
        .with_initial_subdivisions(5)
        .with_refinement_iterations(0);
    let (_, t) = arch().project_point_with(&Point2::new(1.5, 5.), &options);
    // samples at 0, 0.25, 0.5, 0.75, 1 bracket the apex between 0.25 and 0.5
    assert_relative_eq!(t, 0.375);

    let refined = PointProjectionOptions::default().with_initial_subdivisions(5);
    let (_, t) = arch().project_point_with(&Point2::new(1.5, 5.), &refined);
    assert_relative_eq!(t, 0.5, epsilon = 1e-6);
}

#[test]
fn project_point_is_never_farther_than_end_points() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..32 {
        let curve = random_curve(&mut rng);
        let query = Point3::new(
            rng.random_range(-3.0..3.0),
            rng.random_range(-3.0..3.0),
            rng.random_range(-3.0..3.0),
        );
        let (closest, t) = curve.project_point(&query);
        assert!((0. ..=1.).contains(&t));
        assert_relative_eq!(closest, curve.eval(t), epsilon = 1e-12);
        let distance = (closest - query).norm_squared();
        assert!(distance <= (curve.eval(0.) - query).norm_squared() + 1e-12);
        assert!(distance <= (curve.eval(1.) - query).norm_squared() + 1e-12);
    }
}

#[test]
fn curve_arithmetic() {
    let sum = arch() + arch();
    assert_relative_eq!(sum.eval(0.5), Point2::new(3., 3.));
    let zero = arch() - arch();
    assert_eq!(zero.degree(), 0);
    assert_relative_eq!((-arch()).eval(1.), Point2::new(-3., 0.));
}
