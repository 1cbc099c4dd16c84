use nalgebra::{IsometryMatrix3, Point3, Rotation3, Translation3, UnitVector3, Vector3};

use crate::algebra::{Bivector3, Rotor3};
use crate::misc::FloatingPoint;

/// A moving frame at a point on a 3D curve.
#[derive(Debug, Clone, PartialEq)]
pub struct FrenetFrame<T: FloatingPoint> {
    position: Point3<T>,
    tangent: Vector3<T>,
    normal: Vector3<T>,
    binormal: Vector3<T>,
}

impl<T: FloatingPoint> FrenetFrame<T> {
    pub fn new(
        position: Point3<T>,
        tangent: Vector3<T>,
        normal: Vector3<T>,
        binormal: Vector3<T>,
    ) -> Self {
        Self {
            position,
            tangent,
            normal,
            binormal,
        }
    }

    /// Build the frame from the first two derivatives of a curve.
    /// The binormal is the normal of the plane spanned by `d1 ∧ d2`.
    /// Returns `None` where the curve is stationary or locally straight.
    pub fn from_derivatives(
        position: Point3<T>,
        d1: &Vector3<T>,
        d2: &Vector3<T>,
    ) -> Option<Self> {
        let tangent = d1.try_normalize(T::zero())?;
        let binormal = Bivector3::from_wedge(d1, d2).normal()?;
        let normal = binormal.cross(&tangent);
        Some(Self::new(position, tangent, normal, binormal))
    }

    /// Carry this frame to a new position and tangent with the smallest rotation
    /// between the two tangents, so the frame does not twist around the curve.
    pub fn transport(&self, position: Point3<T>, tangent: &UnitVector3<T>) -> Self {
        let from = UnitVector3::new_unchecked(self.tangent);
        let rotor = Rotor3::from_to_rotation(&from, tangent);
        let normal = rotor.rotate(&self.normal);
        let tangent = tangent.into_inner();
        let binormal = tangent.cross(&normal);
        Self::new(position, tangent, normal, binormal)
    }

    pub fn position(&self) -> &Point3<T> {
        &self.position
    }

    pub fn tangent(&self) -> &Vector3<T> {
        &self.tangent
    }

    pub fn normal(&self) -> &Vector3<T> {
        &self.normal
    }

    pub fn binormal(&self) -> &Vector3<T> {
        &self.binormal
    }

    /// Returns the transformation matrix that transforms a target to the frame coordinates.
    pub fn matrix(&self) -> IsometryMatrix3<T> {
        let rot = Rotation3::face_towards(&self.tangent, &self.normal);
        let trans = Translation3::from(self.position);
        trans * rot
    }
}
