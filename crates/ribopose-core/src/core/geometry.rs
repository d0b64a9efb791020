//! Rigid-motion algebra for fragment assembly.
//!
//! Every operation in this module works on orthonormal transforms in the
//! row-vector convention: a point is a row vector, application multiplies the
//! point on the left of the matrix, and composition reads left to right. The
//! algebra is closed, so generators can chain fixed relations, frame
//! alignments, and inverses without ever renormalizing.

use nalgebra::{Matrix3, Point3, Rotation3, Unit, Vector3};

/// Euclidean distance between two points.
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm()
}

/// An orthonormal rigid motion: a pure rotation followed by a translation.
///
/// The rotation is stored row-major for the row-vector convention, i.e.
/// applying the transform computes `p * linear + translation`. Transforms
/// produced by this module are always orthonormal, which is what makes
/// [`Transform::inverse_orthonormal`] a transpose instead of a full matrix
/// inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    linear: Matrix3<f64>,
    translation: Vector3<f64>,
}

impl Transform {
    /// The identity motion.
    pub fn identity() -> Self {
        Self {
            linear: Matrix3::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Builds a transform from its twelve coefficients: nine rotation entries
    /// in row-major order followed by the translation components.
    #[allow(clippy::too_many_arguments)]
    pub fn from_coefficients(
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
        f: f64,
        g: f64,
        h: f64,
        i: f64,
        tx: f64,
        ty: f64,
        tz: f64,
    ) -> Self {
        Self {
            linear: Matrix3::new(a, b, c, d, e, f, g, h, i),
            translation: Vector3::new(tx, ty, tz),
        }
    }

    /// A pure translation by `offset`.
    pub fn from_translation(offset: Vector3<f64>) -> Self {
        Self {
            linear: Matrix3::identity(),
            translation: offset,
        }
    }

    /// A pure rotation about the origin.
    pub fn from_rotation(rotation: &Rotation3<f64>) -> Self {
        Self {
            linear: rotation.matrix().transpose(),
            translation: Vector3::zeros(),
        }
    }

    /// The rotation block, row-major.
    pub fn linear(&self) -> &Matrix3<f64> {
        &self.linear
    }

    /// The translation component.
    pub fn translation(&self) -> &Vector3<f64> {
        &self.translation
    }

    /// Applies the motion to a point: `p * linear + translation`.
    pub fn apply(&self, point: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.linear.tr_mul(&point.coords) + self.translation)
    }

    /// Composes two motions so that `self` acts first and `next` acts second.
    pub fn combine(&self, next: &Transform) -> Transform {
        Transform {
            linear: self.linear * next.linear,
            translation: next.linear.tr_mul(&self.translation) + next.translation,
        }
    }

    /// Inverts the motion, assuming the rotation block is orthonormal.
    pub fn inverse_orthonormal(&self) -> Transform {
        Transform {
            linear: self.linear.transpose(),
            translation: -(self.linear * self.translation),
        }
    }
}

/// A rotation about the global X axis by `angle` radians.
pub fn rotation_x(angle: f64) -> Transform {
    Transform::from_rotation(&Rotation3::from_axis_angle(&Vector3::x_axis(), angle))
}

/// A rotation about the global Y axis by `angle` radians.
pub fn rotation_y(angle: f64) -> Transform {
    Transform::from_rotation(&Rotation3::from_axis_angle(&Vector3::y_axis(), angle))
}

/// A rotation about an arbitrary axis through the origin. The axis does not
/// need to be normalized.
pub fn rotation_about_axis(axis: &Vector3<f64>, angle: f64) -> Transform {
    Transform::from_rotation(&Rotation3::from_axis_angle(
        &Unit::new_normalize(*axis),
        angle,
    ))
}

/// Computes the motion that carries an anchor triple into the canonical pose:
/// `p1` lands on the origin, `p2` on the positive Y axis, and `p3` into the
/// YZ plane with a non-negative Z coordinate.
///
/// This is the workhorse behind template standard frames and backbone
/// continuation frames. Callers must supply a non-degenerate triple; if the
/// anchors coincide or are collinear the result is not a valid orthonormal
/// motion.
pub fn align_frame(p1: &Point3<f64>, p2: &Point3<f64>, p3: &Point3<f64>) -> Transform {
    let v = p2 - p1;
    let phi = v.x.atan2(v.z);
    let theta = v.x.hypot(v.z).atan2(v.y);

    let base = Transform::from_translation(-p1.coords)
        .combine(&rotation_y(-phi))
        .combine(&rotation_x(-theta));

    let w = base.apply(p3);
    let rho = w.x.atan2(w.z);
    base.combine(&rotation_y(-rho))
}
