use nalgebra as na;
use crate::types::*;
use crate::types::scalar::TransformScalar;
use crate::types::units::*;
use crate::kinematics::transforms::*;
use std::fmt;

/// Standard Denavit-Hartenberg transform for one link:
/// Rz(θ) · Tz(d) · Rx(α) · Tx(a), multiplied in exactly that order.
///
/// Works over numeric scalars (`f64`) and symbolic ones
/// ([`Expr`](crate::symbolic::Expr)).
pub fn link<T: TransformScalar>(
    joint_angle: T,
    link_offset: T,
    link_twist: T,
    link_length: T,
) -> na::Matrix4<T> {
    let zero = T::zero();

    rotation_z(joint_angle)
        * translation(na::Vector3::new(zero.clone(), zero.clone(), link_offset))
        * rotation_x(link_twist)
        * translation(na::Vector3::new(link_length, zero.clone(), zero))
}

/// DH parameter set for a single link
///
/// This is the "joint space" view of one link: the joint angle θ about the
/// previous Z axis, the offset d along that axis, the twist α about the new
/// X axis, and the length a along it.
#[derive(Debug, Clone, Copy)]
pub struct LinkParameters {
    /// Joint angle θ (rotation about the previous Z axis)
    pub joint_angle: Angle,

    /// Link offset d (translation along the previous Z axis)
    pub link_offset: Distance,

    /// Link twist α (rotation about the new X axis)
    pub link_twist: Angle,

    /// Link length a (translation along the new X axis)
    pub link_length: Distance,
}

impl LinkParameters {
    pub fn new(
        joint_angle: Angle,
        link_offset: Distance,
        link_twist: Angle,
        link_length: Distance,
    ) -> Self {
        Self {
            joint_angle,
            link_offset,
            link_twist,
            link_length,
        }
    }

    /// Homogeneous transform for this link
    pub fn transform(&self) -> na::Matrix4<f64> {
        link(
            self.joint_angle.get::<radian>(),
            to_coord(self.link_offset),
            self.link_twist.get::<radian>(),
            to_coord(self.link_length),
        )
    }

    /// Position the link transform assigns to the joint origin
    pub fn tip(&self) -> na::Point3<f64> {
        translation_part(&self.transform())
    }
}

impl fmt::Display for LinkParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "θ={} d={} α={} a={}",
            DisplayAngle(self.joint_angle),
            DisplayDistance(self.link_offset),
            DisplayAngle(self.link_twist),
            DisplayDistance(self.link_length),
        )
    }
}
