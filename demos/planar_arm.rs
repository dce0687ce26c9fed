//! One revolute link, numerically and symbolically.
//!
//! Run with: cargo run --example planar_arm

use manipulator_core::kinematics::{link, transform_point, LinkParameters};
use manipulator_core::symbolic::{evaluate_matrix, symbol, Expr};
use manipulator_core::types::units::*;
use manipulator_core::types::*;
use std::collections::HashMap;

fn main() {
    // A 0.5 m link rotated 30 degrees at the joint, no offset or twist
    let params = LinkParameters::new(
        Angle::new::<degree>(30.0),
        Distance::new::<meter>(0.0),
        Angle::new::<degree>(0.0),
        Distance::new::<meter>(0.5),
    );

    println!("link parameters: {}", params);
    let transform = params.transform();
    println!("transform:{}", transform);

    let tip = transform_point(&transform, &na::Point3::origin());
    println!("tip position: ({:.4}, {:.4}, {:.4})", tip.x, tip.y, tip.z);

    // The same link with the joint angle left as a variable
    let symbolic = link(
        symbol("t1"),
        Expr::from(0),
        Expr::from(0),
        Expr::from(0.5),
    );
    println!("\nsymbolic tip:");
    println!("  x(t1) = {}", symbolic[(0, 3)]);
    println!("  y(t1) = {}", symbolic[(1, 3)]);

    let mut joints = HashMap::new();
    joints.insert("t1".to_string(), 30f64.to_radians());
    let evaluated = evaluate_matrix(&symbolic, &joints).expect("t1 is bound");
    println!("\nevaluated at t1 = 30°:{}", evaluated);
}
