//! Numerical and physical parameters for a rope run
//!
//! `Parameters` holds runtime settings:
//! - step size and end time,
//! - velocity damping coefficient,
//! - the gravity vector applied every tick

use super::states::NVec2;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub h0: f64, // step size
    pub damping_factor: f64, // velocity damping
    pub gravity: NVec2, // gravitational acceleration
}
