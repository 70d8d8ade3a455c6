mod color;
mod transform;

pub use color::{hsv_to_rgb, Rgb};
pub use transform::{compose, euler_quat, normal_matrix, yaw_towards};
