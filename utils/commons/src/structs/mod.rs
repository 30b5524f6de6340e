use super::*;

mod basis_points;
mod receiver;

pub use self::{basis_points::*, receiver::*};
