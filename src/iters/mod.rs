
mod into_iter;
mod iter;
mod iter_mut;

pub use self::{
    into_iter::*,
    iter::*,
    iter_mut::*,
};
