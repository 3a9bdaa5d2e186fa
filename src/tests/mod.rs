#[macro_use]
mod util;

mod selection;
mod hit;
