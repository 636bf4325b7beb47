mod comparison;
mod lookup;
mod map;
mod value;

pub use comparison::*;
pub use lookup::*;
pub use map::*;
pub use value::*;
