mod evaluate;
mod lookup;
mod options;

pub use evaluate::*;
pub use lookup::*;
pub use options::*;
