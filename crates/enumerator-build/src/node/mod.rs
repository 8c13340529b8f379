mod constant;
mod spec;
mod target;

// pub use all node types
pub use self::constant::*;
pub use self::spec::*;
pub use self::target::*;
