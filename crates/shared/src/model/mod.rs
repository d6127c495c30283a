mod user;
pub use user::*;

mod plan;
pub use plan::*;

mod feature;
pub use feature::*;
