mod container;
pub use container::*;

mod icon;
pub use icon::*;

mod section_header;
pub use section_header::*;

mod navbar;
pub use navbar::*;

mod hero;
pub use hero::*;

mod features;
pub use features::*;

mod steps;
pub use steps::*;

mod pricing_card;
pub use pricing_card::*;

mod pricing;
pub use pricing::*;

mod call_to_action;
pub use call_to_action::*;

mod footer;
pub use footer::*;
