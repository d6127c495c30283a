mod home;
pub use home::*;

mod checkout;
pub use checkout::*;

mod ping;
pub use ping::*;
