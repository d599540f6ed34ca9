mod auth_switch;
pub use auth_switch::*;

mod feedback;
pub use feedback::*;

mod navbar;
pub use navbar::*;

mod rating;
pub use rating::*;

mod review;
pub use review::*;

pub mod user;

mod watchlist_remove;
pub use watchlist_remove::*;
