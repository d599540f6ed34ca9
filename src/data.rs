mod follow;
pub use follow::*;

mod movie;
pub use movie::*;

mod rating;
pub use rating::*;

mod review;
pub use review::*;

mod user;
pub use user::*;

mod watchlist;
pub use watchlist::*;
