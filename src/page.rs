mod account;
pub use account::*;

mod catalog;
pub use catalog::*;

mod login;
pub use login::*;

mod movie;
pub use movie::*;

mod register;
pub use register::*;

mod reviewer;
pub use reviewer::*;

mod watchlist;
pub use watchlist::*;
