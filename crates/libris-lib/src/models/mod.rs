pub mod book;
pub use book::*;

pub mod book_action;
pub use book_action::*;

pub mod severity;
pub use severity::*;
