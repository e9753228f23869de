mod alert;
pub use alert::Alerts;

pub mod bootstrap;

pub mod spinner;
