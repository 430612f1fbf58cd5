pub mod view_switch;

pub use view_switch::{ViewBadge, ViewSwitch};
