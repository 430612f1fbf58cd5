// Standalone components
pub mod badge;
pub mod banner;
pub mod button;
pub mod card;
pub mod data_table;
pub mod detail_list;
pub mod form;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod stat_card;

// Primitive wrappers
pub mod toast;

pub mod sidebar;

pub use badge::*;
pub use banner::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use detail_list::*;
pub use form::*;
pub use input::*;
pub use page_header::*;
pub use sidebar::*;
pub use skeleton::*;
pub use stat_card::*;
pub use toast::*;
