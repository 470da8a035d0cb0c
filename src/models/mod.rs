pub mod dashboard;
pub mod directory;
pub mod item;
pub mod master_record;
pub mod purchase;
pub mod user;

pub use dashboard::*;
pub use directory::*;
pub use item::*;
pub use master_record::*;
pub use purchase::*;
pub use user::*;
