//! Data models for AssetDesk

pub mod asset;
pub mod category;
pub mod complaint;
pub mod employee;
pub mod request;
pub mod user;

// Re-export commonly used types
pub use asset::{Asset, AssetStatus};
pub use category::Category;
pub use complaint::{Complaint, ComplaintStatus};
pub use employee::Employee;
pub use request::{AssetRequest, RequestStatus};
pub use user::{PublicUser, Role, User};
