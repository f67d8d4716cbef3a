pub mod pagination;
pub mod registry;
pub mod resource;
pub mod response;

pub use pagination::{PageWindow, PaginationQuery};
pub use registry::{ResourceVisitor, visit_resources};
pub use resource::Resource;
pub use response::MessageResponse;
