pub mod associations;
pub mod auth;
pub mod crud;
pub mod docs;

pub use associations::AssociationService;
pub use auth::AuthService;
pub use crud::CrudService;
pub use docs::build_openapi;
