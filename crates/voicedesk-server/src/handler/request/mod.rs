//! Request types for HTTP handlers.

mod batches;
mod campaigns;
mod credentials;
mod executions;
mod impersonations;
mod paginations;
mod paths;
mod phone_numbers;
mod sessions;
mod tenants;
mod users;

pub use batches::*;
pub use campaigns::*;
pub use credentials::*;
pub use executions::*;
pub use impersonations::*;
pub use paginations::*;
pub use paths::*;
pub use phone_numbers::*;
pub use sessions::*;
pub use tenants::*;
pub use users::*;
