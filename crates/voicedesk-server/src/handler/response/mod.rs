//! Response types for HTTP handlers.

mod campaigns;
mod credentials;
mod error_response;
mod executions;
mod limits;
mod monitors;
mod phone_numbers;
mod sessions;
mod sync;
mod tenants;
mod users;
mod webhooks;

pub use campaigns::*;
pub use credentials::*;
pub use error_response::*;
pub use executions::*;
pub use limits::*;
pub use monitors::*;
pub use phone_numbers::*;
pub use sessions::*;
pub use sync::*;
pub use tenants::*;
pub use users::*;
pub use webhooks::*;
