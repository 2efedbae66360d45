//! Client side of the remote order endpoint: envelope, transport, response.

pub mod action;
pub mod gateway;
pub mod response;
pub mod transport;

pub use action::Action;
pub use gateway::{ApiGateway, build_envelope};
pub use response::ApiResponse;
pub use transport::{HttpResponse, HttpTransport, Transport};
