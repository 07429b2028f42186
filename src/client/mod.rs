pub mod provider;
pub mod http;

pub use provider::MobbApi;
pub use http::{MobbClient, REQUEST_TIMEOUT};
