pub mod session;

pub use session::RunSession;
