pub mod report;
pub mod issue;
pub mod export_row;
pub mod lenient;

pub use report::*;
pub use issue::*;
pub use export_row::*;
