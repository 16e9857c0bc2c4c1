pub mod document;
pub mod extent_ops;
pub mod grid_ops;
pub mod transaction;
pub mod view_ops;

pub use document::Document;
pub use transaction::Transaction;
