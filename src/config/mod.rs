//! Configuration management

mod document;

pub use document::SpaDocument;
