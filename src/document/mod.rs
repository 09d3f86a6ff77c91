pub mod adapter;
pub mod html_document;
