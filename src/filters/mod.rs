pub mod apply;
pub mod ast;
pub mod parser;

pub use apply::{apply_filters, filter_by_author, filter_by_date_range};
pub use ast::{AuthorChoice, RecordFilter};
pub use parser::parse_filter;
