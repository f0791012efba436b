pub mod page_queries;
pub mod search_queries;
