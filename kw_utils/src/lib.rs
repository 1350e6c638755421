pub mod extract;
pub mod table;

pub use extract::extract_urls;
pub use table::{load_table, save_table, TableError, TableRow};
