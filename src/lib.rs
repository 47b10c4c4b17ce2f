mod client;
mod errors;
mod filter;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::filter::EntryFilter;
pub use self::query::{EntriesQuery, Query};
