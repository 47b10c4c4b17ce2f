mod entry;
pub use self::entry::{
    EntriesDocument, EntriesPage, Entry, FieldDescriptor, FieldValue, TransformedEntry,
};

mod filter;
pub use self::filter::{Filter, FilterableField};

mod category;
pub use self::category::{CategoriesResponse, Category};
