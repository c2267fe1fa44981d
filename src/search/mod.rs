mod criteria;
mod filter;
mod form;

pub use criteria::{KindFilter, SearchCriteria, ANY_KIND};
pub use filter::{filter, matches, search, SearchOutcome, NO_MATCHES_MESSAGE};
pub use form::{parse_bound, SearchForm, PROPERTY_KINDS};
