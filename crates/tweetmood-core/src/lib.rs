pub mod credentials;
pub mod post;
pub mod search;

pub use credentials::{Credentials, CredentialsError};
pub use post::{AggregateResult, LabeledPost, ParsedCollection, RawPost, Sentiment};
pub use search::SearchQuery;
