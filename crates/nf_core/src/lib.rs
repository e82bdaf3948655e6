pub mod error;
pub mod frontmatter;
pub mod types;

pub use error::Error;
pub use types::ArticleRecord;
pub type Result<T> = std::result::Result<T, Error>;
