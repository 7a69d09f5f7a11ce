//! Judges that decide whether a record should be flagged
//!
//! - [`GeminiJudge`] calls the Gemini `generateContent` API
//! - [`StaticJudge`] answers from a fixed id list, for tests
//!
//! Both implement [`Judge`], which is what the batch controller depends on.

pub mod gemini;
pub mod prompt;
pub mod rate_limit;
pub mod stub;
pub mod traits;

pub use gemini::GeminiJudge;
pub use prompt::build_prompt;
pub use rate_limit::Pacer;
pub use stub::StaticJudge;
pub use traits::Judge;
