// Internal modules
mod parser;
mod prompts;
mod requester;

// Public exports
pub use parser::{DelimitedKeywordParser, KeywordParser};
pub use prompts::{text_prompt, url_prompt};
pub use requester::KeywordRequester;
