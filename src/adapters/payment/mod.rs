//! Payment tokenizer adapters.

mod mock_tokenizer;

pub use mock_tokenizer::MockPaymentTokenizer;
