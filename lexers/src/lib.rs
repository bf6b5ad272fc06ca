mod space_tokenizer;

pub use space_tokenizer::{ArithToken, Operator, SpaceTokenizer};
