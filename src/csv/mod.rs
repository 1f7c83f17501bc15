//! Line splitting, field tokenizing and record encoding

mod encoder;
mod splitter;
mod tokenizer;

pub use encoder::RecordEncoder;
pub use splitter::LineSplitter;
pub use tokenizer::FieldTokenizer;

/// One tokenized line: fields in column order
pub type Record = Vec<String>;
