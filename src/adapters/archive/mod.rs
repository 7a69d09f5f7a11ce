//! Record store: archive readers and CSV sinks

pub mod reader;
pub mod writer;

pub use reader::{RecordReader, SourceFormat, RECORD_HEADER};
pub use writer::{CsvSink, RESULT_HEADER};
