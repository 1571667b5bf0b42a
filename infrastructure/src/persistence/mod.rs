//! Result persistence adapters

pub mod jsonl_writer;

pub use jsonl_writer::JsonlResultWriter;
