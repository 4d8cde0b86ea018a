//! Event translation core.
//!
//! Turns a [`SourceEvent`](crate::types::SourceEvent) into the topics and data
//! of an Ethereum log, driven by an [`EventDescriptor`].

pub mod attributes;
pub mod data;
pub mod decoder;
pub mod descriptor;
pub mod topics;

pub use attributes::search_attributes;
pub use decoder::{DecodeResult, DecoderTable, ValueDecoder};
pub use descriptor::EventDescriptor;
