//! Report storage
//!
//! Full reports go to an S3-compatible bucket that pins every object to IPFS.
//! The store answers a PUT with the object's CID in a metadata header, which
//! becomes the retrieval URL handed back to the user.

mod filebase;
mod locator;

pub use filebase::FilebaseStore;
pub use locator::{locator_from_response, object_key, CID_HEADER};
