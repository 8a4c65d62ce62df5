// Constants, key/value storage and header parsing shared across the crate

pub mod constants;
pub mod storage;
pub mod content_disposition;

pub use constants::*;
pub use storage::*;
