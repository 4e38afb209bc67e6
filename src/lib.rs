// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! intake-store: flat-file persistence for intake form submissions.

pub mod error;
pub mod record;
pub mod store;

pub use error::{Result, StoreError};
pub use record::FormRecord;
pub use store::{FlatFileStore, FormStore};
