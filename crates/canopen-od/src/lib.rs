#![cfg_attr(not(feature = "std"), no_std)]

// --- Foundation Modules ---
pub mod error;
pub mod types;

// --- Dictionary Model ---
pub mod constants;
pub mod dict;
pub mod entry;

// --- Access Engine ---
pub mod engine;
pub mod hooks;

// --- Top-level Exports ---
pub use dict::{IndexResolver, ObjectDictionary};
pub use engine::AccessEngine;
pub use entry::{Access, IndexTable, OdCallback, SubEntry};
pub use error::{AbortCode, AccessError};
pub use hooks::{NoRangeCheck, NoStore, RangeValidator, StoreNotifier};
pub use types::DataType;
