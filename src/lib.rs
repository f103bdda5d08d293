//! # coursepatch
//!
//! A repair library and CLI tool for generated course-catalog data files.
//! A buggy generator run left `courses.ts`-style files with stray
//! `benefitsHtml` fragments, missing record-separator commas, and records
//! without their benefits section; coursepatch rewrites the file in a fixed
//! sequence of regex passes and writes the result back in place.
//!
//! ## Features
//!
//! - Delete malformed `benefitsHtml: `<div style=""…`` fragments
//! - Restore the separator comma between consecutive course records
//! - Inject a category-specific benefits template into each known course
//! - Discover data files across a project tree (respecting `.gitignore`)
//!
//! ## Usage
//!
//! ### As a Library
//!
//! ```no_run
//! use coursepatch::{apply_patches, PatchConfig};
//!
//! let buffer = std::fs::read_to_string("data/courses.ts").unwrap();
//!
//! match apply_patches(&buffer, &PatchConfig::default()) {
//!     Ok(outcome) => std::fs::write("data/courses.ts", outcome.content).unwrap(),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! ### As a CLI Tool
//!
//! ```bash
//! # Patch a data file in place
//! coursepatch data/courses.ts
//!
//! # Discover and patch every course data file in a project
//! coursepatch --scan /path/to/project
//!
//! # Cleanup passes only, no benefits insertion
//! coursepatch data/courses.ts --fix-only
//! ```

pub mod catalog;
pub mod error;
pub mod fs_utils;
pub mod rewrite;

// Re-export main types and functions for convenience
pub use catalog::{ASSIGNMENTS, BenefitCategory, category_for};
pub use error::{PatchError, Result};
pub use rewrite::{
    PatchConfig, PatchOutcome, RecordRef, apply_patches, find_records, insert_benefits,
    normalize_record_separators, patch_file, remove_malformed_blocks,
};
