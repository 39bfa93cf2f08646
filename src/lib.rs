//! # Vitrine
//!
//! Vitrine is the backend for a personal portfolio site. It mirrors the
//! public repository list of a configured code-hosting account into a local
//! project store and serves that store over HTTP, leaving HTML rendering to
//! whatever presentation layer is plugged into its rendering boundary.
//!
//! ## About the name
//!
//! A vitrine is a glass display case: the projects live elsewhere, this
//! service just keeps the case stocked and lets visitors look in.

// =========================================================================
//                  Canonical lints for whole crate
// =========================================================================
// Official docs:
//   https://doc.rust-lang.org/nightly/clippy/lints.html
//
// We set base lints to give the fullest, most pedantic feedback possible.
// Though we prefer that they are just warnings during development so that
// build-denial is only enforced in CI.
//
#![warn(
    // `clippy::all` is already on by default. It implies the following:
    //   clippy::correctness code that is outright wrong or useless
    //   clippy::suspicious code that is most likely wrong or useless
    //   clippy::complexity code that does something simple but in a complex way
    //   clippy::perf code that can be written to run faster
    //   clippy::style code that should be written in a more idiomatic way
    clippy::all,

    // It's always good to write as much documentation as possible
    missing_docs,

    // > clippy::pedantic lints which are rather strict or might have false positives
    clippy::pedantic,

    // > new lints that are still under development"
    // (so "nursery" doesn't mean "Rust newbies")
    clippy::nursery,

    // > The clippy::cargo group gives you suggestions on how to improve your Cargo.toml file.
    clippy::cargo
)]
// =========================================================================
//   Individually blanket-allow single lints relevant to this whole crate
// =========================================================================
#![allow(clippy::implicit_return, reason = "This is idiomatic Rust")]
#![allow(
    clippy::multiple_crate_versions,
    reason = "Transitive pins out of our control"
)]
#![allow(
    clippy::std_instead_of_core,
    reason = "Import items from std instead of core"
)]
#![allow(
    clippy::question_mark_used,
    reason = "We rely on propagating errors with question mark extensively"
)]
#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Not specifying `#[inline]` doesn't mean that a function won't be inlined"
)]
#![allow(
    clippy::exhaustive_structs,
    reason = "Marking `#[non_exhaustive]` is more for structs/enums that are imported into other crates"
)]
#![allow(
    clippy::exhaustive_enums,
    reason = "Marking `#[non_exhaustive]` is more for structs/enums that are imported into other crates"
)]

pub mod db;
pub mod server;
pub mod source;
pub mod sync;
pub mod utils;
