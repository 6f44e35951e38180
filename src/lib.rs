//! # Folio
//!
//! Folio is a small catalogue service: it stores authors and books in a
//! relational database and exposes them over a JSON HTTP API. Authors are
//! keyed by a store-assigned numeric id; books are keyed by their
//! client-supplied ISBN.

// =========================================================================
//                  Canonical lints for whole crate
// =========================================================================
// Official docs:
//   https://doc.rust-lang.org/nightly/clippy/lints.html
//
// We set base lints to give the fullest, most pedantic feedback possible.
// Though we prefer that they are just warnings during development so that build-denial
// is only enforced in CI.
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
    reason = "Transitive deps of actix-web and sqlx pin differing versions"
)]
#![allow(
    clippy::question_mark_used,
    reason = "We rely on propagating errors with question mark extensively"
)]
#![allow(
    clippy::module_name_repetitions,
    reason = "Model types deliberately share a name with their module"
)]

pub mod db;
pub mod server;
pub mod utils;
