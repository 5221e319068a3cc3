//! Request middleware: session extraction.

pub mod auth;
