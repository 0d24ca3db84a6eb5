//! quizkit-core — Quiz session state machine, question banks, and scoring.
//!
//! This crate defines the question model, the [`session::QuizSession`] state
//! machine, and the loaders and driver the rest of quizkit builds on.

pub mod builtin;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod session;
pub mod summary;
pub mod traits;
