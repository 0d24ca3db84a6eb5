//! quizkit-report — Results page generation.
//!
//! Renders a completed [`QuizSummary`](quizkit_core::summary::QuizSummary)
//! as a standalone HTML page.

pub mod html;
