//! High-level API for easy library usage
//!
//! This module wraps loading and the analytic operations behind one type.

pub mod analyzer;
pub mod builder;

pub use analyzer::StockAnalyzer;
pub use builder::AnalyzerBuilder;
