//! File I/O for input documents.
//!
//! This module loads documents from disk or stdin so the command-line tool
//! can resolve paths against them. The path resolver itself never reads or
//! parses anything.

pub mod loader;
