//! API Routes
//!
//! Route handlers organized by functionality.

pub mod collections;
pub mod health;
pub mod navigation;
pub mod pages;
pub mod sections;
