//! Test suite for SiteDesk
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
