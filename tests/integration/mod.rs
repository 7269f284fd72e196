//! Integration tests against a mocked backend

mod api;
mod app_state_test;
mod flows;
