//! Integration tests for the crawl engines
//!
//! These tests use wiremock to stand up mock news sites and exercise the
//! discovery engine, the batch crawl engine, and the coordinator
//! end-to-end against a test source.

mod common;

mod discovery_tests;
