//! Integration Tests Module
//!
//! End-to-end tests for the AI Tools Studio application layer: workbench
//! flows wired from configuration through the HTTP clients, and the
//! background health monitor.

// Workbench tool flow tests
mod workbench_test;

// Backend health monitor tests
mod health_monitor_test;
