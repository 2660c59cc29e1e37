//! Integration test modules.

mod goal_flow_test;
