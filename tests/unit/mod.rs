//! Unit test modules.

mod goal_store_test;
mod squat_counter_test;
