pub mod stats;
mod stats_test;
