//! Core utilities shared by the search engine and planner

pub mod time;
