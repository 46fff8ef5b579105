pub mod configs;
pub mod job;
