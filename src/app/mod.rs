// Application layer: the serverless endpoint logic, kept free of any
// runtime wiring so it can be exercised directly in tests.

pub mod handlers;
pub mod types;
