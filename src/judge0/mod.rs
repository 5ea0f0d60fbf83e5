/// Judge0 module contains the HTTP implementation of the judge trait,
/// talking to a Judge0 instance with base64-encoded fields.
pub mod client;
pub mod mappers;
pub mod models;
