pub mod client;
pub mod db;
pub mod errors;
pub mod grant;
pub mod schema;

mod fields;

#[cfg(test)]
mod tests;
