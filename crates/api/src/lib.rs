pub mod annotations;
pub mod error;
pub mod health;
pub mod routes;
pub mod state;
