//! This module contains the API endpoints for the server.
pub mod authors;
pub mod books;
pub mod request;
pub mod routes;
pub mod state;
