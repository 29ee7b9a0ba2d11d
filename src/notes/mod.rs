pub mod http;
pub mod id;
pub mod model;
pub mod repo;
