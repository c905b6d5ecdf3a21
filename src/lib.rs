pub mod cli;
pub mod config;
pub mod ctx;
pub mod error;
pub mod genotype;
pub mod input;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod record;
pub mod schema;
pub mod transform;
