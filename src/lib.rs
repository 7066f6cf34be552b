pub mod cli;
pub mod ctx;
pub mod io;
pub mod lms;
pub mod pipeline;
pub mod schema;
pub mod scores;
