mod cli;

pub use cli::CommonArgs;
