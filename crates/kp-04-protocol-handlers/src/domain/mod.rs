pub mod build_info;
pub mod errors;
pub mod state;
