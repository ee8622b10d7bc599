mod errors;
mod global_api;
mod helpers;
mod temporal_api;
