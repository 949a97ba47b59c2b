mod config;
mod keys;
mod scan;
