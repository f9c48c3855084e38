use super::*;

mod export;
mod fetch;
mod search;
