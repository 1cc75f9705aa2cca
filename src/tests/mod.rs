pub mod common;

mod retry_policy;
