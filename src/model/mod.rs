pub mod establishment;
