pub mod sirene;
