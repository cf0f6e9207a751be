pub mod find;
