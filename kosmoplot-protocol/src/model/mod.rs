pub mod star;
