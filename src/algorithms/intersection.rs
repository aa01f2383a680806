pub mod sat;
