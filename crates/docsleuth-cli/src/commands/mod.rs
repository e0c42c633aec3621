/// Command implementations, one module per surface.
pub mod catalog;
pub mod scan;
