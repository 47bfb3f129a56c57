// Application and presentation layers of the MindGarden service.
// The binary in main.rs only wires configuration, logging and the listener.

pub mod application;
pub mod presentation;
