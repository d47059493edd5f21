pub mod color;
pub mod ipc;
