/// Adapters implementing the port interfaces.
pub mod outbound;
