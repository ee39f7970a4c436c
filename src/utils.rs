pub mod abbreviate_state_names;
pub use abbreviate_state_names::abbreviate_state_names;
