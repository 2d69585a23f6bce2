pub mod fetch_state;
pub mod list;
pub mod money;
pub mod validation;
