pub mod custom_orders;
pub mod system;
