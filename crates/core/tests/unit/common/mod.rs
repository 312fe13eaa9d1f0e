/// Address validation and bit access.
pub mod address;
