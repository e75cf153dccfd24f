//! Value Object Module

pub mod full_name;
pub mod role_name;
pub mod text;
pub mod user_id;
