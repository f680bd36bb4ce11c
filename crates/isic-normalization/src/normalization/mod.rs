//! Stateless normalizers for raw metadata values.

pub mod age;
pub mod boolean;
pub mod measurement;
pub mod numeric;
pub mod sex;
pub mod term;
pub mod text;
