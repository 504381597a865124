pub mod scroll;
pub mod viacep;
