pub mod aports;
pub mod source;
