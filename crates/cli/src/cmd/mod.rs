pub mod decode;
pub mod notify;
