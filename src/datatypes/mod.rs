pub mod comment;
pub mod requests;
