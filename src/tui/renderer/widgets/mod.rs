pub mod fade;
pub mod layout;
pub mod text_input;
