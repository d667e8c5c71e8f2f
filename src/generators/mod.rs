pub mod charset;
pub mod password;

pub use charset::Category;
pub use password::{GeneratorError, PasswordGenerator, MAX_PASSWORD_LENGTH};
