pub mod note;
pub mod user;

pub use note::{CreateNoteRequest, Note, UpdateNoteRequest};
pub use user::{AuthResponse, SigninRequest, SignupRequest, UpdateProfileRequest, User, UserResponse};
