pub mod create_session;
pub mod destroy_session;
pub mod register;
pub mod request_password_reset;
pub mod reset_password;
pub mod resolve_session;
pub mod validate_login;

pub use create_session::CreateSessionUseCase;
pub use destroy_session::DestroySessionUseCase;
pub use register::{RegisterError, RegisterUseCase};
pub use request_password_reset::{RequestPasswordResetError, RequestPasswordResetUseCase};
pub use reset_password::{ResetPasswordError, ResetPasswordUseCase};
pub use resolve_session::ResolveSessionUseCase;
pub use validate_login::{ValidateLoginError, ValidateLoginUseCase};
