pub mod auth_service;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth_service::AuthService;
pub use use_cases::{
    CreateSessionUseCase, DestroySessionUseCase, RegisterError, RegisterUseCase,
    RequestPasswordResetError, RequestPasswordResetUseCase, ResetPasswordError,
    ResetPasswordUseCase, ResolveSessionUseCase, ValidateLoginError, ValidateLoginUseCase,
};
