//! Auth error types.

use thiserror::Error;

use roll_api::ApiError;

#[derive(Debug, Error)]
pub enum AuthError {
    /// No valid session. Callers route to the login screen.
    #[error("未登入或登入已過期")]
    NotAuthenticated,

    /// Login was acknowledged but no user came back.
    #[error("登入失敗：沒有回傳資料")]
    MissingUser,

    /// Any other backend failure.
    #[error(transparent)]
    Api(#[from] ApiError),
}
