use std::{
    error::Error,
    fmt::{self, Debug, Display, Formatter},
};
use tracing::warn;

/// Error type of this crate. The variants mirror how callers are expected to
/// react: `Msg` is a plain failure, `Unsupported` marks an operation that is
/// meaningless for the given shape kind, `NotImplemented` marks a shape kind
/// that is declared but has no implementation yet.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum RoiError {
    Msg(String),
    Unsupported(String),
    NotImplemented(String),
}
impl RoiError {
    pub fn new(msg: &str) -> RoiError {
        RoiError::Msg(msg.to_string())
    }
    pub fn unsupported(msg: &str) -> RoiError {
        RoiError::Unsupported(msg.to_string())
    }
    pub fn not_implemented(msg: &str) -> RoiError {
        RoiError::NotImplemented(msg.to_string())
    }
    pub fn msg(&self) -> &str {
        match self {
            RoiError::Msg(m) | RoiError::Unsupported(m) | RoiError::NotImplemented(m) => m,
        }
    }
}
impl Display for RoiError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RoiError::Msg(m) => write!(f, "{m}"),
            RoiError::Unsupported(m) => write!(f, "unsupported operation: {m}"),
            RoiError::NotImplemented(m) => write!(f, "not implemented: {m}"),
        }
    }
}
impl Error for RoiError {}
impl From<&str> for RoiError {
    fn from(value: &str) -> Self {
        RoiError::new(value)
    }
}

/// roimark's result type with [`RoiError`](RoiError) as error type.
pub type RoiResult<U> = Result<U, RoiError>;

/// Resolves an error locally into `None` after emitting a diagnostic.
pub fn trace_ok_warn<T, E>(x: Result<T, E>) -> Option<T>
where
    E: Debug,
{
    match x {
        Ok(x) => Some(x),
        Err(e) => {
            warn!("{e:?}");
            None
        }
    }
}

/// Creates a [`RoiError::Msg`](RoiError::Msg) with a formatted message.
/// ```rust
/// # use std::error::Error;
/// use roimark::{roierr, RoiError};
/// # fn main() -> Result<(), Box<dyn Error>> {
/// assert_eq!(roierr!("some error {}", 1), RoiError::new(format!("some error {}", 1).as_str()));
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! roierr {
    ($s:literal) => {
        $crate::RoiError::new(format!($s).as_str())
    };
    ($s:literal, $( $exps:expr ),*) => {
        $crate::RoiError::new(format!($s, $($exps,)*).as_str())
    }
}
