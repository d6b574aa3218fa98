/// A failed tour, reported to the user as its message.
#[derive(Debug, derive_more::Display)]
#[display("{msg}")]
pub struct TourError {
    msg: String
}

impl TourError {
    pub fn new<S>(msg: S) -> Self
    where S: Into<String> {
        Self { msg: msg.into() }
    }
}

impl std::error::Error for TourError {}

pub type TourResult<T> = Result<T, Box<dyn std::error::Error>>;

macro_rules! err {
    ($($arg:tt)*) => {{
        let e = crate::app::err::TourError::new(format!($($arg)*));
        Err(e.into())
    }}
}

macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {{
        if !$cond {
            return err!($($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};
