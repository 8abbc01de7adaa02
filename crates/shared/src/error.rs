#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid date: {0}")]
    InvalidDate(#[from] time::error::ComponentRange),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject(quantity: i64) -> Result<i64> {
        if quantity < 0 {
            crate::bail!("negative quantity {quantity}");
        }

        Ok(quantity)
    }

    #[test]
    fn bail_returns_server_error() {
        let err = reject(-2).unwrap_err();
        assert!(matches!(err, Error::Server(_)));
        assert_eq!(err.to_string(), "negative quantity -2");
        assert_eq!(reject(3).unwrap(), 3);
    }

    #[test]
    fn component_range_maps_to_invalid_date() {
        let err: Error = time::Month::try_from(13).unwrap_err().into();
        assert!(err.to_string().starts_with("invalid date"));
    }
}
