//! ptsdk error type

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub struct PtsError {
    err: String,
}

impl PtsError {
    pub fn new(err: &str) -> PtsError {
        PtsError {
            err: err.to_string(),
        }
    }
}

impl Display for PtsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[PtsError]: {}", self.err)
    }
}

impl Error for PtsError {}

/// build a [`PtsError`] prefixed with the source location
#[macro_export]
macro_rules! pts_err {
    ( $x:expr ) => {{
        $crate::pts_error::PtsError::new(format!("{}:{} : {}", file!(), line!(), $x).as_str())
    }};
}

#[cfg(test)]
mod test_pts_error {
    #[test]
    fn test_pts_err_location() {
        let err = pts_err!("bad cone count");
        let msg = err.to_string();
        assert!(msg.starts_with("[PtsError]: "));
        assert!(msg.contains("pts_error.rs"));
        assert!(msg.ends_with(": bad cone count"));
    }
}
