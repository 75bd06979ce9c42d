//! Business services consumed by the sample routes.
//!
//! - `foobar`: derived "foobar" records backing `GET /sample/foobars`

pub mod foobar;
