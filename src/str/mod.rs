//! Text parsing and canonical formatting for [`crate::BigDecimal`].

pub(crate) mod fmt;
pub(crate) mod parse;
