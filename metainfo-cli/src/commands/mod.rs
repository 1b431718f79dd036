pub(crate) mod config;
pub(crate) mod convert;
pub(crate) mod show;
pub(crate) mod validate;
