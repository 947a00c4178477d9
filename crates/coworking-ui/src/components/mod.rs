//! Layout components shared by every page.

pub(crate) mod shell;
