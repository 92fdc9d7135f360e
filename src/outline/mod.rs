pub(crate) mod segment;
pub(crate) mod source;
pub(crate) mod svg;
