pub(crate) mod value;
pub(crate) mod viewport;
