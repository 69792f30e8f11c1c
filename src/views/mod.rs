pub(crate) mod form;
pub(crate) mod home;
pub(crate) mod warning;
