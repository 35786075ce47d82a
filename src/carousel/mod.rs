pub(crate) mod breakpoints;
pub(crate) mod controller;
pub(crate) mod input;
pub(crate) mod layout;
