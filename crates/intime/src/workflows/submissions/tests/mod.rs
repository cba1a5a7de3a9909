mod common;
mod routing;
mod transition;
