mod link;

pub use link::{CreateLinkRequest, Link, NewLink, UpdateLinkRequest};
