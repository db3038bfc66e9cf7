//! Integration tests driving the full router on the in-memory stores.

mod helpers;

mod comment_test;
mod element_test;
mod parents_test;
mod system_test;
mod tag_test;
