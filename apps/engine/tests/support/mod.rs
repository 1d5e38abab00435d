#![allow(dead_code)]

pub mod logging;
pub mod match_helpers;

#[ctor::ctor]
fn init_logging() {
    logging::init();
}
