#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

pub mod ecash;
pub mod errors;
pub mod keys;
pub mod rsa;
pub mod schemes;
pub mod utils;
