#![allow(dead_code)]

pub mod tunedash_env;
