mod common;
mod form;
mod service;
