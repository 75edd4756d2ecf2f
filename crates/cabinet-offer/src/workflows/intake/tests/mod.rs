mod common;
mod offers;
