pub mod catalog;
pub mod control;
pub mod label;
pub mod pointer;
pub mod region;
