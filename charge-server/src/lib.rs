//! EV charging-stop planner server.
//!
//! A web application that answers: "My battery is at this level, where
//! should I stop to charge on the way to my destination?"

pub mod cache;
pub mod catalog;
pub mod directions;
pub mod domain;
pub mod planner;
pub mod polyline;
pub mod predictor;
pub mod web;
