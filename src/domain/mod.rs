//! Domain layer: headless view models of the StackSense client.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (state machine trait, errors)
//! - `catalog` - Option catalogs and the select fields they feed
//! - `select` - Searchable select view model
//! - `form` - Form data and the input form view model
//! - `recommendation` - Response schema of the recommendation service
//! - `results` - Projection of a response into cards
//! - `shell` - Application shell owning the interaction state

pub mod catalog;
pub mod form;
pub mod foundation;
pub mod recommendation;
pub mod results;
pub mod select;
pub mod shell;
