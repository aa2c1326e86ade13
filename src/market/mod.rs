//! Market subsystem: commodity catalog, raw price generation, regional
//! headlines, and the composer that merges everything into the displayed
//! snapshot.

pub mod catalog;
pub mod composer;
pub mod headlines;
pub mod pricing;
pub mod types;
