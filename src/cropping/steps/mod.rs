//! Individual cropping steps

pub mod crop;
pub mod pretrim;
pub mod silhouette;
