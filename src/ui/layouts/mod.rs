// src/ui/layouts/mod.rs
//! Collapsible containers and the manager that packs them

pub mod container;
pub mod manager;

pub use container::{Container, ContainerKind};
pub use manager::{ContainerId, ContainerManager};
