//! Service layer: multi-game orchestration on top of the domain engine.

pub mod games;
