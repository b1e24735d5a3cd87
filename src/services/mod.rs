// Service module exports

pub mod navigation;
pub mod settings;
