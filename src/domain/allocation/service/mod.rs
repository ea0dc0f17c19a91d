pub mod allocation_options;
pub mod allocation_service;
pub mod cluster_matcher;
pub mod overlap_allocator;
pub mod price_resolver;
