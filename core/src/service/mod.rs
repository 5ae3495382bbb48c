pub mod dto;
pub mod pantry_service;
