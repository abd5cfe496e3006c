//! Repository implementations using SeaORM

pub mod favorite_repository;

pub use favorite_repository::SeaOrmFavoriteRepository;
