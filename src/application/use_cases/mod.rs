/// Use cases module containing application business logic orchestration
mod flatten_sboms;

pub use flatten_sboms::FlattenSbomsUseCase;
