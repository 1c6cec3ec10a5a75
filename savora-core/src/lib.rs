pub mod app;
pub mod map;
pub mod reservations;
pub mod seed;
pub mod table;
pub mod usecases;

pub mod entities {
    pub use savora_entities::{
        city::*, id::*, page::*, reservation::*, restaurant::*,
    };
}
