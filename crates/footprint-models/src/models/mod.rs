pub mod detailed;
pub mod household;
