// Interface adapters: operator input, assets, presentation surfaces and the frame stream.

pub mod assets;
pub mod classic;
pub mod frames;
pub mod input;
pub mod protocol;
pub mod surface;
pub mod terminal;
